use sea_orm::{ConnectionTrait, Statement};

use crate::db;
use crate::tests::skip_db_tests;

#[tokio::test]
async fn test_connect_and_ping() -> anyhow::Result<()> {
    if skip_db_tests() {
        println!("database not configured; skipping test_connect_and_ping");
        return Ok(());
    }

    let db = db::connect().await?;
    let backend = db.get_database_backend();
    let row = db
        .query_one(Statement::from_string(backend, "SELECT 1 AS one"))
        .await?;
    assert!(row.is_some());
    Ok(())
}

#[tokio::test]
async fn test_connect_with_custom_pool_config() -> anyhow::Result<()> {
    if skip_db_tests() {
        println!("database not configured; skipping test_connect_with_custom_pool_config");
        return Ok(());
    }

    let cfg = configs::DatabaseConfig {
        url: db::DATABASE_URL.clone(),
        max_connections: 3,
        min_connections: 1,
        connect_timeout_secs: 10,
        idle_timeout_secs: 60,
        max_lifetime_secs: 600,
        acquire_timeout_secs: 10,
        sqlx_logging: false,
    };

    let db = db::connect_with(&cfg).await?;
    assert!(db.ping().await.is_ok());
    Ok(())
}
