use std::{env, net::SocketAddr};

use axum::http::HeaderValue;
use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::routes::{self, ServerState};

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

/// Cross-origin requests are restricted to the one configured origin.
fn build_cors(cfg: &configs::CorsConfig) -> anyhow::Result<CorsLayer> {
    let origin: HeaderValue = cfg.allowed_origin.parse()?;
    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any))
}

/// Load configuration from file, with env-var fallbacks when it is absent
fn load_config() -> configs::AppConfig {
    match configs::AppConfig::load_and_validate() {
        Ok(cfg) => cfg,
        Err(err) => {
            info!(error = %err, "config file unavailable; using env/default configuration");
            let mut cfg = configs::AppConfig::default();
            if let Ok(host) = env::var("SERVER_HOST") {
                cfg.server.host = host;
            }
            if let Some(port) = env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
                cfg.server.port = port;
            }
            cfg.database.normalize_from_env();
            cfg.cors.normalize_from_env();
            cfg
        }
    }
}

async fn connect_db(cfg: &configs::DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    if cfg.url.trim().is_empty() {
        // No configured URL; models falls back to DATABASE_URL / its default
        models::db::connect().await
    } else {
        models::db::connect_with(cfg).await
    }
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let cfg = load_config();
    let cors = build_cors(&cfg.cors)?;

    // DB connection
    let db = connect_db(&cfg.database).await?;

    // Build router
    let state = ServerState { db };
    let app: Router = routes::build_router(cors, state);

    // Bind and serve
    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    info!(%addr, "starting restaurant api server");
    println!("starting restaurant api server at {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
