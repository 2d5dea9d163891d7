/// Database connection and pool configuration tests
pub mod db_tests;


/// Skip DB-backed tests unless a database is explicitly provided.
/// `SKIP_DB_TESTS` forces a skip even when `DATABASE_URL` is set.
pub fn skip_db_tests() -> bool {
    let _ = dotenvy::dotenv();
    std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err()
}
