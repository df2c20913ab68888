use std::path::Path;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    pw_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Creates an on-disk pool with several connections, for concurrency tests
pub async fn create_file_pool(dir: &Path) -> SqlitePool {
    pw_db::connect(&dir.join("users.db"))
        .await
        .expect("Failed to create file pool")
}
