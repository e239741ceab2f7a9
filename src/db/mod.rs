use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

pub type Pool = SqlitePool;

/// Open a connection pool against `database_url`.
///
/// In-memory databases are capped at a single connection: every pooled
/// connection to `sqlite::memory:` would otherwise see its own empty store.
pub async fn create_pool(database_url: &str) -> Result<Pool, sqlx::Error> {
    let max_connections = if database_url.contains(":memory:") { 1 } else { 5 };
    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

pub async fn run_migrations(pool: &Pool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
