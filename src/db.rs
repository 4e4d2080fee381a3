use std::{str::FromStr, time::Duration};

use anyhow::Result;
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

pub type DbPool = SqlitePool;

/// Open a SQLite pool, creating the database file when it does not exist yet.
///
/// In-memory databases (`sqlite::memory:`) live only as long as their
/// connection, so callers should pass `max_connections = 1` for those.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect_with(options)
        .await?;
    Ok(pool)
}

/// Apply the embedded schema in `migrations/`. Safe to run on every start.
pub async fn run_migrations(pool: &DbPool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
