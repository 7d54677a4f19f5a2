use anyhow::Result;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;
use crate::config::Config;

pub mod models;
pub mod registrations;

pub type DbPool = SqlitePool;

/// Embedded schema migrations, applied at startup and by the test harness.
pub static MIGRATOR: Migrator = sqlx::migrate!("./src/db/migrations");

/// How long a writer waits for the database lock before giving up.
pub const BUSY_TIMEOUT_SECS: u64 = 10;

pub async fn init(cfg: &Config) -> Result<DbPool> {
    let options = SqliteConnectOptions::from_str(&cfg.database.url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_secs(BUSY_TIMEOUT_SECS));

    let pool = SqlitePoolOptions::new()
        .max_connections(cfg.database.max_connections)
        .connect_with(options)
        .await?;

    MIGRATOR.run(&pool).await?;

    tracing::info!("Database connected: {}", cfg.database.url);
    Ok(pool)
}
