use crate::error::DbError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::time::Duration;

/// Opens (creating if necessary) the SQLite database file and returns the
/// long-lived connection handle used for the rest of the process.
///
/// Foreign keys are switched on so that every record kind gets the same
/// write-time referential integrity: inserting a history row that points at a
/// nonexistent animal fails with a constraint violation instead of leaving a
/// dangling reference.
pub async fn connect(path: &str) -> Result<SqlitePool, DbError> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .foreign_keys(true);

    // Single-user, human data-entry pace: one connection is all we need, and
    // it keeps in-memory databases alive for the whole pool lifetime.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// A utility function to run database migrations automatically.
///
/// This is useful for ensuring the database schema is up-to-date when the
/// application starts.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), DbError> {
    // Use a relative path from the crate root
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
