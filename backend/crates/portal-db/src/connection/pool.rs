use crate::{DbError, Result};

use portal_core::ErrorLocation;

use std::panic::Location;
use std::str::FromStr;
use std::time::Duration;

use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

/// Open a pool for a `sqlite:` URL, creating the file and its directory when missing.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let in_memory = database_url.contains(":memory:");

    let mut options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    if !in_memory {
        options = options.journal_mode(SqliteJournalMode::Wal);

        if let Some(parent) = options.get_filename().parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| DbError::Initialization {
                    message: format!(
                        "Failed to create database directory {}: {}",
                        parent.display(),
                        e
                    ),
                    location: ErrorLocation::from(Location::caller()),
                })?;
        }
    }

    // Each in-memory connection would otherwise see its own database
    let max_connections = if in_memory { 1 } else { max_connections.max(1) };

    let mut pool_options = SqlitePoolOptions::new().max_connections(max_connections);
    if in_memory {
        // Closing the only connection drops the database
        pool_options = pool_options
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>);
    }

    let pool = pool_options.connect_with(options).await?;

    info!(
        "Database pool ready ({} connection{})",
        max_connections,
        if max_connections == 1 { "" } else { "s" }
    );

    Ok(pool)
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| DbError::Migration {
            message: format!("Migration failed: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(())
}
