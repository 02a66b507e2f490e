//! Administrative endpoints, guarded by the AUTH_SECRET bearer token.

use crate::{AdminToken, ApiError, ApiResult, AppState};

use std::panic::Location;

use axum::{Json, extract::State};
use error_location::ErrorLocation;
use log::info;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CheckpointResponse {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub repositories: usize,
    pub measured: usize,
}

/// Checkpoint WAL to main database file.
///
/// Forces SQLite to flush the Write-Ahead Log into the main database file.
pub async fn checkpoint_handler(
    _admin: AdminToken,
    State(state): State<AppState>,
) -> ApiResult<Json<CheckpointResponse>> {
    info!("Manual checkpoint requested");

    sqlx::query("PRAGMA wal_checkpoint(TRUNCATE)")
        .execute(&state.pool)
        .await?;

    info!("Database checkpoint completed");

    Ok(Json(CheckpointResponse {
        status: "ok".to_string(),
        message: "Database checkpoint completed".to_string(),
    }))
}

/// Fetch the repository statistics again, bypassing the TTL.
///
/// Fails with 502 only when repositories are configured and none of them
/// could be measured. The previously cached set is kept in that case.
pub async fn refresh_repo_stats(
    _admin: AdminToken,
    State(state): State<AppState>,
) -> ApiResult<Json<RefreshResponse>> {
    info!("Repository statistics refresh requested");

    let fresh = state.stats.refresh().await;

    let repositories = state.stats.repositories().len();
    if repositories > 0 && fresh.stats.is_empty() {
        return Err(ApiError::Upstream {
            message: "No repository statistics could be fetched from GitHub".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(Json(RefreshResponse {
        repositories,
        measured: fresh.stats.len(),
    }))
}
