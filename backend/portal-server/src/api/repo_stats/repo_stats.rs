//! Repository statistics handlers
//!
//! Upstream failures never surface here: the cache omits repositories it
//! could not measure and the endpoint returns whatever it has.

use crate::{AppState, RepoTotalsResponse};

use portal_stats::CachedStats;

use axum::{Json, extract::State};

/// GET /api/repo-stats
pub async fn get_repo_stats(State(state): State<AppState>) -> Json<CachedStats> {
    Json(state.stats.get().await)
}

/// GET /api/repo-stats/totals
pub async fn get_repo_totals(State(state): State<AppState>) -> Json<RepoTotalsResponse> {
    let cached = state.stats.get().await;

    Json(RepoTotalsResponse {
        totals: cached.totals(),
        cached: cached.cached,
    })
}
