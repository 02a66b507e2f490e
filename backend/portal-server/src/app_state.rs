use portal_core::ValidationLimits;
use portal_stats::RepoStatsCache;

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;
use sqlx::SqlitePool;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub stats: Arc<RepoStatsCache>,
    pub limits: ValidationLimits,
    /// Bearer token for the /admin routes
    pub admin_secret: Arc<str>,
    /// None when no recorder is installed (tests)
    pub prometheus: Option<PrometheusHandle>,
}
