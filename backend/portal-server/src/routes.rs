use crate::{
    AppState, add_response, admin, create_feedback, delete_feedback, feedback_stats,
    get_feedback, get_repo_stats, get_repo_totals, health, list_apps, list_feedback, metrics,
    update_feedback,
};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Room for the JSON envelope around the screenshots
const BODY_OVERHEAD_BYTES: usize = 1024 * 1024;

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let body_limit = state
        .limits
        .max_screenshots
        .saturating_mul(state.limits.max_screenshot_bytes)
        .saturating_add(BODY_OVERHEAD_BYTES);

    Router::new()
        // Feedback
        .route(
            "/api/v1/feedback",
            get(list_feedback).post(create_feedback),
        )
        .route("/api/v1/feedback/stats", get(feedback_stats))
        .route(
            "/api/v1/feedback/{id}",
            get(get_feedback)
                .patch(update_feedback)
                .delete(delete_feedback),
        )
        .route("/api/v1/feedback/{id}/responses", post(add_response))
        // Catalog
        .route("/api/v1/apps", get(list_apps))
        // Repository statistics
        .route("/api/repo-stats", get(get_repo_stats))
        .route("/api/repo-stats/totals", get(get_repo_totals))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .route("/metrics", get(metrics::metrics_handler))
        // Admin endpoints
        .route("/admin/checkpoint", post(admin::checkpoint_handler))
        .route("/admin/repo-stats/refresh", post(admin::refresh_repo_stats))
        .layer(DefaultBodyLimit::max(body_limit))
        // Add shared state
        .with_state(state)
        // CORS middleware (the portal's apps post feedback cross-origin)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
