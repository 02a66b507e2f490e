use portal_core::{AppLink, CatalogSummary};

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AppListResponse {
    pub apps: Vec<AppLink>,
    /// Counts over the whole catalog, not the filtered list
    pub summary: CatalogSummary,
    pub active_filter_count: usize,
}
