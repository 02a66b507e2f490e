use serde::Deserialize;

/// Query parameters for the catalog. Every filter defaults to "all".
#[derive(Debug, Default, Deserialize)]
pub struct ListAppsQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    /// all, custom or external
    pub build_type: Option<String>,
}
