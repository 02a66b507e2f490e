use crate::{AppLink, AppStatus};

use serde::Serialize;

/// Headline counts shown above the catalog grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogSummary {
    pub total_apps: usize,
    pub custom_builds: usize,
    pub in_production: usize,
    pub in_progress: usize,
}

impl CatalogSummary {
    pub fn from_apps(apps: &[AppLink]) -> Self {
        let with_status = |status: AppStatus| apps.iter().filter(|a| a.status == status).count();

        Self {
            total_apps: apps.len(),
            custom_builds: apps.iter().filter(|a| a.is_custom_build).count(),
            in_production: with_status(AppStatus::Production),
            in_progress: with_status(AppStatus::InProgress),
        }
    }
}
