use crate::{AppCategory, AppStatus};

use serde::Serialize;

/// One card of the portal's catalog
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AppLink {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub category: AppCategory,
    pub status: AppStatus,
    pub is_external: bool,
    /// Built in-house rather than a third-party platform
    pub is_custom_build: bool,
    /// Completion percentage for apps still in development
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
}
