use serde::{Deserialize, Serialize};

pub const MISSING_RELEASE_NOTES: &str = "No release notes provided.";

/// Recent release of a tracked repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    pub version: String,
    pub name: String,
    pub published_at: String,
    pub notes: String,
}

impl Release {
    /// Build from raw upstream fields, falling back to the tag for the name
    /// and to a placeholder for empty notes.
    pub fn from_upstream(
        tag_name: String,
        name: Option<String>,
        published_at: Option<String>,
        body: Option<String>,
    ) -> Self {
        let name = name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| tag_name.clone());
        let notes = body
            .filter(|b| !b.is_empty())
            .unwrap_or_else(|| MISSING_RELEASE_NOTES.to_string());

        Self {
            version: tag_name,
            name,
            published_at: published_at.unwrap_or_default(),
            notes,
        }
    }
}
