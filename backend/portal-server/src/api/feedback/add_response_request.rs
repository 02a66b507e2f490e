use serde::Deserialize;

/// Request body for replying to a feedback item
#[derive(Debug, Deserialize)]
pub struct AddResponseRequest {
    pub message: String,
    pub author: String,
    /// Internal notes are hidden from the submitter
    #[serde(default)]
    pub is_internal: bool,
}
