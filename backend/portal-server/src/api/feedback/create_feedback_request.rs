use serde::Deserialize;

/// Request body for submitting feedback from one of the portal's apps
#[derive(Debug, Deserialize)]
pub struct CreateFeedbackRequest {
    pub app_id: String,
    /// Looked up from the catalog when omitted
    #[serde(default)]
    pub app_name: Option<String>,
    #[serde(rename = "type")]
    pub feedback_type: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub priority: Option<String>,
    pub submitted_by: String,
    #[serde(default)]
    pub screenshots: Vec<String>,
}
