use serde::Deserialize;

/// Query parameters for listing feedback
#[derive(Debug, Default, Deserialize)]
pub struct ListFeedbackQuery {
    pub app_id: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "type")]
    pub feedback_type: Option<String>,
    /// Exact grade match, parsed by the handler
    pub complexity: Option<String>,
    /// Exact grade match, parsed by the handler
    pub business_value: Option<String>,
    /// created_at (default), business_value, complexity, estimated_hours or target_date
    pub sort: Option<String>,
}
