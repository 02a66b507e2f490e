use crate::{FeedbackPriority, FeedbackType};

/// Submission payload for a new feedback item
#[derive(Debug, Clone)]
pub struct NewFeedback {
    pub app_id: String,
    pub app_name: String,
    pub feedback_type: FeedbackType,
    pub title: String,
    pub description: String,
    /// Defaults to medium when absent
    pub priority: Option<FeedbackPriority>,
    pub submitted_by: String,
    pub screenshots: Vec<String>,
}
