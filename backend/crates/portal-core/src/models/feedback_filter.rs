use crate::{FeedbackStatus, FeedbackType};

/// Store-level filter; every present field must match
#[derive(Debug, Clone, Default)]
pub struct FeedbackFilter {
    pub app_id: Option<String>,
    pub status: Option<FeedbackStatus>,
    pub feedback_type: Option<FeedbackType>,
}
