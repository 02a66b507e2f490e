use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Admin reply attached to a feedback item. Never edited after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackResponse {
    pub id: Uuid,
    pub feedback_id: Uuid,

    pub author: String,
    pub message: String,
    pub is_internal: bool,

    pub created_at: DateTime<Utc>,
}

impl FeedbackResponse {
    pub fn new(feedback_id: Uuid, author: String, message: String, is_internal: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            feedback_id,
            author,
            message,
            is_internal,
            created_at: Utc::now(),
        }
    }
}
