use portal_core::FeedbackResponse;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ResponseDto {
    pub id: String,
    pub feedback_id: String,
    pub author: String,
    pub message: String,
    pub is_internal: bool,
    pub created_at: i64,
}

impl From<FeedbackResponse> for ResponseDto {
    fn from(r: FeedbackResponse) -> Self {
        Self {
            id: r.id.to_string(),
            feedback_id: r.feedback_id.to_string(),
            author: r.author,
            message: r.message,
            is_internal: r.is_internal,
            created_at: r.created_at.timestamp(),
        }
    }
}
