use crate::FeedbackDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct FeedbackListResponse {
    /// Newest first unless a sort was requested
    pub feedback: Vec<FeedbackDto>,
}
