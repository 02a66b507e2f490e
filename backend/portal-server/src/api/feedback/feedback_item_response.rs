use crate::FeedbackDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct FeedbackItemResponse {
    pub feedback: FeedbackDto,
}
