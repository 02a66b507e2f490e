use portal_core::{Feedback, FeedbackResponse, FeedbackStatus, FeedbackType, NewFeedback};

use chrono::{Duration, Utc};
use uuid::Uuid;

/// Creates a test Feedback with sensible defaults
pub fn create_test_feedback(app_id: &str, feedback_type: FeedbackType) -> Feedback {
    Feedback::new(NewFeedback {
        app_id: app_id.to_string(),
        app_name: format!("App {}", app_id),
        feedback_type,
        title: "Crash on load".to_string(),
        description: "The page crashes after login".to_string(),
        priority: None,
        submitted_by: "a@b.com".to_string(),
        screenshots: Vec::new(),
    })
}

/// Creates a test Feedback whose creation time lies `seconds_ago` in the past
pub fn create_test_feedback_at(app_id: &str, seconds_ago: i64) -> Feedback {
    let mut feedback = create_test_feedback(app_id, FeedbackType::Bug);
    feedback.created_at = Utc::now() - Duration::seconds(seconds_ago);
    feedback.updated_at = feedback.created_at;
    feedback
}

pub fn create_test_feedback_with_status(status: FeedbackStatus) -> Feedback {
    let mut feedback = create_test_feedback("forecaster", FeedbackType::Bug);
    feedback.status = status;
    feedback
}

/// Creates a test FeedbackResponse with sensible defaults
pub fn create_test_response(feedback_id: Uuid, message: &str) -> FeedbackResponse {
    FeedbackResponse::new(
        feedback_id,
        "admin".to_string(),
        message.to_string(),
        false,
    )
}
