mod catalog;
mod models;

use crate::{Feedback, FeedbackType, NewFeedback};

pub(crate) fn new_feedback_input() -> NewFeedback {
    NewFeedback {
        app_id: "forecaster".to_string(),
        app_name: "Forecasting Tool".to_string(),
        feedback_type: FeedbackType::Bug,
        title: "Crash on load".to_string(),
        description: "The dashboard crashes right after login".to_string(),
        priority: None,
        submitted_by: "a@b.com".to_string(),
        screenshots: Vec::new(),
    }
}

pub(crate) fn test_feedback() -> Feedback {
    Feedback::new(new_feedback_input())
}
