use crate::{FeedbackPriority, FeedbackStatus, FeedbackType};

use std::str::FromStr;

#[test]
fn test_feedback_type_round_trips_through_str() {
    for t in [
        FeedbackType::Bug,
        FeedbackType::Feature,
        FeedbackType::Issue,
        FeedbackType::Question,
        FeedbackType::Improvement,
    ] {
        assert_eq!(FeedbackType::from_str(t.as_str()).unwrap(), t);
    }
    assert!(FeedbackType::from_str("idea").is_err());
}

#[test]
fn test_feedback_priority_from_str() {
    assert_eq!(
        FeedbackPriority::from_str("critical").unwrap(),
        FeedbackPriority::Critical
    );
    assert!(FeedbackPriority::from_str("urgent").is_err());
}

#[test]
fn test_feedback_priority_default() {
    assert_eq!(FeedbackPriority::default(), FeedbackPriority::Medium);
}

#[test]
fn test_feedback_status_from_str() {
    assert_eq!(
        FeedbackStatus::from_str("in_progress").unwrap(),
        FeedbackStatus::InProgress
    );
    assert!(FeedbackStatus::from_str("in-progress").is_err());
    assert!(FeedbackStatus::from_str("OPEN").is_err());
}

#[test]
fn test_feedback_status_is_terminal() {
    assert!(!FeedbackStatus::Open.is_terminal());
    assert!(!FeedbackStatus::InProgress.is_terminal());
    assert!(FeedbackStatus::Resolved.is_terminal());
    assert!(FeedbackStatus::Closed.is_terminal());
}

#[test]
fn test_invalid_status_error_names_field() {
    let err = FeedbackStatus::from_str("done").unwrap_err();

    assert_eq!(err.field(), Some("status"));
    assert!(err.client_message().contains("done"));
}
