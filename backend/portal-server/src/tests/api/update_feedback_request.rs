use crate::{ApiError, UpdateFeedbackRequest};

use portal_core::{FeedbackPriority, FeedbackStatus};

#[test]
fn test_empty_request_is_empty_update() {
    let update = UpdateFeedbackRequest::default().into_update().unwrap();

    assert!(update.is_empty());
}

#[test]
fn test_parses_enums_and_dates() {
    let request = UpdateFeedbackRequest {
        status: Some("in_progress".into()),
        priority: Some("critical".into()),
        target_date: Some(1_767_225_600),
        ..Default::default()
    };

    let update = request.into_update().unwrap();

    assert_eq!(update.status, Some(FeedbackStatus::InProgress));
    assert_eq!(update.priority, Some(FeedbackPriority::Critical));
    assert_eq!(update.target_date.map(|d| d.timestamp()), Some(1_767_225_600));
    assert!(update.completed_date.is_none());
}

#[test]
fn test_unknown_priority_is_validation_error() {
    let request = UpdateFeedbackRequest {
        priority: Some("urgent".into()),
        ..Default::default()
    };

    match request.into_update() {
        Err(ApiError::Validation { field, .. }) => assert_eq!(field.as_deref(), Some("priority")),
        other => panic!("Expected Validation error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_out_of_range_date_is_validation_error() {
    let request = UpdateFeedbackRequest {
        completed_date: Some(i64::MAX),
        ..Default::default()
    };

    match request.into_update() {
        Err(ApiError::Validation { field, .. }) => {
            assert_eq!(field.as_deref(), Some("completed_date"))
        }
        other => panic!("Expected Validation error, got {:?}", other.map(|_| ())),
    }
}
