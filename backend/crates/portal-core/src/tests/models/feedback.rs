use crate::tests::{new_feedback_input, test_feedback};
use crate::{Feedback, FeedbackPriority, FeedbackStatus, FeedbackUpdate};

use chrono::{Duration, Utc};

#[test]
fn test_new_feedback_is_open_without_completed_date() {
    let feedback = test_feedback();

    assert_eq!(feedback.status, FeedbackStatus::Open);
    assert_eq!(feedback.priority, FeedbackPriority::Medium);
    assert!(feedback.completed_date.is_none());
    assert!(feedback.complexity.is_none());
    assert!(feedback.screenshots.is_empty());
}

#[test]
fn test_new_feedback_keeps_explicit_priority() {
    let mut input = new_feedback_input();
    input.priority = Some(FeedbackPriority::Critical);

    let feedback = Feedback::new(input);

    assert_eq!(feedback.priority, FeedbackPriority::Critical);
}

#[test]
fn test_resolving_stamps_completed_date() {
    let mut feedback = test_feedback();
    let now = Utc::now();

    feedback.apply_update(
        FeedbackUpdate {
            status: Some(FeedbackStatus::Resolved),
            ..Default::default()
        },
        now,
    );

    assert_eq!(feedback.status, FeedbackStatus::Resolved);
    assert_eq!(feedback.completed_date, Some(now));
}

#[test]
fn test_closing_stamps_completed_date() {
    let mut feedback = test_feedback();
    let now = Utc::now();

    feedback.apply_update(
        FeedbackUpdate {
            status: Some(FeedbackStatus::Closed),
            ..Default::default()
        },
        now,
    );

    assert_eq!(feedback.completed_date, Some(now));
}

#[test]
fn test_explicit_completed_date_wins_over_stamp() {
    let mut feedback = test_feedback();
    let now = Utc::now();
    let explicit = now - Duration::days(3);

    feedback.apply_update(
        FeedbackUpdate {
            status: Some(FeedbackStatus::Resolved),
            completed_date: Some(explicit),
            ..Default::default()
        },
        now,
    );

    assert_eq!(feedback.completed_date, Some(explicit));
}

#[test]
fn test_existing_completed_date_is_not_restamped() {
    let mut feedback = test_feedback();
    let first = Utc::now() - Duration::days(1);
    feedback.apply_update(
        FeedbackUpdate {
            status: Some(FeedbackStatus::Resolved),
            ..Default::default()
        },
        first,
    );

    feedback.apply_update(
        FeedbackUpdate {
            status: Some(FeedbackStatus::Closed),
            ..Default::default()
        },
        Utc::now(),
    );

    assert_eq!(feedback.status, FeedbackStatus::Closed);
    assert_eq!(feedback.completed_date, Some(first));
}

#[test]
fn test_non_terminal_status_never_touches_completed_date() {
    let mut feedback = test_feedback();

    feedback.apply_update(
        FeedbackUpdate {
            status: Some(FeedbackStatus::InProgress),
            ..Default::default()
        },
        Utc::now(),
    );
    assert!(feedback.completed_date.is_none());

    let resolved_at = Utc::now();
    feedback.apply_update(
        FeedbackUpdate {
            status: Some(FeedbackStatus::Resolved),
            ..Default::default()
        },
        resolved_at,
    );
    feedback.apply_update(
        FeedbackUpdate {
            status: Some(FeedbackStatus::Open),
            ..Default::default()
        },
        Utc::now(),
    );

    assert_eq!(feedback.status, FeedbackStatus::Open);
    assert_eq!(feedback.completed_date, Some(resolved_at));
}

#[test]
fn test_omitted_fields_are_left_alone() {
    let mut feedback = test_feedback();
    feedback.apply_update(
        FeedbackUpdate {
            complexity: Some(3),
            business_value: Some(4),
            estimated_hours: Some(12.5),
            ..Default::default()
        },
        Utc::now(),
    );

    feedback.apply_update(
        FeedbackUpdate {
            priority: Some(FeedbackPriority::High),
            ..Default::default()
        },
        Utc::now(),
    );

    assert_eq!(feedback.priority, FeedbackPriority::High);
    assert_eq!(feedback.complexity, Some(3));
    assert_eq!(feedback.business_value, Some(4));
    assert_eq!(feedback.estimated_hours, Some(12.5));
    assert_eq!(feedback.status, FeedbackStatus::Open);
}

#[test]
fn test_update_is_empty() {
    assert!(FeedbackUpdate::default().is_empty());
    assert!(
        !FeedbackUpdate {
            complexity: Some(1),
            ..Default::default()
        }
        .is_empty()
    );
}
