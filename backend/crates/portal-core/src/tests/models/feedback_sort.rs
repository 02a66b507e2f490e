use crate::tests::test_feedback;
use crate::{Feedback, FeedbackGradeFilter, FeedbackSort, refine_feedback};

use std::str::FromStr;

use chrono::{Duration, Utc};

fn graded(title: &str, complexity: Option<i32>, business_value: Option<i32>) -> Feedback {
    let mut feedback = test_feedback();
    feedback.title = title.to_string();
    feedback.complexity = complexity;
    feedback.business_value = business_value;
    feedback
}

fn titles(items: &[Feedback]) -> Vec<&str> {
    items.iter().map(|f| f.title.as_str()).collect()
}

#[test]
fn test_sort_from_str() {
    assert_eq!(
        FeedbackSort::from_str("business_value").unwrap(),
        FeedbackSort::BusinessValue
    );
    assert!(FeedbackSort::from_str("priority").is_err());
    assert_eq!(FeedbackSort::default(), FeedbackSort::CreatedAt);
}

#[test]
fn test_created_at_sort_is_newest_first() {
    let now = Utc::now();
    let mut old = graded("old", None, None);
    old.created_at = now - Duration::hours(2);
    let mut new = graded("new", None, None);
    new.created_at = now;

    let sorted = refine_feedback(
        vec![old, new],
        &FeedbackGradeFilter::default(),
        FeedbackSort::CreatedAt,
    );

    assert_eq!(titles(&sorted), vec!["new", "old"]);
}

#[test]
fn test_business_value_sort_treats_ungraded_as_zero() {
    let items = vec![
        graded("none", None, None),
        graded("two", None, Some(2)),
        graded("five", None, Some(5)),
    ];

    let sorted = refine_feedback(
        items,
        &FeedbackGradeFilter::default(),
        FeedbackSort::BusinessValue,
    );

    assert_eq!(titles(&sorted), vec!["five", "two", "none"]);
}

#[test]
fn test_estimated_hours_sort_is_largest_first() {
    let mut small = graded("small", None, None);
    small.estimated_hours = Some(1.5);
    let mut large = graded("large", None, None);
    large.estimated_hours = Some(40.0);
    let unknown = graded("unknown", None, None);

    let sorted = refine_feedback(
        vec![small, unknown, large],
        &FeedbackGradeFilter::default(),
        FeedbackSort::EstimatedHours,
    );

    assert_eq!(titles(&sorted), vec!["large", "small", "unknown"]);
}

#[test]
fn test_target_date_sort_puts_missing_dates_last() {
    let now = Utc::now();
    let mut soon = graded("soon", None, None);
    soon.target_date = Some(now + Duration::days(1));
    let mut later = graded("later", None, None);
    later.target_date = Some(now + Duration::days(30));
    let undated = graded("undated", None, None);

    let sorted = refine_feedback(
        vec![undated, later, soon],
        &FeedbackGradeFilter::default(),
        FeedbackSort::TargetDate,
    );

    assert_eq!(titles(&sorted), vec!["soon", "later", "undated"]);
}

#[test]
fn test_ties_keep_incoming_order() {
    let items = vec![
        graded("first", Some(3), None),
        graded("second", Some(3), None),
        graded("third", Some(3), None),
    ];

    let sorted = refine_feedback(
        items,
        &FeedbackGradeFilter::default(),
        FeedbackSort::Complexity,
    );

    assert_eq!(titles(&sorted), vec!["first", "second", "third"]);
}

#[test]
fn test_grade_filter_requires_exact_match() {
    let items = vec![
        graded("c2-v4", Some(2), Some(4)),
        graded("c2-v1", Some(2), Some(1)),
        graded("c5-v4", Some(5), Some(4)),
        graded("ungraded", None, None),
    ];

    let filter = FeedbackGradeFilter {
        complexity: Some(2),
        business_value: Some(4),
    };
    let refined = refine_feedback(items, &filter, FeedbackSort::CreatedAt);

    assert_eq!(titles(&refined), vec!["c2-v4"]);
}
