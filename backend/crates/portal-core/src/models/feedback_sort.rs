use crate::{CoreError, CoreErrorResult, Feedback};

use std::cmp::Ordering;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Sort orders offered by the feedback admin grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackSort {
    /// Newest first
    #[default]
    CreatedAt,
    /// Highest first, ungraded counts as 0
    BusinessValue,
    /// Highest first, ungraded counts as 0
    Complexity,
    /// Largest first, ungraded counts as 0
    EstimatedHours,
    /// Earliest first, items without a target date last
    TargetDate,
}

impl FeedbackSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::BusinessValue => "business_value",
            Self::Complexity => "complexity",
            Self::EstimatedHours => "estimated_hours",
            Self::TargetDate => "target_date",
        }
    }

    pub fn compare(&self, a: &Feedback, b: &Feedback) -> Ordering {
        match self {
            Self::CreatedAt => b.created_at.cmp(&a.created_at),
            Self::BusinessValue => b
                .business_value
                .unwrap_or(0)
                .cmp(&a.business_value.unwrap_or(0)),
            Self::Complexity => b.complexity.unwrap_or(0).cmp(&a.complexity.unwrap_or(0)),
            Self::EstimatedHours => b
                .estimated_hours
                .unwrap_or(0.0)
                .total_cmp(&a.estimated_hours.unwrap_or(0.0)),
            Self::TargetDate => match (a.target_date, b.target_date) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => a.cmp(&b),
            },
        }
    }
}

impl FromStr for FeedbackSort {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "created_at" => Ok(Self::CreatedAt),
            "business_value" => Ok(Self::BusinessValue),
            "complexity" => Ok(Self::Complexity),
            "estimated_hours" => Ok(Self::EstimatedHours),
            "target_date" => Ok(Self::TargetDate),
            _ => Err(CoreError::InvalidFeedbackSort {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

/// Exact-match filters on grading fields, applied after the store query
#[derive(Debug, Clone, Copy, Default)]
pub struct FeedbackGradeFilter {
    pub complexity: Option<i32>,
    pub business_value: Option<i32>,
}

impl FeedbackGradeFilter {
    pub fn matches(&self, feedback: &Feedback) -> bool {
        self.complexity.is_none_or(|c| feedback.complexity == Some(c))
            && self
                .business_value
                .is_none_or(|v| feedback.business_value == Some(v))
    }
}

/// Filter by grade, then sort. The sort is stable, so ties keep the incoming order.
pub fn refine_feedback(
    items: Vec<Feedback>,
    grade: &FeedbackGradeFilter,
    sort: FeedbackSort,
) -> Vec<Feedback> {
    let mut items: Vec<Feedback> = items.into_iter().filter(|f| grade.matches(f)).collect();
    items.sort_by(|a, b| sort.compare(a, b));
    items
}
