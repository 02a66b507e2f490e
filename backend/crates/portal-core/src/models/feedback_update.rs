use crate::{FeedbackPriority, FeedbackStatus};

use chrono::{DateTime, Utc};

/// Partial update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct FeedbackUpdate {
    pub status: Option<FeedbackStatus>,
    pub priority: Option<FeedbackPriority>,
    pub complexity: Option<i32>,
    pub estimated_hours: Option<f64>,
    pub business_value: Option<i32>,
    pub target_date: Option<DateTime<Utc>>,
    pub completed_date: Option<DateTime<Utc>>,
}

impl FeedbackUpdate {
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.priority.is_none()
            && self.complexity.is_none()
            && self.estimated_hours.is_none()
            && self.business_value.is_none()
            && self.target_date.is_none()
            && self.completed_date.is_none()
    }
}
