use crate::{ApiError, ApiResult};

use portal_core::FeedbackUpdate;

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Request body for grading or moving a feedback item through the workflow.
/// Absent fields are left untouched. Dates are Unix seconds.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateFeedbackRequest {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub complexity: Option<i32>,
    #[serde(default)]
    pub estimated_hours: Option<f64>,
    #[serde(default)]
    pub business_value: Option<i32>,
    #[serde(default)]
    pub target_date: Option<i64>,
    #[serde(default)]
    pub completed_date: Option<i64>,
}

impl UpdateFeedbackRequest {
    pub fn into_update(self) -> ApiResult<FeedbackUpdate> {
        Ok(FeedbackUpdate {
            status: self.status.as_deref().map(str::parse).transpose()?,
            priority: self.priority.as_deref().map(str::parse).transpose()?,
            complexity: self.complexity,
            estimated_hours: self.estimated_hours,
            business_value: self.business_value,
            target_date: self
                .target_date
                .map(|secs| timestamp(secs, "target_date"))
                .transpose()?,
            completed_date: self
                .completed_date
                .map(|secs| timestamp(secs, "completed_date"))
                .transpose()?,
        })
    }
}

fn timestamp(secs: i64, field: &str) -> ApiResult<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| ApiError::validation(format!("{} is out of range", field), field))
}
