use crate::{FeedbackPriority, FeedbackStatus, FeedbackType, FeedbackUpdate, NewFeedback};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    pub id: Uuid,

    // Source app
    pub app_id: String,
    pub app_name: String,

    // Core fields
    pub feedback_type: FeedbackType,
    pub title: String,
    pub description: String,
    pub priority: FeedbackPriority,

    // Workflow
    pub status: FeedbackStatus,

    // Grading
    pub complexity: Option<i32>,
    pub estimated_hours: Option<f64>,
    pub business_value: Option<i32>,
    pub target_date: Option<DateTime<Utc>>,
    pub completed_date: Option<DateTime<Utc>>,

    pub screenshots: Vec<String>,

    // Audit
    pub submitted_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Feedback {
    pub fn new(input: NewFeedback) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            app_id: input.app_id,
            app_name: input.app_name,
            feedback_type: input.feedback_type,
            title: input.title,
            description: input.description,
            priority: input.priority.unwrap_or_default(),
            status: FeedbackStatus::Open,
            complexity: None,
            estimated_hours: None,
            business_value: None,
            target_date: None,
            completed_date: None,
            screenshots: input.screenshots,
            submitted_by: input.submitted_by,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply the fields present in `update`.
    ///
    /// Moving into resolved or closed stamps `completed_date` with `now` unless the
    /// update carries its own date or the item already has one.
    pub fn apply_update(&mut self, update: FeedbackUpdate, now: DateTime<Utc>) {
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(priority) = update.priority {
            self.priority = priority;
        }
        if let Some(complexity) = update.complexity {
            self.complexity = Some(complexity);
        }
        if let Some(hours) = update.estimated_hours {
            self.estimated_hours = Some(hours);
        }
        if let Some(value) = update.business_value {
            self.business_value = Some(value);
        }
        if let Some(target) = update.target_date {
            self.target_date = Some(target);
        }

        match update.completed_date {
            Some(completed) => self.completed_date = Some(completed),
            None => {
                let finishing = update.status.is_some_and(|s| s.is_terminal());
                if finishing && self.completed_date.is_none() {
                    self.completed_date = Some(now);
                }
            }
        }

        self.updated_at = now;
    }
}
