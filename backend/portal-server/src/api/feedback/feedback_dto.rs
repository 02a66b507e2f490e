use crate::ResponseDto;

use portal_core::{Feedback, FeedbackResponse};

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct FeedbackDto {
    pub id: String,
    pub app_id: String,
    pub app_name: String,
    #[serde(rename = "type")]
    pub feedback_type: String,
    pub title: String,
    pub description: String,
    pub priority: String,
    pub status: String,
    pub complexity: Option<i32>,
    pub estimated_hours: Option<f64>,
    pub business_value: Option<i32>,
    pub target_date: Option<i64>,
    pub completed_date: Option<i64>,
    pub screenshots: Vec<String>,
    pub submitted_by: String,
    pub created_at: i64,
    pub updated_at: i64,
    /// Oldest first
    pub responses: Vec<ResponseDto>,
}

impl FeedbackDto {
    pub fn new(f: Feedback, responses: Vec<FeedbackResponse>) -> Self {
        Self {
            id: f.id.to_string(),
            app_id: f.app_id,
            app_name: f.app_name,
            feedback_type: f.feedback_type.as_str().to_string(),
            title: f.title,
            description: f.description,
            priority: f.priority.as_str().to_string(),
            status: f.status.as_str().to_string(),
            complexity: f.complexity,
            estimated_hours: f.estimated_hours,
            business_value: f.business_value,
            target_date: f.target_date.map(|d| d.timestamp()),
            completed_date: f.completed_date.map(|d| d.timestamp()),
            screenshots: f.screenshots,
            submitted_by: f.submitted_by,
            created_at: f.created_at.timestamp(),
            updated_at: f.updated_at.timestamp(),
            responses: responses.into_iter().map(ResponseDto::from).collect(),
        }
    }
}
