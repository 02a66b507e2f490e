//! Row shapes as stored, and their conversion into domain types.

use crate::{DbError, Result};

use portal_core::{Feedback, FeedbackResponse};

use std::str::FromStr;

use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(sqlx::FromRow)]
pub(crate) struct FeedbackRow {
    pub id: String,
    pub app_id: String,
    pub app_name: String,
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
    pub screenshots: String,
    pub submitted_by: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(sqlx::FromRow)]
pub(crate) struct FeedbackResponseRow {
    pub id: String,
    pub feedback_id: String,
    pub author: String,
    pub message: String,
    pub is_internal: bool,
    pub created_at: i64,
}

impl TryFrom<FeedbackRow> for Feedback {
    type Error = DbError;

    fn try_from(r: FeedbackRow) -> Result<Self> {
        Ok(Feedback {
            id: parse_uuid(&r.id, "id")?,
            app_id: r.app_id,
            app_name: r.app_name,
            feedback_type: parse_enum(&r.feedback_type, "feedback_type")?,
            title: r.title,
            description: r.description,
            priority: parse_enum(&r.priority, "priority")?,
            status: parse_enum(&r.status, "status")?,
            complexity: r.complexity,
            estimated_hours: r.estimated_hours,
            business_value: r.business_value,
            target_date: r
                .target_date
                .map(|ts| parse_timestamp(ts, "target_date"))
                .transpose()?,
            completed_date: r
                .completed_date
                .map(|ts| parse_timestamp(ts, "completed_date"))
                .transpose()?,
            screenshots: serde_json::from_str(&r.screenshots)
                .map_err(|e| DbError::decode("screenshots", e))?,
            submitted_by: r.submitted_by,
            created_at: parse_timestamp(r.created_at, "created_at")?,
            updated_at: parse_timestamp(r.updated_at, "updated_at")?,
        })
    }
}

impl TryFrom<FeedbackResponseRow> for FeedbackResponse {
    type Error = DbError;

    fn try_from(r: FeedbackResponseRow) -> Result<Self> {
        Ok(FeedbackResponse {
            id: parse_uuid(&r.id, "id")?,
            feedback_id: parse_uuid(&r.feedback_id, "feedback_id")?,
            author: r.author,
            message: r.message,
            is_internal: r.is_internal,
            created_at: parse_timestamp(r.created_at, "created_at")?,
        })
    }
}

fn parse_uuid(value: &str, column: &'static str) -> Result<Uuid> {
    Uuid::parse_str(value).map_err(|e| DbError::decode(column, e))
}

fn parse_enum<T>(value: &str, column: &'static str) -> Result<T>
where
    T: FromStr<Err = portal_core::CoreError>,
{
    T::from_str(value).map_err(|e| DbError::decode(column, e.client_message()))
}

fn parse_timestamp(seconds: i64, column: &'static str) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| DbError::decode(column, format!("timestamp out of range: {}", seconds)))
}
