use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid feedback type: {value} {location}")]
    InvalidFeedbackType {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid feedback priority: {value} {location}")]
    InvalidFeedbackPriority {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid feedback status: {value} {location}")]
    InvalidFeedbackStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid feedback sort key: {value} {location}")]
    InvalidFeedbackSort {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid app category: {value} {location}")]
    InvalidAppCategory {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid app status: {value} {location}")]
    InvalidAppStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid build type: {value} {location}")]
    InvalidBuildType {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Name of the input field this error refers to, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => field.as_deref(),
            Self::InvalidFeedbackType { .. } => Some("type"),
            Self::InvalidFeedbackPriority { .. } => Some("priority"),
            Self::InvalidFeedbackStatus { .. } => Some("status"),
            Self::InvalidFeedbackSort { .. } => Some("sort"),
            Self::InvalidAppCategory { .. } => Some("category"),
            Self::InvalidAppStatus { .. } => Some("status"),
            Self::InvalidBuildType { .. } => Some("build_type"),
        }
    }

    /// Message without the location suffix, suitable for API clients
    pub fn client_message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::InvalidFeedbackType { value, .. } => format!(
                "Invalid type: {}. Valid values: bug, feature, issue, question, improvement",
                value
            ),
            Self::InvalidFeedbackPriority { value, .. } => format!(
                "Invalid priority: {}. Valid values: low, medium, high, critical",
                value
            ),
            Self::InvalidFeedbackStatus { value, .. } => format!(
                "Invalid status: {}. Valid values: open, in_progress, resolved, closed",
                value
            ),
            Self::InvalidFeedbackSort { value, .. } => format!(
                "Invalid sort: {}. Valid values: created_at, business_value, complexity, estimated_hours, target_date",
                value
            ),
            Self::InvalidAppCategory { value, .. } => format!(
                "Invalid category: {}. Valid values: optimization, analytics, collaboration, automation, tools",
                value
            ),
            Self::InvalidAppStatus { value, .. } => format!(
                "Invalid status: {}. Valid values: production, in-progress, beta",
                value
            ),
            Self::InvalidBuildType { value, .. } => format!(
                "Invalid build_type: {}. Valid values: all, custom, external",
                value
            ),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
