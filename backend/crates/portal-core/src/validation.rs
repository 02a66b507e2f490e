//! Input rules for feedback submissions, admin updates and responses.

use crate::{CoreError, CoreErrorResult, FeedbackUpdate, NewFeedback};

use std::panic::Location;

use error_location::ErrorLocation;

pub const MIN_GRADE: i32 = 1;
pub const MAX_GRADE: i32 = 5;

/// Size limits applied to incoming feedback
#[derive(Debug, Clone, Copy)]
pub struct ValidationLimits {
    pub max_title_length: usize,
    pub max_screenshots: usize,
    pub max_screenshot_bytes: usize,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            max_title_length: 200,
            max_screenshots: 5,
            max_screenshot_bytes: 5 * 1024 * 1024,
        }
    }
}

pub struct FeedbackValidator;

impl FeedbackValidator {
    #[track_caller]
    pub fn validate_new(input: &NewFeedback, limits: &ValidationLimits) -> CoreErrorResult<()> {
        Self::require_non_empty(&input.app_id, "app_id")?;

        let title_length = input.title.trim().chars().count();
        if title_length == 0 {
            return Err(Self::invalid("title cannot be empty", "title"));
        }
        if title_length > limits.max_title_length {
            return Err(Self::invalid(
                format!(
                    "title exceeds maximum length ({})",
                    limits.max_title_length
                ),
                "title",
            ));
        }

        Self::require_non_empty(&input.description, "description")?;
        Self::require_non_empty(&input.submitted_by, "submitted_by")?;

        if input.screenshots.len() > limits.max_screenshots {
            return Err(Self::invalid(
                format!("at most {} screenshots allowed", limits.max_screenshots),
                "screenshots",
            ));
        }
        for screenshot in &input.screenshots {
            if screenshot.is_empty() {
                return Err(Self::invalid("screenshot cannot be empty", "screenshots"));
            }
            if screenshot.len() > limits.max_screenshot_bytes {
                return Err(Self::invalid(
                    format!(
                        "screenshot exceeds maximum size ({} bytes)",
                        limits.max_screenshot_bytes
                    ),
                    "screenshots",
                ));
            }
        }

        Ok(())
    }

    #[track_caller]
    pub fn validate_update(update: &FeedbackUpdate) -> CoreErrorResult<()> {
        if let Some(complexity) = update.complexity {
            Self::require_grade(complexity, "complexity")?;
        }
        if let Some(value) = update.business_value {
            Self::require_grade(value, "business_value")?;
        }
        if let Some(hours) = update.estimated_hours
            && !(hours.is_finite() && hours > 0.0)
        {
            return Err(Self::invalid(
                "estimated_hours must be a positive number",
                "estimated_hours",
            ));
        }

        Ok(())
    }

    #[track_caller]
    pub fn validate_response(message: &str) -> CoreErrorResult<()> {
        Self::require_non_empty(message, "message")
    }

    #[track_caller]
    fn require_grade(value: i32, field: &str) -> CoreErrorResult<()> {
        if !(MIN_GRADE..=MAX_GRADE).contains(&value) {
            return Err(Self::invalid(
                format!(
                    "{} must be between {} and {}, got {}",
                    field, MIN_GRADE, MAX_GRADE, value
                ),
                field,
            ));
        }
        Ok(())
    }

    #[track_caller]
    fn require_non_empty(value: &str, field: &str) -> CoreErrorResult<()> {
        if value.trim().is_empty() {
            return Err(Self::invalid(format!("{} cannot be empty", field), field));
        }
        Ok(())
    }

    #[track_caller]
    fn invalid(message: impl Into<String>, field: &str) -> CoreError {
        CoreError::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
