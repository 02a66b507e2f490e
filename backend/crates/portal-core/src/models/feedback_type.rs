use crate::{CoreError, CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Classification chosen by the submitter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackType {
    Bug,
    Feature,
    Issue,
    Question,
    Improvement,
}

impl FeedbackType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bug => "bug",
            Self::Feature => "feature",
            Self::Issue => "issue",
            Self::Question => "question",
            Self::Improvement => "improvement",
        }
    }
}

impl FromStr for FeedbackType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "bug" => Ok(Self::Bug),
            "feature" => Ok(Self::Feature),
            "issue" => Ok(Self::Issue),
            "question" => Ok(Self::Question),
            "improvement" => Ok(Self::Improvement),
            _ => Err(CoreError::InvalidFeedbackType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
