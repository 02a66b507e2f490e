use crate::{CoreError, CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Maturity of a linked app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppStatus {
    Production,
    InProgress,
    Beta,
}

impl AppStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::InProgress => "in-progress",
            Self::Beta => "beta",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Production => "Production",
            Self::InProgress => "In Progress",
            Self::Beta => "Beta",
        }
    }
}

impl FromStr for AppStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "production" => Ok(Self::Production),
            "in-progress" => Ok(Self::InProgress),
            "beta" => Ok(Self::Beta),
            _ => Err(CoreError::InvalidAppStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
