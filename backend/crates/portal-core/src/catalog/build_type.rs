use crate::{CoreError, CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Custom builds versus third-party platforms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BuildType {
    #[default]
    All,
    Custom,
    External,
}

impl BuildType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Custom => "custom",
            Self::External => "external",
        }
    }

    pub fn matches(&self, is_custom_build: bool) -> bool {
        match self {
            Self::All => true,
            Self::Custom => is_custom_build,
            Self::External => !is_custom_build,
        }
    }
}

impl FromStr for BuildType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "all" => Ok(Self::All),
            "custom" => Ok(Self::Custom),
            "external" => Ok(Self::External),
            _ => Err(CoreError::InvalidBuildType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
