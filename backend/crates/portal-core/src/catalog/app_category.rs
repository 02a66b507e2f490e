use crate::{CoreError, CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppCategory {
    Optimization,
    Analytics,
    Collaboration,
    Automation,
    Tools,
}

impl AppCategory {
    pub const ALL: [AppCategory; 5] = [
        Self::Optimization,
        Self::Analytics,
        Self::Collaboration,
        Self::Automation,
        Self::Tools,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Optimization => "optimization",
            Self::Analytics => "analytics",
            Self::Collaboration => "collaboration",
            Self::Automation => "automation",
            Self::Tools => "tools",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Optimization => "Optimization",
            Self::Analytics => "Analytics",
            Self::Collaboration => "Collaboration",
            Self::Automation => "Automation",
            Self::Tools => "Tools",
        }
    }
}

impl FromStr for AppCategory {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "optimization" => Ok(Self::Optimization),
            "analytics" => Ok(Self::Analytics),
            "collaboration" => Ok(Self::Collaboration),
            "automation" => Ok(Self::Automation),
            "tools" => Ok(Self::Tools),
            _ => Err(CoreError::InvalidAppCategory {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
