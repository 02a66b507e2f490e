use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MIN_TITLE_LENGTH: usize = 1;
pub const MAX_TITLE_LENGTH: usize = 500;
pub const DEFAULT_MAX_TITLE_LENGTH: usize = 200;

pub const MAX_SCREENSHOTS: usize = 20;
pub const DEFAULT_MAX_SCREENSHOTS: usize = 5;

pub const MIN_SCREENSHOT_BYTES: usize = 1024;
pub const MAX_SCREENSHOT_BYTES: usize = 20 * 1024 * 1024;
pub const DEFAULT_MAX_SCREENSHOT_BYTES: usize = 5 * 1024 * 1024;

/// Limits applied to feedback submissions
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub max_title_length: usize,
    /// 0 disables screenshot uploads
    pub max_screenshots: usize,
    /// Per screenshot, measured on the encoded string
    pub max_screenshot_bytes: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
            max_screenshots: DEFAULT_MAX_SCREENSHOTS,
            max_screenshot_bytes: DEFAULT_MAX_SCREENSHOT_BYTES,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_TITLE_LENGTH..=MAX_TITLE_LENGTH).contains(&self.max_title_length) {
            return Err(ConfigError::validation(format!(
                "validation.max_title_length must be {}-{}, got {}",
                MIN_TITLE_LENGTH, MAX_TITLE_LENGTH, self.max_title_length
            )));
        }

        if self.max_screenshots > MAX_SCREENSHOTS {
            return Err(ConfigError::validation(format!(
                "validation.max_screenshots must be 0-{}, got {}",
                MAX_SCREENSHOTS, self.max_screenshots
            )));
        }

        if !(MIN_SCREENSHOT_BYTES..=MAX_SCREENSHOT_BYTES).contains(&self.max_screenshot_bytes) {
            return Err(ConfigError::validation(format!(
                "validation.max_screenshot_bytes must be {}-{}, got {}",
                MIN_SCREENSHOT_BYTES, MAX_SCREENSHOT_BYTES, self.max_screenshot_bytes
            )));
        }

        Ok(())
    }
}
