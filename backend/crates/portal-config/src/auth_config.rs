use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

/// Shared secret guarding the admin endpoints
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub secret: Option<String>,
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match self.secret.as_deref() {
            Some(secret) if !secret.is_empty() => Ok(()),
            _ => Err(ConfigError::auth("AUTH_SECRET is required")),
        }
    }
}
