use serde::Deserialize;

/// Unauthenticated requests work but hit a far lower rate limit
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    pub token: Option<String>,
}
