use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

pub const MIN_CACHE_TTL_SECS: u64 = 1;
pub const DEFAULT_CACHE_TTL_SECS: u64 = 60 * 60;

pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

pub const MAX_RELEASES_PER_REPO: usize = 100;
pub const DEFAULT_RELEASES_PER_REPO: usize = 5;

pub const DEFAULT_REPOSITORIES: [&str; 9] = [
    "willem4130/SSO_WarehouseSuite_Frontend_v1",
    "willem4130/SSO-RACI",
    "willem4130/sso-trucktypecalculator-2.0",
    "willem4130/impactmatrix",
    "willem4130/sc-simulator",
    "willem4130/SSO_Webscraper",
    "willem4130/SSO-linkedin-bot",
    "willem4130/PickOptimizerClone",
    "willem4130/raci-v2",
];

/// Repository statistics cache settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    pub github_api_url: String,
    /// How long a fetched result set is served before re-fetching
    pub cache_ttl_secs: u64,
    pub request_timeout_secs: u64,
    pub releases_per_repo: usize,
    /// `owner/name` slugs, fetched and reported in this order
    pub repositories: Vec<String>,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            github_api_url: String::from(DEFAULT_GITHUB_API_URL),
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            releases_per_repo: DEFAULT_RELEASES_PER_REPO,
            repositories: DEFAULT_REPOSITORIES.iter().map(|r| r.to_string()).collect(),
        }
    }
}

impl StatsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.github_api_url.starts_with("http://")
            || self.github_api_url.starts_with("https://"))
        {
            return Err(ConfigError::stats(format!(
                "stats.github_api_url must be an http(s) URL, got {}",
                self.github_api_url
            )));
        }

        if self.cache_ttl_secs < MIN_CACHE_TTL_SECS {
            return Err(ConfigError::stats(format!(
                "stats.cache_ttl_secs must be >= {}, got {}",
                MIN_CACHE_TTL_SECS, self.cache_ttl_secs
            )));
        }

        if !(MIN_REQUEST_TIMEOUT_SECS..=MAX_REQUEST_TIMEOUT_SECS)
            .contains(&self.request_timeout_secs)
        {
            return Err(ConfigError::stats(format!(
                "stats.request_timeout_secs must be {}-{}, got {}",
                MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS, self.request_timeout_secs
            )));
        }

        if self.releases_per_repo > MAX_RELEASES_PER_REPO {
            return Err(ConfigError::stats(format!(
                "stats.releases_per_repo must be 0-{}, got {}",
                MAX_RELEASES_PER_REPO, self.releases_per_repo
            )));
        }

        if self.repositories.is_empty() {
            return Err(ConfigError::stats(
                "stats.repositories must list at least one repository",
            ));
        }

        for repo in &self.repositories {
            if !is_repo_slug(repo) {
                return Err(ConfigError::stats(format!(
                    "stats.repositories entries must look like owner/name, got {}",
                    repo
                )));
            }
        }

        Ok(())
    }
}

fn is_repo_slug(repo: &str) -> bool {
    match repo.split_once('/') {
        Some((owner, name)) => {
            !owner.is_empty()
                && !name.is_empty()
                && !name.contains('/')
                && !repo.chars().any(char::is_whitespace)
        }
        None => false,
    }
}
