use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, DatabaseConfig, GithubConfig, LoggingConfig, ServerConfig, StatsConfig,
    ValidationConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub github: GithubConfig,
    pub stats: StatsConfig,
    pub logging: LoggingConfig,
    pub validation: ValidationConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. PORTAL_CONFIG_DIR env var, else ./.portal/
    /// 2. config.toml from that directory if it exists, else defaults
    /// 3. PORTAL_* overrides, then DATABASE_URL, AUTH_SECRET and GITHUB_TOKEN
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.drop_empty_secrets();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: PORTAL_CONFIG_DIR env var > ./.portal/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.stats.validate()?;
        self.validation.validate()?;

        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Validated database URL
    pub fn database_url(&self) -> ConfigErrorResult<&str> {
        self.database
            .url
            .as_deref()
            .ok_or_else(|| ConfigError::database("DATABASE_URL is required"))
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}", self.bind_addr());
        info!(
            "  database: {} (max {} connections)",
            self.database
                .url
                .as_deref()
                .map_or_else(|| "unset".to_string(), redact_url),
            self.database.max_connections
        );
        info!(
            "  auth: admin secret {}",
            if self.auth.secret.is_some() {
                "set"
            } else {
                "missing"
            }
        );
        info!(
            "  github: {}",
            if self.github.token.is_some() {
                "token set"
            } else {
                "anonymous"
            }
        );
        info!(
            "  stats: {} repositories, ttl={}s, timeout={}s, releases={}",
            self.stats.repositories.len(),
            self.stats.cache_ttl_secs,
            self.stats.request_timeout_secs,
            self.stats.releases_per_repo
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
        info!(
            "  validation: title={}, screenshots={}x{}B",
            self.validation.max_title_length,
            self.validation.max_screenshots,
            self.validation.max_screenshot_bytes
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("PORTAL_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("PORTAL_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_parse(
            "PORTAL_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );
        Self::apply_env_option_string("DATABASE_URL", &mut self.database.url);

        // Auth
        Self::apply_env_option_string("AUTH_SECRET", &mut self.auth.secret);

        // GitHub
        Self::apply_env_option_string("GITHUB_TOKEN", &mut self.github.token);

        // Stats
        Self::apply_env_string("PORTAL_STATS_GITHUB_API_URL", &mut self.stats.github_api_url);
        Self::apply_env_parse("PORTAL_STATS_CACHE_TTL_SECS", &mut self.stats.cache_ttl_secs);
        Self::apply_env_parse(
            "PORTAL_STATS_REQUEST_TIMEOUT_SECS",
            &mut self.stats.request_timeout_secs,
        );
        Self::apply_env_parse(
            "PORTAL_STATS_RELEASES_PER_REPO",
            &mut self.stats.releases_per_repo,
        );
        Self::apply_env_list("PORTAL_STATS_REPOSITORIES", &mut self.stats.repositories);

        // Logging
        Self::apply_env_parse("PORTAL_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_string("PORTAL_LOG_DIR", &mut self.logging.dir);
        Self::apply_env_bool("PORTAL_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("PORTAL_LOG_FILE", &mut self.logging.file);

        // Validation
        Self::apply_env_parse(
            "PORTAL_VALIDATION_MAX_TITLE_LENGTH",
            &mut self.validation.max_title_length,
        );
        Self::apply_env_parse(
            "PORTAL_VALIDATION_MAX_SCREENSHOTS",
            &mut self.validation.max_screenshots,
        );
        Self::apply_env_parse(
            "PORTAL_VALIDATION_MAX_SCREENSHOT_BYTES",
            &mut self.validation.max_screenshot_bytes,
        );
    }

    /// An empty secret in the file or environment counts as unset
    fn drop_empty_secrets(&mut self) {
        for secret in [
            &mut self.database.url,
            &mut self.auth.secret,
            &mut self.github.token,
            &mut self.logging.file,
        ] {
            if secret.as_deref().is_some_and(|s| s.trim().is_empty()) {
                *secret = None;
            }
        }
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values.
    /// An empty value leaves the target alone.
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name)
            && !val.is_empty()
        {
            *target = Some(val);
        }
    }

    /// Helper: Apply environment variable override for comma-separated lists
    fn apply_env_list(var_name: &str, target: &mut Vec<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }
    }
}

/// Keep the scheme and path of a URL, hide any user info
pub(crate) fn redact_url(url: &str) -> String {
    let Some(at) = url.rfind('@') else {
        return url.to_string();
    };

    match url.find("://") {
        Some(end) if end < at => format!("{}***@{}", &url[..end + 3], &url[at + 1..]),
        _ => url[at + 1..].to_string(),
    }
}
