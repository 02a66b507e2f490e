
use std::env;

use tempfile::TempDir;

/// Every variable `Config::load` reads; cleared so the host environment cannot leak in
const ALL_VARS: [&str; 18] = [
    "PORTAL_SERVER_HOST",
    "PORTAL_SERVER_PORT",
    "PORTAL_DATABASE_MAX_CONNECTIONS",
    "DATABASE_URL",
    "AUTH_SECRET",
    "GITHUB_TOKEN",
    "PORTAL_STATS_GITHUB_API_URL",
    "PORTAL_STATS_CACHE_TTL_SECS",
    "PORTAL_STATS_REQUEST_TIMEOUT_SECS",
    "PORTAL_STATS_RELEASES_PER_REPO",
    "PORTAL_STATS_REPOSITORIES",
    "PORTAL_LOG_LEVEL",
    "PORTAL_LOG_DIR",
    "PORTAL_LOG_COLORED",
    "PORTAL_LOG_FILE",
    "PORTAL_VALIDATION_MAX_TITLE_LENGTH",
    "PORTAL_VALIDATION_MAX_SCREENSHOTS",
    "PORTAL_VALIDATION_MAX_SCREENSHOT_BYTES",
];

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

pub(crate) struct TestEnv {
    pub(crate) dir: TempDir,
    _guards: Vec<EnvGuard>,
}

impl TestEnv {
    pub(crate) fn write_config(&self, contents: &str) {
        std::fs::write(self.dir.path().join("config.toml"), contents).unwrap();
    }
}

/// Temp config directory with a clean environment
pub(crate) fn setup_config_dir() -> TestEnv {
    let dir = TempDir::new().unwrap();
    let mut guards: Vec<EnvGuard> = ALL_VARS.iter().map(|key| EnvGuard::remove(key)).collect();
    guards.push(EnvGuard::set(
        "PORTAL_CONFIG_DIR",
        dir.path().to_str().unwrap(),
    ));
    TestEnv {
        dir,
        _guards: guards,
    }
}

/// Clean environment plus the two variables validation requires
pub(crate) fn setup_valid_env() -> (TestEnv, EnvGuard, EnvGuard) {
    let env = setup_config_dir();
    let db = EnvGuard::set("DATABASE_URL", "sqlite:data/portal.db");
    let secret = EnvGuard::set("AUTH_SECRET", "s3cret");
    (env, db, secret)
}
