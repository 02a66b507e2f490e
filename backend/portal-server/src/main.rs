use portal_config::{Config, ConfigError};
use portal_server::{AppState, ServerError, build_router, logger};
use portal_stats::{GithubClient, RepoStatsCache};

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use log::{error, info, warn};
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional; real environment variables win
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<PathBuf> = match config.logging.file {
        Some(ref filename) => Some(
            Config::config_dir()?
                .join(&config.logging.dir)
                .join(filename),
        ),
        None => None,
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting portal-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool and schema
    let pool = portal_db::connect(config.database_url()?, config.database.max_connections).await?;
    info!("Database connection established");

    info!("Running database migrations...");
    portal_db::run_migrations(&pool).await?;
    info!("Migrations complete");

    // Prometheus recorder for the stats cache counters
    let prometheus = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| ServerError::Metrics {
            message: format!("Failed to install Prometheus recorder: {e}"),
        })?;

    // Repository statistics
    let github = GithubClient::new(
        &config.stats.github_api_url,
        config.github.token.as_deref(),
        Duration::from_secs(config.stats.request_timeout_secs),
    )?;
    if config.github.token.is_none() {
        warn!("GITHUB_TOKEN not set, GitHub requests are rate limited to 60/hour");
    }
    let stats = RepoStatsCache::new(
        Arc::new(github),
        config.stats.repositories.clone(),
        config.stats.releases_per_repo,
        Duration::from_secs(config.stats.cache_ttl_secs),
    );

    let admin_secret = config
        .auth
        .secret
        .as_deref()
        .ok_or_else(|| ConfigError::auth("AUTH_SECRET is required"))?;

    // Build application state
    let app_state = AppState {
        pool: pool.clone(),
        stats: Arc::new(stats),
        limits: portal_core::ValidationLimits {
            max_title_length: config.validation.max_title_length,
            max_screenshots: config.validation.max_screenshots,
            max_screenshot_bytes: config.validation.max_screenshot_bytes,
        },
        admin_secret: Arc::from(admin_secret),
        prometheus: Some(prometheus),
    };

    // Build router
    let app = build_router(app_state);

    // Create TCP listener
    let listener = TcpListener::bind(config.bind_addr()).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
                Err(e) => {
                    error!("Failed to listen for SIGINT: {}", e);
                    std::future::pending::<()>().await;
                }
            }
        })
        .await?;

    // Flush the WAL so the database file is self-contained
    if let Err(e) = sqlx::query("PRAGMA wal_checkpoint(TRUNCATE)")
        .execute(&pool)
        .await
    {
        warn!("Final checkpoint failed: {}", e);
    }
    pool.close().await;

    info!("Graceful shutdown complete");

    Ok(())
}
