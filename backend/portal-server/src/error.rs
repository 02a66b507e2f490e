use thiserror::Error;

/// Start-up failures of the server binary
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] portal_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] portal_db::DbError),

    #[error("Repository statistics error: {0}")]
    Stats(#[from] portal_stats::StatsError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Metrics error: {message}")]
    Metrics { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
