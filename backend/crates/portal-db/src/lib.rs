pub mod connection;
pub mod error;
pub mod repositories;

mod rows;

pub use connection::pool::{connect, run_migrations};
pub use error::{DbError, Result};
pub use repositories::feedback_repository::FeedbackRepository;
pub use repositories::feedback_response_repository::FeedbackResponseRepository;
