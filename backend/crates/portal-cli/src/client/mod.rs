pub(crate) mod client;
pub(crate) mod error;

pub use client::{Client, FeedbackQuery, FeedbackUpdate, NewFeedback};
pub use error::{ClientError, Result as CliClientResult};
