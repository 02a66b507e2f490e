mod error;
mod update_feedback_request;
