pub mod feedback_repository;
pub mod feedback_response_repository;
