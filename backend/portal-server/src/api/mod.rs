pub mod apps;
pub mod delete_response;
pub mod error;
pub mod extractors;
pub mod feedback;
pub(crate) mod query;
pub mod repo_stats;
