pub mod repo_stats;
pub mod repo_totals_response;
