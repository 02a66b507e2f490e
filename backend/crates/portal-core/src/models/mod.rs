pub mod feedback;
pub mod feedback_filter;
pub mod feedback_priority;
pub mod feedback_response;
pub mod feedback_sort;
pub mod feedback_stats;
pub mod feedback_status;
pub mod feedback_type;
pub mod feedback_update;
pub mod new_feedback;
pub mod release;
pub mod repo_stat;
pub mod repo_stat_totals;
