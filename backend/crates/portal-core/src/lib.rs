pub mod catalog;
pub mod error;
pub mod models;
pub mod validation;

#[cfg(test)]
mod tests;

pub use catalog::app_category::AppCategory;
pub use catalog::app_link::AppLink;
pub use catalog::app_status::AppStatus;
pub use catalog::apps::{APPS, find_app};
pub use catalog::build_type::BuildType;
pub use catalog::catalog_filter::CatalogFilter;
pub use catalog::catalog_summary::CatalogSummary;
pub use error::{CoreError, Result as CoreErrorResult};
pub use models::feedback::Feedback;
pub use models::feedback_filter::FeedbackFilter;
pub use models::feedback_priority::FeedbackPriority;
pub use models::feedback_response::FeedbackResponse;
pub use models::feedback_sort::{FeedbackGradeFilter, FeedbackSort, refine_feedback};
pub use models::feedback_stats::FeedbackStats;
pub use models::feedback_status::FeedbackStatus;
pub use models::feedback_type::FeedbackType;
pub use models::feedback_update::FeedbackUpdate;
pub use models::new_feedback::NewFeedback;
pub use models::release::{MISSING_RELEASE_NOTES, Release};
pub use models::repo_stat::{
    BYTES_PER_LINE, LINES_PER_HOUR_CONSERVATIVE, LINES_PER_HOUR_OPTIMISTIC, RepoStat,
};
pub use models::repo_stat_totals::RepoStatTotals;
pub use validation::{FeedbackValidator, ValidationLimits};

pub use error_location::ErrorLocation;
