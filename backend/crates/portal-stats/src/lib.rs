mod cache;
mod error;
mod fetcher;
mod github_client;
mod metrics;

pub use cache::{CachedStats, RepoStatsCache};
pub use error::{Result as StatsErrorResult, StatsError};
pub use fetcher::StatsFetcher;
pub use github_client::{GithubClient, USER_AGENT};
pub use metrics::StatsMetrics;
