use crate::StatsErrorResult;

use portal_core::Release;

use std::collections::HashMap;

use async_trait::async_trait;

/// Source of raw repository data
#[async_trait]
pub trait StatsFetcher: Send + Sync {
    /// Language name to byte count
    async fn languages(&self, repo: &str) -> StatsErrorResult<HashMap<String, u64>>;

    /// Most recent releases, newest first, at most `limit`
    async fn releases(&self, repo: &str, limit: usize) -> StatsErrorResult<Vec<Release>>;
}
