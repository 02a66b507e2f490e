use std::time::Duration;

use metrics::{counter, gauge, histogram};

/// Metrics for the repository statistics cache
#[derive(Clone)]
pub struct StatsMetrics {
    prefix: &'static str,
}

impl StatsMetrics {
    pub fn new() -> Self {
        Self {
            prefix: "portal_stats",
        }
    }

    pub fn cache_hit(&self) {
        counter!(format!("{}.cache.hits", self.prefix)).increment(1);
    }

    pub fn cache_miss(&self) {
        counter!(format!("{}.cache.misses", self.prefix)).increment(1);
    }

    /// Record a completed refresh and how many repositories made it into the result
    pub fn refreshed(&self, duration: Duration, repositories: usize) {
        histogram!(format!("{}.refresh.duration_ms", self.prefix))
            .record(duration.as_millis() as f64);
        gauge!(format!("{}.repositories", self.prefix)).set(repositories as f64);
    }

    pub fn fetch_failed(&self, repo: &str, call: &'static str) {
        counter!(
            format!("{}.fetch.errors", self.prefix),
            "repo" => repo.to_string(),
            "call" => call
        )
        .increment(1);
    }
}

impl Default for StatsMetrics {
    fn default() -> Self {
        Self::new()
    }
}
