use crate::{StatsFetcher, StatsMetrics};

use portal_core::{RepoStat, RepoStatTotals};

use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::future::join_all;
use log::{debug, error, info, warn};
use serde::Serialize;
use tokio::sync::Mutex;

/// Response body of the repo-stats endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CachedStats {
    pub stats: Vec<RepoStat>,
    /// True when served from memory without contacting GitHub
    pub cached: bool,
}

impl CachedStats {
    pub fn totals(&self) -> RepoStatTotals {
        RepoStatTotals::from_stats(&self.stats)
    }
}

struct CacheEntry {
    stats: Vec<RepoStat>,
    fetched_at: Instant,
}

/// Process-wide memo of the statistics for every configured repository.
///
/// The whole set expires at once. Refreshes run under the lock, so callers that
/// arrive during a refresh wait for it and then see its result as cached.
pub struct RepoStatsCache {
    fetcher: Arc<dyn StatsFetcher>,
    repositories: Vec<String>,
    releases_per_repo: usize,
    ttl: Duration,
    entry: Mutex<Option<CacheEntry>>,
    metrics: StatsMetrics,
}

impl RepoStatsCache {
    pub fn new(
        fetcher: Arc<dyn StatsFetcher>,
        repositories: Vec<String>,
        releases_per_repo: usize,
        ttl: Duration,
    ) -> Self {
        Self {
            fetcher,
            repositories,
            releases_per_repo,
            ttl,
            entry: Mutex::new(None),
            metrics: StatsMetrics::new(),
        }
    }

    pub fn repositories(&self) -> &[String] {
        &self.repositories
    }

    /// Memoised stats while fresh, otherwise a full re-fetch
    pub async fn get(&self) -> CachedStats {
        let mut entry = self.entry.lock().await;

        if let Some(current) = entry.as_ref()
            && current.fetched_at.elapsed() < self.ttl
        {
            self.metrics.cache_hit();
            return CachedStats {
                stats: current.stats.clone(),
                cached: true,
            };
        }

        self.metrics.cache_miss();
        let stats = self.fetch_all().await;

        *entry = Some(CacheEntry {
            stats: stats.clone(),
            fetched_at: Instant::now(),
        });

        CachedStats {
            stats,
            cached: false,
        }
    }

    /// Re-fetch now regardless of age.
    ///
    /// When repositories are configured and none could be measured, the
    /// previous entry stays in place and the empty result is only returned.
    pub async fn refresh(&self) -> CachedStats {
        let mut entry = self.entry.lock().await;

        self.metrics.cache_miss();
        let stats = self.fetch_all().await;

        if stats.is_empty() && !self.repositories.is_empty() {
            warn!("Refresh measured no repositories, keeping previous statistics");
        } else {
            *entry = Some(CacheEntry {
                stats: stats.clone(),
                fetched_at: Instant::now(),
            });
        }

        CachedStats {
            stats,
            cached: false,
        }
    }

    async fn fetch_all(&self) -> Vec<RepoStat> {
        let started = Instant::now();

        let results = join_all(self.repositories.iter().map(|repo| self.fetch_one(repo))).await;
        let stats: Vec<RepoStat> = results.into_iter().flatten().collect();

        self.metrics.refreshed(started.elapsed(), stats.len());
        info!(
            "Fetched statistics for {}/{} repositories in {}ms",
            stats.len(),
            self.repositories.len(),
            started.elapsed().as_millis()
        );

        stats
    }

    /// None when the language breakdown is unavailable
    async fn fetch_one(&self, repo: &str) -> Option<RepoStat> {
        let (languages, releases) = tokio::join!(
            self.fetcher.languages(repo),
            self.fetcher.releases(repo, self.releases_per_repo)
        );

        let languages = match languages {
            Ok(languages) => languages,
            Err(e) => {
                error!("Failed to fetch languages for {}: {}", repo, e);
                self.metrics.fetch_failed(repo, "languages");
                return None;
            }
        };

        let releases = releases.unwrap_or_else(|e| {
            warn!("Failed to fetch releases for {}: {}", repo, e);
            self.metrics.fetch_failed(repo, "releases");
            Vec::new()
        });

        let total_bytes: u64 = languages.values().sum();
        debug!(
            "{}: {} bytes across {} languages, {} releases",
            repo,
            total_bytes,
            languages.len(),
            releases.len()
        );

        Some(RepoStat::estimate(repo, total_bytes, releases))
    }
}
