use crate::Release;

use serde::{Deserialize, Serialize};

/// Assumed average source line size
pub const BYTES_PER_LINE: f64 = 50.0;
pub const LINES_PER_HOUR_OPTIMISTIC: f64 = 5.0;
pub const LINES_PER_HOUR_CONSERVATIVE: f64 = 2.5;

/// Approximate size and effort for one repository. A display metric, not a measurement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoStat {
    /// `owner/name`
    pub repo: String,
    pub lines: u64,
    pub hours_min: u64,
    pub hours_max: u64,
    #[serde(default)]
    pub releases: Vec<Release>,
}

impl RepoStat {
    /// Estimate lines and hours from the total byte count of a language breakdown
    pub fn estimate(repo: impl Into<String>, total_bytes: u64, releases: Vec<Release>) -> Self {
        let lines = (total_bytes as f64 / BYTES_PER_LINE).round();
        let hours_min = (lines / LINES_PER_HOUR_OPTIMISTIC).round();
        let hours_max = (lines / LINES_PER_HOUR_CONSERVATIVE).round();

        Self {
            repo: repo.into(),
            lines: lines as u64,
            hours_min: hours_min as u64,
            hours_max: hours_max as u64,
            releases,
        }
    }
}
