use crate::RepoStat;

use serde::{Deserialize, Serialize};

/// Sums shown in the dashboard's metrics strip
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoStatTotals {
    pub total_repos: usize,
    pub total_lines: u64,
    pub total_hours_min: u64,
    pub total_hours_max: u64,
}

impl RepoStatTotals {
    pub fn from_stats(stats: &[RepoStat]) -> Self {
        stats.iter().fold(
            Self {
                total_repos: stats.len(),
                ..Self::default()
            },
            |acc, s| Self {
                total_lines: acc.total_lines + s.lines,
                total_hours_min: acc.total_hours_min + s.hours_min,
                total_hours_max: acc.total_hours_max + s.hours_max,
                ..acc
            },
        )
    }
}
