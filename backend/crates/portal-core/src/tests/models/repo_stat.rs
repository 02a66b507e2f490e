use crate::{MISSING_RELEASE_NOTES, Release, RepoStat, RepoStatTotals};

use googletest::prelude::*;
use proptest::prelude::*;

#[test]
fn test_estimate_uses_fifty_bytes_per_line() {
    let stat = RepoStat::estimate("owner/repo", 100_000, Vec::new());

    assert_that!(stat.lines, eq(2000));
    assert_that!(stat.hours_min, eq(400));
    assert_that!(stat.hours_max, eq(800));
}

#[test]
fn test_estimate_rounds_half_up() {
    // 125 bytes -> 2.5 lines -> 3; 3 / 5.0 = 0.6 -> 1; 3 / 2.5 = 1.2 -> 1
    let stat = RepoStat::estimate("owner/repo", 125, Vec::new());

    assert_that!(stat.lines, eq(3));
    assert_that!(stat.hours_min, eq(1));
    assert_that!(stat.hours_max, eq(1));
}

#[test]
fn test_empty_repository_estimates_zero() {
    let stat = RepoStat::estimate("owner/empty", 0, Vec::new());

    assert_that!(stat.lines, eq(0));
    assert_that!(stat.hours_min, eq(0));
    assert_that!(stat.hours_max, eq(0));
}

#[test]
fn test_release_falls_back_to_tag_and_placeholder_notes() {
    let release = Release::from_upstream("v1.2.0".to_string(), None, None, Some(String::new()));

    assert_that!(release.version, eq("v1.2.0"));
    assert_that!(release.name, eq("v1.2.0"));
    assert_that!(release.notes, eq(MISSING_RELEASE_NOTES));
}

#[test]
fn test_release_keeps_upstream_name_and_body() {
    let release = Release::from_upstream(
        "v2.0.0".to_string(),
        Some("Big one".to_string()),
        Some("2025-11-02T10:00:00Z".to_string()),
        Some("Changelog".to_string()),
    );

    assert_that!(release.name, eq("Big one"));
    assert_that!(release.published_at, eq("2025-11-02T10:00:00Z"));
    assert_that!(release.notes, eq("Changelog"));
}

#[test]
fn test_totals_sum_every_repository() {
    let stats = vec![
        RepoStat::estimate("a/one", 50_000, Vec::new()),
        RepoStat::estimate("a/two", 25_000, Vec::new()),
    ];

    let totals = RepoStatTotals::from_stats(&stats);

    assert_that!(totals.total_repos, eq(2));
    assert_that!(totals.total_lines, eq(1500));
    assert_that!(totals.total_hours_min, eq(300));
    assert_that!(totals.total_hours_max, eq(600));
}

#[test]
fn test_totals_of_nothing_are_zero() {
    assert_that!(RepoStatTotals::from_stats(&[]), eq(RepoStatTotals::default()));
}

proptest! {
    #[test]
    fn given_any_byte_count_when_estimated_then_hour_range_is_ordered(bytes in 0u64..10_000_000_000) {
        let stat = RepoStat::estimate("owner/repo", bytes, Vec::new());
        prop_assert!(stat.hours_min <= stat.hours_max);
        prop_assert!(stat.hours_max <= stat.lines);
    }
}
