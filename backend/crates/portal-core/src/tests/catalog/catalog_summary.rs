use crate::{APPS, AppLink, AppStatus, CatalogSummary};

#[test]
fn test_summary_counts_the_catalog() {
    let summary = CatalogSummary::from_apps(APPS);

    assert_eq!(summary.total_apps, 17);
    assert_eq!(summary.custom_builds, 8);
    assert_eq!(summary.in_production, 13);
    assert_eq!(summary.in_progress, 3);
}

#[test]
fn test_beta_apps_are_in_neither_status_count() {
    let betas: Vec<AppLink> = APPS
        .iter()
        .filter(|a| a.status == AppStatus::Beta)
        .copied()
        .collect();

    let summary = CatalogSummary::from_apps(&betas);

    assert_eq!(summary.total_apps, 1);
    assert_eq!(summary.in_production, 0);
    assert_eq!(summary.in_progress, 0);
}

#[test]
fn test_summary_of_empty_list() {
    let summary = CatalogSummary::from_apps(&[]);

    assert_eq!(summary.total_apps, 0);
    assert_eq!(summary.custom_builds, 0);
    assert_eq!(summary.in_production, 0);
    assert_eq!(summary.in_progress, 0);
}
