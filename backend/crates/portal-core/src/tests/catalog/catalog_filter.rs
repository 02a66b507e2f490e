use crate::{APPS, AppCategory, AppStatus, BuildType, CatalogFilter, find_app};

use std::str::FromStr;

use proptest::prelude::*;

fn ids(filter: &CatalogFilter) -> Vec<&'static str> {
    filter.apply(APPS).into_iter().map(|a| a.id).collect()
}

#[test]
fn test_default_filter_returns_every_app_in_order() {
    let all = CatalogFilter::default().apply(APPS);

    assert_eq!(all.len(), APPS.len());
    assert_eq!(all[0].id, "more-optimal");
}

#[test]
fn test_search_matches_name_or_description_case_insensitively() {
    let filter = CatalogFilter {
        search: Some("hubspot".to_string()),
        ..CatalogFilter::default()
    };

    assert_eq!(ids(&filter), vec!["hubspot", "company-scraper"]);
}

#[test]
fn test_empty_search_matches_everything() {
    let filter = CatalogFilter {
        search: Some(String::new()),
        ..CatalogFilter::default()
    };

    assert_eq!(filter.apply(APPS).len(), APPS.len());
}

#[test]
fn test_conditions_are_combined() {
    let filter = CatalogFilter {
        category: Some(AppCategory::Analytics),
        status: Some(AppStatus::InProgress),
        ..CatalogFilter::default()
    };

    assert_eq!(ids(&filter), vec!["tco-calculator", "scenario-simulator"]);
}

#[test]
fn test_build_type_filter() {
    let custom = CatalogFilter {
        category: Some(AppCategory::Analytics),
        build_type: BuildType::Custom,
        ..CatalogFilter::default()
    };
    assert_eq!(
        ids(&custom),
        vec!["forecaster", "tco-calculator", "scenario-simulator", "impact-matrix"]
    );

    let external = CatalogFilter {
        category: Some(AppCategory::Analytics),
        build_type: BuildType::External,
        ..CatalogFilter::default()
    };
    assert_eq!(ids(&external), vec!["powerbi", "vision-planner"]);
}

#[test]
fn test_no_match_returns_empty() {
    let filter = CatalogFilter {
        search: Some("does not exist anywhere".to_string()),
        ..CatalogFilter::default()
    };

    assert!(filter.apply(APPS).is_empty());
}

#[test]
fn test_active_filter_count_ignores_search() {
    let mut filter = CatalogFilter {
        search: Some("matrix".to_string()),
        ..CatalogFilter::default()
    };
    assert_eq!(filter.active_filter_count(), 0);

    filter.category = Some(AppCategory::Tools);
    filter.build_type = BuildType::Custom;
    assert_eq!(filter.active_filter_count(), 2);

    filter.status = Some(AppStatus::Beta);
    assert_eq!(filter.active_filter_count(), 3);
}

#[test]
fn test_filter_values_parse_from_query_strings() {
    assert_eq!(AppCategory::from_str("tools").unwrap(), AppCategory::Tools);
    assert_eq!(AppStatus::from_str("in-progress").unwrap(), AppStatus::InProgress);
    assert_eq!(BuildType::from_str("external").unwrap(), BuildType::External);

    let err = AppStatus::from_str("retired").unwrap_err();
    assert_eq!(err.field(), Some("status"));
}

#[test]
fn test_find_app_by_id() {
    assert_eq!(find_app("raci-matrix").map(|a| a.progress), Some(Some(30)));
    assert!(find_app("unknown").is_none());
}

fn category_strategy() -> impl Strategy<Value = Option<AppCategory>> {
    prop_oneof![
        Just(None),
        proptest::sample::select(AppCategory::ALL.to_vec()).prop_map(Some),
    ]
}

fn build_type_strategy() -> impl Strategy<Value = BuildType> {
    prop_oneof![
        Just(BuildType::All),
        Just(BuildType::Custom),
        Just(BuildType::External),
    ]
}

proptest! {
    #[test]
    fn given_any_filter_when_applied_then_every_result_matches_and_order_is_kept(
        search in proptest::option::of("[a-zA-Z ]{0,6}"),
        category in category_strategy(),
        build_type in build_type_strategy(),
    ) {
        let filter = CatalogFilter { search, category, status: None, build_type };
        let result = filter.apply(APPS);

        prop_assert!(result.len() <= APPS.len());
        prop_assert!(result.iter().all(|app| filter.matches(app)));

        let positions: Vec<usize> = result
            .iter()
            .filter_map(|app| APPS.iter().position(|a| a.id == app.id))
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn given_a_filter_when_build_type_is_added_then_results_shrink(
        category in category_strategy(),
    ) {
        let broad = CatalogFilter { category, ..CatalogFilter::default() };
        let custom = CatalogFilter { category, build_type: BuildType::Custom, ..CatalogFilter::default() };
        let external = CatalogFilter { category, build_type: BuildType::External, ..CatalogFilter::default() };

        prop_assert_eq!(
            custom.apply(APPS).len() + external.apply(APPS).len(),
            broad.apply(APPS).len()
        );
    }
}
