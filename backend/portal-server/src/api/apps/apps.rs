//! App catalog handler

use crate::api::query::selected;
use crate::{AppListResponse, ApiResult, ListAppsQuery};

use portal_core::{APPS, CatalogFilter, CatalogSummary};

use axum::{Json, extract::Query};

/// GET /api/v1/apps
pub async fn list_apps(Query(query): Query<ListAppsQuery>) -> ApiResult<Json<AppListResponse>> {
    let filter = CatalogFilter {
        search: query.search.filter(|s| !s.trim().is_empty()),
        category: selected(query.category)
            .as_deref()
            .map(str::parse)
            .transpose()?,
        status: selected(query.status)
            .as_deref()
            .map(str::parse)
            .transpose()?,
        build_type: selected(query.build_type)
            .as_deref()
            .map(str::parse)
            .transpose()?
            .unwrap_or_default(),
    };

    Ok(Json(AppListResponse {
        apps: filter.apply(APPS).into_iter().copied().collect(),
        summary: CatalogSummary::from_apps(APPS),
        active_filter_count: filter.active_filter_count(),
    }))
}

