//! Helpers shared by the list endpoints' query strings

use crate::{ApiError, ApiResult};

/// Empty and "all" both mean no filter
pub(crate) fn selected(value: Option<String>) -> Option<String> {
    value.filter(|v| {
        let v = v.trim();
        !v.is_empty() && !v.eq_ignore_ascii_case("all")
    })
}

/// Parse an optional integer filter; an empty value is no filter
#[track_caller]
pub(crate) fn integer(value: Option<String>, field: &str) -> ApiResult<Option<i32>> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| ApiError::validation(format!("{} must be an integer", field), field)),
    }
}
