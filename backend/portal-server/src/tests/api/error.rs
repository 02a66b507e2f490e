use crate::ApiError;

use portal_core::{CoreError, FeedbackStatus};
use portal_db::DbError;

use std::panic::Location;
use std::str::FromStr;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let (status, json) = body_json(ApiError::not_found("Feedback not found")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Feedback not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let (status, json) = body_json(ApiError::validation("Title too long", "title")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "title");
}

#[tokio::test]
async fn test_unauthorized_returns_401() {
    let (status, json) = body_json(ApiError::unauthorized("Missing bearer token")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_upstream_error_returns_502() {
    let error = ApiError::Upstream {
        message: "GitHub unavailable".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["error"]["code"], "UPSTREAM_ERROR");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Database operation failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_uuid_error_converts_to_validation() {
    let uuid_err = uuid::Uuid::parse_str("not-a-uuid").unwrap_err();
    let api_err: ApiError = uuid_err.into();

    match api_err {
        ApiError::Validation { message, field, .. } => {
            assert!(message.contains("Invalid UUID"));
            assert_eq!(field.as_deref(), Some("id"));
        }
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_core_enum_error_keeps_field() {
    let core_err = FeedbackStatus::from_str("done").unwrap_err();
    let api_err: ApiError = core_err.into();

    match api_err {
        ApiError::Validation { message, field, .. } => {
            assert!(message.contains("done"));
            assert_eq!(field.as_deref(), Some("status"));
        }
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_core_validation_error_converts() {
    let core_err = CoreError::Validation {
        message: "title cannot be empty".into(),
        field: Some("title".into()),
        location: ErrorLocation::from(Location::caller()),
    };
    let api_err: ApiError = core_err.into();

    assert!(matches!(api_err, ApiError::Validation { field: Some(ref f), .. } if f == "title"));
}

#[test]
fn test_db_not_found_converts_to_404() {
    let api_err: ApiError = DbError::not_found("Feedback", "abc").into();

    match api_err {
        ApiError::NotFound { message, .. } => assert!(message.contains("abc")),
        _ => panic!("Expected NotFound error"),
    }
}

#[tokio::test]
async fn test_db_failures_hide_details() {
    let api_err: ApiError = DbError::from(sqlx::Error::PoolTimedOut).into();
    let (status, json) = body_json(api_err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["message"], "Database operation failed");
}
