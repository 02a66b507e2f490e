//! Guard for the administrative endpoints

use crate::{ApiError, AppState};

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use subtle::ConstantTimeEq;

/// Present in a handler's arguments when the request carried
/// `Authorization: Bearer <AUTH_SECRET>`
pub struct AdminToken;

impl FromRequestParts<AppState> for AdminToken {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let token = parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.strip_prefix("Bearer "))
                .ok_or_else(|| ApiError::unauthorized("Missing bearer token"))?;

            let matches: bool = token.as_bytes().ct_eq(state.admin_secret.as_bytes()).into();
            if !matches {
                return Err(ApiError::unauthorized("Invalid admin token"));
            }

            Ok(AdminToken)
        }
    }
}

