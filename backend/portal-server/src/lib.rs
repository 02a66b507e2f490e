pub mod admin;
pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod metrics;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    apps::{app_list_response::AppListResponse, apps::list_apps, list_apps_query::ListAppsQuery},
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::admin_token::AdminToken,
    feedback::{
        add_response_request::AddResponseRequest,
        add_response_response::AddResponseResponse,
        create_feedback_request::CreateFeedbackRequest,
        feedback::{
            add_response, create_feedback, delete_feedback, feedback_stats, get_feedback,
            list_feedback, update_feedback,
        },
        feedback_dto::FeedbackDto,
        feedback_item_response::FeedbackItemResponse,
        feedback_list_response::FeedbackListResponse,
        list_feedback_query::ListFeedbackQuery,
        response_dto::ResponseDto,
        update_feedback_request::UpdateFeedbackRequest,
    },
    repo_stats::{
        repo_stats::{get_repo_stats, get_repo_totals},
        repo_totals_response::RepoTotalsResponse,
    },
};
pub use app_state::AppState;
pub use error::{Result as ServerErrorResult, ServerError};

pub use crate::routes::build_router;
