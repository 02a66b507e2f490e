//! Feedback REST API handlers

use crate::api::query::{integer, selected};
use crate::{
    AddResponseRequest, AddResponseResponse, ApiError, ApiResult, AppState,
    CreateFeedbackRequest, DeleteResponse, FeedbackDto, FeedbackItemResponse,
    FeedbackListResponse, ListFeedbackQuery, UpdateFeedbackRequest,
};

use portal_core::{
    Feedback, FeedbackFilter, FeedbackGradeFilter, FeedbackResponse, FeedbackSort, FeedbackStats,
    FeedbackValidator, NewFeedback, find_app, refine_feedback,
};
use portal_db::{FeedbackRepository, FeedbackResponseRepository};

use std::collections::HashMap;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::Utc;
use uuid::Uuid;

/// POST /api/v1/feedback
pub async fn create_feedback(
    State(state): State<AppState>,
    Json(req): Json<CreateFeedbackRequest>,
) -> ApiResult<(StatusCode, Json<FeedbackItemResponse>)> {
    let app_name = req
        .app_name
        .filter(|name| !name.trim().is_empty())
        .or_else(|| find_app(&req.app_id).map(|app| app.name.to_string()))
        .unwrap_or_else(|| req.app_id.clone());

    let input = NewFeedback {
        app_id: req.app_id,
        app_name,
        feedback_type: req.feedback_type.parse()?,
        title: req.title.trim().to_string(),
        description: req.description,
        priority: req.priority.as_deref().map(str::parse).transpose()?,
        submitted_by: req.submitted_by,
        screenshots: req.screenshots,
    };
    FeedbackValidator::validate_new(&input, &state.limits)?;

    let feedback = Feedback::new(input);
    FeedbackRepository::create(&state.pool, &feedback).await?;

    log::info!(
        "Created {} feedback {} for app {}",
        feedback.feedback_type.as_str(),
        feedback.id,
        feedback.app_id
    );

    Ok((
        StatusCode::CREATED,
        Json(FeedbackItemResponse {
            feedback: FeedbackDto::new(feedback, Vec::new()),
        }),
    ))
}

/// GET /api/v1/feedback
pub async fn list_feedback(
    State(state): State<AppState>,
    Query(query): Query<ListFeedbackQuery>,
) -> ApiResult<Json<FeedbackListResponse>> {
    let filter = FeedbackFilter {
        app_id: selected(query.app_id),
        status: selected(query.status)
            .as_deref()
            .map(str::parse)
            .transpose()?,
        feedback_type: selected(query.feedback_type)
            .as_deref()
            .map(str::parse)
            .transpose()?,
    };
    let grade = FeedbackGradeFilter {
        complexity: integer(query.complexity, "complexity")?,
        business_value: integer(query.business_value, "business_value")?,
    };
    let sort: FeedbackSort = query
        .sort
        .filter(|v| !v.trim().is_empty())
        .as_deref()
        .map(str::parse)
        .transpose()?
        .unwrap_or_default();

    let items = FeedbackRepository::find_filtered(&state.pool, &filter).await?;

    let mut responses: HashMap<Uuid, Vec<FeedbackResponse>> = HashMap::new();
    for response in FeedbackResponseRepository::find_for_filter(&state.pool, &filter).await? {
        responses
            .entry(response.feedback_id)
            .or_default()
            .push(response);
    }

    let feedback = refine_feedback(items, &grade, sort)
        .into_iter()
        .map(|f| {
            let replies = responses.remove(&f.id).unwrap_or_default();
            FeedbackDto::new(f, replies)
        })
        .collect();

    Ok(Json(FeedbackListResponse { feedback }))
}

/// GET /api/v1/feedback/{id}
pub async fn get_feedback(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<FeedbackItemResponse>> {
    let feedback_id = Uuid::parse_str(&id)?;

    let feedback = FeedbackRepository::find_by_id(&state.pool, feedback_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Feedback {} not found", id)))?;
    let responses = FeedbackResponseRepository::find_by_feedback(&state.pool, feedback_id).await?;

    Ok(Json(FeedbackItemResponse {
        feedback: FeedbackDto::new(feedback, responses),
    }))
}

/// PATCH /api/v1/feedback/{id}
pub async fn update_feedback(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateFeedbackRequest>,
) -> ApiResult<Json<FeedbackItemResponse>> {
    let feedback_id = Uuid::parse_str(&id)?;

    let update = req.into_update()?;
    FeedbackValidator::validate_update(&update)?;

    let mut feedback = FeedbackRepository::find_by_id(&state.pool, feedback_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Feedback {} not found", id)))?;

    if !update.is_empty() {
        feedback.apply_update(update, Utc::now());
        FeedbackRepository::update(&state.pool, &feedback).await?;

        log::info!(
            "Updated feedback {} (status {})",
            feedback.id,
            feedback.status.as_str()
        );
    }

    let responses = FeedbackResponseRepository::find_by_feedback(&state.pool, feedback_id).await?;

    Ok(Json(FeedbackItemResponse {
        feedback: FeedbackDto::new(feedback, responses),
    }))
}

/// POST /api/v1/feedback/{id}/responses
pub async fn add_response(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<AddResponseRequest>,
) -> ApiResult<(StatusCode, Json<AddResponseResponse>)> {
    let feedback_id = Uuid::parse_str(&id)?;

    FeedbackValidator::validate_response(&req.message)?;

    if !FeedbackRepository::exists(&state.pool, feedback_id).await? {
        return Err(ApiError::not_found(format!("Feedback {} not found", id)));
    }

    let response = FeedbackResponse::new(feedback_id, req.author, req.message, req.is_internal);
    FeedbackResponseRepository::create(&state.pool, &response).await?;

    log::info!("Added response {} to feedback {}", response.id, feedback_id);

    Ok((
        StatusCode::CREATED,
        Json(AddResponseResponse {
            response: response.into(),
        }),
    ))
}

/// DELETE /api/v1/feedback/{id}
pub async fn delete_feedback(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let feedback_id = Uuid::parse_str(&id)?;

    FeedbackRepository::delete(&state.pool, feedback_id).await?;

    log::info!("Deleted feedback {}", feedback_id);

    Ok(Json(DeleteResponse { deleted_id: id }))
}

/// GET /api/v1/feedback/stats
pub async fn feedback_stats(State(state): State<AppState>) -> ApiResult<Json<FeedbackStats>> {
    let stats = FeedbackRepository::stats(&state.pool).await?;
    Ok(Json(stats))
}
