#![allow(dead_code)]

//! Test infrastructure for portal-server API tests

use portal_core::{Release, ValidationLimits};
use portal_server::AppState;
use portal_stats::{RepoStatsCache, StatsError, StatsErrorResult, StatsFetcher};

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

pub const ADMIN_SECRET: &str = "test-secret";
pub const TEST_REPO: &str = "acme/portal";

/// Serves fixed byte counts; repositories missing from the map fail
#[derive(Default)]
pub struct FakeGithub {
    bytes: HashMap<String, u64>,
    calls: AtomicUsize,
    outage: AtomicBool,
}

impl FakeGithub {
    pub fn with(bytes: &[(&str, u64)]) -> Self {
        Self {
            bytes: bytes.iter().map(|(r, b)| (r.to_string(), *b)).collect(),
            calls: AtomicUsize::new(0),
            outage: AtomicBool::new(false),
        }
    }

    /// While set, every repository fails as if GitHub were unavailable
    pub fn set_outage(&self, outage: bool) {
        self.outage.store(outage, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StatsFetcher for FakeGithub {
    async fn languages(&self, repo: &str) -> StatsErrorResult<HashMap<String, u64>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.outage.load(Ordering::SeqCst) {
            return Err(StatsError::upstream(repo, 503));
        }
        match self.bytes.get(repo) {
            Some(bytes) => Ok(HashMap::from([("Rust".to_string(), *bytes)])),
            None => Err(StatsError::upstream(repo, 404)),
        }
    }

    async fn releases(&self, _repo: &str, _limit: usize) -> StatsErrorResult<Vec<Release>> {
        Ok(vec![Release::from_upstream(
            "v1.0.0".to_string(),
            None,
            Some("2026-01-05T10:00:00Z".to_string()),
            None,
        )])
    }
}

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = portal_db::connect("sqlite::memory:", 1)
        .await
        .expect("Failed to create test database");

    portal_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// AppState whose stats cache measures TEST_REPO at 5,000 bytes
pub async fn create_test_app_state() -> AppState {
    let github = Arc::new(FakeGithub::with(&[(TEST_REPO, 5_000)]));
    create_test_app_state_with(github, &[TEST_REPO]).await
}

pub async fn create_test_app_state_with(
    github: Arc<FakeGithub>,
    repositories: &[&str],
) -> AppState {
    let stats = RepoStatsCache::new(
        github,
        repositories.iter().map(|r| r.to_string()).collect(),
        5,
        Duration::from_secs(3600),
    );

    AppState {
        pool: create_test_pool().await,
        stats: Arc::new(stats),
        limits: ValidationLimits::default(),
        admin_secret: Arc::from(ADMIN_SECRET),
        prometheus: None,
    }
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Run one request; non-JSON bodies come back as Value::Null
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

/// Submit a feedback item through the API and return its id
pub async fn create_feedback(state: &AppState, app_id: &str, feedback_type: &str) -> String {
    let (status, json) = send(
        portal_server::build_router(state.clone()),
        json_request(
            "POST",
            "/api/v1/feedback",
            serde_json::json!({
                "app_id": app_id,
                "type": feedback_type,
                "title": format!("{} report", feedback_type),
                "description": "Steps to reproduce",
                "submitted_by": "tester@example.com",
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    json["feedback"]["id"].as_str().unwrap().to_string()
}
