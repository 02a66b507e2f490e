use crate::{CliClientResult, ClientError};

use std::panic::Location;

use error_location::ErrorLocation;
use reqwest::{Client as ReqwestClient, Method, Url};
use serde::Serialize;
use serde_json::Value;

/// Body of `feedback create`
#[derive(Debug, Default, Serialize)]
pub struct NewFeedback {
    pub app_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,
    #[serde(rename = "type")]
    pub feedback_type: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    pub submitted_by: String,
}

/// Body of `feedback update`; absent fields are left alone by the server
#[derive(Debug, Default, Serialize)]
pub struct FeedbackUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complexity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_value: Option<i32>,
    /// Unix seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_date: Option<i64>,
    /// Unix seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<i64>,
}

/// Filters and sort of `feedback list`
#[derive(Debug, Default)]
pub struct FeedbackQuery {
    pub app_id: Option<String>,
    pub status: Option<String>,
    pub feedback_type: Option<String>,
    pub complexity: Option<i32>,
    pub business_value: Option<i32>,
    pub sort: Option<String>,
}

/// HTTP client for the portal-server REST API
pub struct Client {
    pub base_url: String,
    admin_token: Option<String>,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:3000")
    /// * `admin_token` - AUTH_SECRET, sent as a bearer token to /admin routes
    pub fn new(base_url: &str, admin_token: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            admin_token: admin_token.map(String::from),
            client: ReqwestClient::new(),
        }
    }

    /// Absolute URL for `path` with the present query parameters
    #[track_caller]
    fn url(&self, path: &str, params: &[(&str, Option<String>)]) -> CliClientResult<Url> {
        let raw = format!("{}{}", self.base_url, path);
        let mut url = Url::parse(&raw).map_err(|e| ClientError::InvalidUrl {
            url: raw.clone(),
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if params.iter().any(|(_, value)| value.is_some()) {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                if let Some(value) = value {
                    pairs.append_pair(key, value);
                }
            }
        }

        Ok(url)
    }

    fn request(&self, method: Method, path: &str) -> CliClientResult<reqwest::RequestBuilder> {
        Ok(self.client.request(method, self.url(path, &[])?))
    }

    /// Request carrying the admin bearer token when one is configured
    fn admin_request(&self, path: &str) -> CliClientResult<reqwest::RequestBuilder> {
        let req = self.request(Method::POST, path)?;
        Ok(match self.admin_token {
            Some(ref token) => req.bearer_auth(token),
            None => req,
        })
    }

    /// Execute request and handle errors
    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
            let error = body.get("error");
            let code = error
                .and_then(|e| e.get("code"))
                .and_then(|v| v.as_str())
                .unwrap_or("UNKNOWN")
                .to_string();
            let message = error
                .and_then(|e| e.get("message"))
                .and_then(|v| v.as_str())
                .map(String::from)
                .unwrap_or_else(|| String::from_utf8_lossy(&bytes).into_owned());
            return Err(ClientError::Api {
                status: status.as_u16(),
                code,
                message,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(serde_json::from_slice(&bytes)?)
    }

    // =========================================================================
    // Feedback Operations
    // =========================================================================

    /// List feedback, newest first unless `query.sort` says otherwise
    pub async fn list_feedback(&self, query: &FeedbackQuery) -> CliClientResult<Value> {
        let url = self.url(
            "/api/v1/feedback",
            &[
                ("app_id", query.app_id.clone()),
                ("status", query.status.clone()),
                ("type", query.feedback_type.clone()),
                ("complexity", query.complexity.map(|c| c.to_string())),
                ("business_value", query.business_value.map(|v| v.to_string())),
                ("sort", query.sort.clone()),
            ],
        )?;
        self.execute(self.client.get(url)).await
    }

    /// Get one feedback item with its responses
    pub async fn get_feedback(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::GET, &format!("/api/v1/feedback/{}", id))?;
        self.execute(req).await
    }

    /// Submit a new feedback item
    pub async fn create_feedback(&self, feedback: &NewFeedback) -> CliClientResult<Value> {
        let req = self.request(Method::POST, "/api/v1/feedback")?.json(feedback);
        self.execute(req).await
    }

    /// Grade a feedback item or move it through the workflow
    pub async fn update_feedback(&self, id: &str, update: &FeedbackUpdate) -> CliClientResult<Value> {
        let req = self
            .request(Method::PATCH, &format!("/api/v1/feedback/{}", id))?
            .json(update);
        self.execute(req).await
    }

    /// Reply to a feedback item
    pub async fn add_response(
        &self,
        id: &str,
        message: &str,
        author: &str,
        is_internal: bool,
    ) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct AddResponseRequest<'a> {
            message: &'a str,
            author: &'a str,
            is_internal: bool,
        }

        let body = AddResponseRequest {
            message,
            author,
            is_internal,
        };
        let req = self
            .request(Method::POST, &format!("/api/v1/feedback/{}/responses", id))?
            .json(&body);
        self.execute(req).await
    }

    /// Delete a feedback item and its responses
    pub async fn delete_feedback(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::DELETE, &format!("/api/v1/feedback/{}", id))?;
        self.execute(req).await
    }

    /// Counts by workflow status
    pub async fn feedback_stats(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, "/api/v1/feedback/stats")?;
        self.execute(req).await
    }

    // =========================================================================
    // Repository Statistics
    // =========================================================================

    /// Per-repository statistics, or their sums when `totals` is set
    pub async fn repo_stats(&self, totals: bool) -> CliClientResult<Value> {
        let path = if totals {
            "/api/repo-stats/totals"
        } else {
            "/api/repo-stats"
        };
        let req = self.request(Method::GET, path)?;
        self.execute(req).await
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// Filtered app catalog
    pub async fn list_apps(
        &self,
        search: Option<&str>,
        category: Option<&str>,
        status: Option<&str>,
        build_type: Option<&str>,
    ) -> CliClientResult<Value> {
        let url = self.url(
            "/api/v1/apps",
            &[
                ("search", search.map(String::from)),
                ("category", category.map(String::from)),
                ("status", status.map(String::from)),
                ("build_type", build_type.map(String::from)),
            ],
        )?;
        self.execute(self.client.get(url)).await
    }

    // =========================================================================
    // Admin
    // =========================================================================

    /// Flush the server's SQLite WAL
    pub async fn checkpoint(&self) -> CliClientResult<Value> {
        let req = self.admin_request("/admin/checkpoint")?;
        self.execute(req).await
    }

    /// Drop the statistics cache and fetch from GitHub again
    pub async fn refresh_repo_stats(&self) -> CliClientResult<Value> {
        let req = self.admin_request("/admin/repo-stats/refresh")?;
        self.execute(req).await
    }
}
