use crate::{StatsError, StatsErrorResult, StatsFetcher};

use portal_core::Release;

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Deserialize;
use serde::de::DeserializeOwned;

pub const USER_AGENT: &str = concat!("app-portal/", env!("CARGO_PKG_VERSION"));
const GITHUB_ACCEPT: &str = "application/vnd.github+json";

#[derive(Debug, Deserialize)]
struct UpstreamRelease {
    tag_name: String,
    name: Option<String>,
    published_at: Option<String>,
    body: Option<String>,
}

/// Read-only client for the GitHub REST API
pub struct GithubClient {
    base_url: String,
    client: ReqwestClient,
}

impl GithubClient {
    /// # Arguments
    /// * `base_url` - API root (e.g., "https://api.github.com")
    /// * `token` - Sent as a Bearer token when present
    /// * `timeout` - Per request
    pub fn new(base_url: &str, token: Option<&str>, timeout: Duration) -> StatsErrorResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));

        if let Some(token) = token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| StatsError::configuration("GITHUB_TOKEN is not a valid header value"))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = ReqwestClient::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| StatsError::configuration(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, repo: &str, path: &str) -> StatsErrorResult<T> {
        let url = format!("{}/repos/{}{}", self.base_url, repo, path);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| StatsError::http(repo, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StatsError::upstream(repo, status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| StatsError::decode(repo, e))
    }
}

#[async_trait]
impl StatsFetcher for GithubClient {
    async fn languages(&self, repo: &str) -> StatsErrorResult<HashMap<String, u64>> {
        self.get_json(repo, "/languages").await
    }

    async fn releases(&self, repo: &str, limit: usize) -> StatsErrorResult<Vec<Release>> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let upstream: Vec<UpstreamRelease> = self
            .get_json(repo, &format!("/releases?per_page={}", limit))
            .await?;

        Ok(upstream
            .into_iter()
            .take(limit)
            .map(|r| Release::from_upstream(r.tag_name, r.name, r.published_at, r.body))
            .collect())
    }
}
