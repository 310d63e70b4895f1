//! Thin client for the EduGPT REST API.
//!
//! Every call resolves to an [`ApiResult`]; nothing is retried and nothing
//! panics. A call counts as successful once a response arrives and its body
//! decodes as JSON, whatever the HTTP status.

use anyhow::{Context, Result};
use futures::future::join_all;
use reqwest::{Client, ClientBuilder, RequestBuilder};
use serde::Serialize;
use serde_json::{json, Value};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

pub const USER_AGENT: &str = "EduGPT-Demo-Client/1.0";

pub const FAQ_SEARCH_LIMIT: u32 = 5;

const SHORT_TIMEOUT: Duration = Duration::from_secs(5);
const MESSAGE_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection error, timeout or a body that is not JSON
    #[error("request failed: {0}")]
    RequestFailed(String),
}

impl ApiError {
    /// The underlying error text
    pub fn message(&self) -> &str {
        match self {
            ApiError::RequestFailed(message) => message,
        }
    }

    /// Failed calls never carry an HTTP status
    pub fn status_code(&self) -> u16 {
        0
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        // reqwest hides the interesting part (refused, timed out...) in the source chain
        let mut message = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = std::error::Error::source(cause);
        }
        ApiError::RequestFailed(message)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status_code: u16,
    pub data: Value,
}

pub type ApiResult = std::result::Result<ApiResponse, ApiError>;

/// The `{status, data|error, status_code}` shape printed for every call
pub fn envelope(result: &ApiResult) -> Value {
    match result {
        Ok(response) => json!({
            "status": "success",
            "data": response.data,
            "status_code": response.status_code,
        }),
        Err(e) => json!({
            "status": "error",
            "error": e.message(),
            "status_code": e.status_code(),
        }),
    }
}

#[derive(Debug, Serialize)]
struct ChatMessageRequest<'a> {
    message: &'a str,
    user_id: u64,
    language: &'a str,
    timestamp: String,
}

fn timestamp() -> String {
    chrono::Local::now()
        .naive_local()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}

pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::from_builder(base_url, Client::builder())
    }

    pub fn from_builder(base_url: &str, builder: ClientBuilder) -> Result<Self> {
        let client = builder
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn health_check(&self) -> ApiResult {
        let request = self
            .client
            .get(self.url("/api/health"))
            .timeout(SHORT_TIMEOUT);
        self.execute(request).await
    }

    pub async fn send_message(&self, message: &str, user_id: u64, language: &str) -> ApiResult {
        self.post_message(message, user_id, language, Some(MESSAGE_TIMEOUT))
            .await
    }

    pub async fn search_faq(&self, query: &str, language: &str) -> ApiResult {
        let limit = FAQ_SEARCH_LIMIT.to_string();
        let request = self
            .client
            .get(self.url("/api/faq/search"))
            .query(&[("query", query), ("language", language), ("limit", limit.as_str())])
            .timeout(SHORT_TIMEOUT);
        self.execute(request).await
    }

    pub async fn get_stats(&self) -> ApiResult {
        let request = self
            .client
            .get(self.url("/api/analytics/stats"))
            .timeout(SHORT_TIMEOUT);
        self.execute(request).await
    }

    /// Post all messages at once, in Russian.
    /// Results come back in input order; one failure does not affect the others.
    pub async fn send_messages(&self, messages: &[(&str, u64)]) -> Vec<ApiResult> {
        let calls = messages
            .iter()
            .map(|(message, user_id)| self.post_message(message, *user_id, "ru", None));
        join_all(calls).await
    }

    async fn post_message(
        &self,
        message: &str,
        user_id: u64,
        language: &str,
        timeout: Option<Duration>,
    ) -> ApiResult {
        let payload = ChatMessageRequest {
            message,
            user_id,
            language,
            timestamp: timestamp(),
        };

        let mut request = self
            .client
            .post(self.url("/api/chat/message"))
            .json(&payload);
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }
        self.execute(request).await
    }

    async fn execute(&self, request: RequestBuilder) -> ApiResult {
        let result = async {
            let response = request.send().await?;
            let status_code = response.status().as_u16();
            debug!("{} -> {}", response.url(), status_code);
            let data = response.json::<Value>().await?;
            Ok::<_, ApiError>(ApiResponse { status_code, data })
        }
        .await;

        if let Err(e) = &result {
            warn!("API call failed: {}", e);
        }
        result
    }
}
