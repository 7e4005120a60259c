use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;

/// Production homework-status endpoint.
const PRACTICUM_BASE_URL: &str = "https://practicum.yandex.ru";

/// Timeout applied to every request at client construction.
const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum PracticumError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("endpoint returned status {0}")]
    Status(StatusCode),
    #[error("response is not valid JSON: {0}")]
    Parse(String),
}

/// Capability interface the watch loop pulls homework statuses through.
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetch the raw status payload for homeworks updated since `from_date`.
    async fn fetch_statuses(&self, from_date: i64) -> Result<Value, PracticumError>;
}

/// Practicum API client
/// Handles all communication with the homework-status endpoint.
pub struct PracticumClient {
    client: Client,
    token: String,
    base_url: String,
}

impl PracticumClient {
    pub fn new(token: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .unwrap_or_default(),
            token,
            base_url: PRACTICUM_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different host, e.g. a local test server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl StatusSource for PracticumClient {
    async fn fetch_statuses(&self, from_date: i64) -> Result<Value, PracticumError> {
        let url = format!("{}/api/user_api/homework_statuses/", self.base_url);

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await?;

        // Success is strictly 200; other 2xx codes count as fetch failures too.
        if response.status() != StatusCode::OK {
            return Err(PracticumError::Status(response.status()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| PracticumError::Parse(e.to_string()))
    }
}
