use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const TELEGRAM_BASE_URL: &str = "https://api.telegram.org";

const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum TelegramError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Bot API returned status {code}: {description}")]
    Api {
        code: StatusCode,
        description: String,
    },
}

/// Capability interface the watch loop pushes notifications through.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), TelegramError>;
}

/// sendMessage request body.
#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Error envelope the Bot API returns alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    description: Option<String>,
}

/// Telegram Bot API client
/// Delivers notification texts to a chat; retries are left to the caller.
pub struct TelegramClient {
    client: Client,
    token: String,
    base_url: String,
}

impl TelegramClient {
    pub fn new(token: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .unwrap_or_default(),
            token,
            base_url: TELEGRAM_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different host, e.g. a local test server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl Notifier for TelegramClient {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), TelegramError> {
        let url = format!("{}/bot{}/sendMessage", self.base_url, self.token);

        let response = self
            .client
            .post(&url)
            .json(&SendMessageRequest { chat_id, text })
            .send()
            .await?;

        let code = response.status();
        if code.is_success() {
            return Ok(());
        }

        let description = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.description)
            .unwrap_or_else(|| "no description".to_string());

        Err(TelegramError::Api { code, description })
    }
}
