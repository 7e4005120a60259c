use std::env;
use std::time::Duration;

/// Seconds between cycle starts when POLL_INTERVAL_SECS is not set.
const DEFAULT_POLL_INTERVAL_SECS: u64 = 600;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{var} must be a positive number of seconds, got \"{value}\"")]
    Invalid { var: &'static str, value: String },
}

/// Environment configuration
/// Loads and validates environment variables
#[derive(Debug)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
    pub poll_interval: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let practicum_token =
            env::var("PRACTICUM_TOKEN").map_err(|_| ConfigError::Missing("PRACTICUM_TOKEN"))?;

        let telegram_token =
            env::var("TELEGRAM_TOKEN").map_err(|_| ConfigError::Missing("TELEGRAM_TOKEN"))?;

        let telegram_chat_id =
            env::var("TELEGRAM_CHAT_ID").map_err(|_| ConfigError::Missing("TELEGRAM_CHAT_ID"))?;

        let poll_interval_secs = match env::var("POLL_INTERVAL_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::Invalid {
                    var: "POLL_INTERVAL_SECS",
                    value: raw,
                })?,
            Err(_) => DEFAULT_POLL_INTERVAL_SECS,
        };

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            poll_interval: Duration::from_secs(poll_interval_secs),
        })
    }
}
