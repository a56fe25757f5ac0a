use std::env;
use std::fmt;
use std::time::Duration;

use reqwest::Url;

use crate::entity::BotError;

pub const DEFAULT_HELIUS_API_URL: &str = "https://api.helius.xyz/v0";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Application configuration, built once at startup
#[derive(Clone)]
pub struct Config {
    /// Telegram bot token
    pub telegram_bot_token: String,

    /// Helius API key, sent as the `api-key` query parameter
    pub helius_api_key: String,

    /// Base URL of the Helius REST API
    pub helius_api_url: String,

    /// Timeout applied to every provider request
    pub request_timeout: Duration,
}

impl Config {
    /// Reads the configuration from process environment variables
    pub fn from_env() -> Result<Self, BotError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads the configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BotError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| {
                    BotError::Config(format!("{} must be set in environment variables", key))
                })
        };

        let telegram_bot_token = required("TELEGRAM_BOT_TOKEN")?;
        let helius_api_key = required("HELIUS_KEY")?;

        let helius_api_url = match lookup("HELIUS_API_URL").filter(|url| !url.trim().is_empty()) {
            Some(raw) => {
                let url = raw.trim().trim_end_matches('/');
                Url::parse(url).map_err(|e| {
                    BotError::Config(format!(
                        "HELIUS_API_URL must be a valid URL, got '{}': {}",
                        raw, e
                    ))
                })?;
                url.to_string()
            }
            None => DEFAULT_HELIUS_API_URL.to_string(),
        };

        let timeout_secs = match lookup("HELIUS_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    BotError::Config(format!(
                        "HELIUS_TIMEOUT_SECS must be a positive integer, got '{}'",
                        raw
                    ))
                })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            telegram_bot_token,
            helius_api_key,
            helius_api_url,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

// Secrets stay out of logs
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("telegram_bot_token", &"<redacted>")
            .field("helius_api_key", &"<redacted>")
            .field("helius_api_url", &self.helius_api_url)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}
