use async_trait::async_trait;
use log::{error, info};
use reqwest::Client;

use crate::config::Config;
use crate::entity::{FetchError, TokenMetadata};
use crate::helius::models::{HeliusTokenMetadata, TokenMetadataRequest};

/// Longest slice of a provider error body that is surfaced to users
pub const MAX_ERROR_BODY_CHARS: usize = 200;

/// Source of token metadata for a mint address
#[async_trait]
pub trait MetadataFetcher: Send + Sync {
    /// Fetch and normalize the metadata of a single mint
    async fn fetch(&self, mint: &str) -> Result<TokenMetadata, FetchError>;
}

/// Metadata fetcher backed by the Helius `token-metadata` endpoint
pub struct HeliusMetadataFetcher {
    http_client: Client,
    api_url: String,
    api_key: String,
}

impl HeliusMetadataFetcher {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let http_client = Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            http_client,
            api_url: config.helius_api_url.clone(),
            api_key: config.helius_api_key.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/token-metadata", self.api_url)
    }
}

#[async_trait]
impl MetadataFetcher for HeliusMetadataFetcher {
    async fn fetch(&self, mint: &str) -> Result<TokenMetadata, FetchError> {
        info!("Fetching token metadata for mint: {}", mint);

        // Errors carry the request URL, which holds the API key
        let response = self
            .http_client
            .post(self.endpoint())
            .query(&[("api-key", self.api_key.as_str())])
            .json(&TokenMetadataRequest::for_mint(mint))
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                error!("Failed to reach Helius API: {}", e);
                FetchError::Network(e)
            })?;

        let status = response.status();
        info!("Helius API response: {} for mint {}", status, mint);

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("Helius API error [token-metadata]: {}", error_text);
            return Err(FetchError::Status {
                status,
                body: truncate(&error_text, MAX_ERROR_BODY_CHARS),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.without_url()))?;

        let items: Vec<HeliusTokenMetadata> = serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse token metadata response: {}", e);
            FetchError::Parse(e.to_string())
        })?;

        let raw = items.into_iter().next().ok_or(FetchError::EmptyResult)?;

        Ok(raw.into())
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}…", &text[..cut]),
        None => text.to_string(),
    }
}
