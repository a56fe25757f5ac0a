use reqwest::StatusCode;

/// Failures while fetching token metadata from the provider
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("provider returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("failed to parse provider response: {0}")]
    Parse(String),

    #[error("provider returned no metadata for this mint")]
    EmptyResult,
}
