use std::sync::Arc;

use crate::config::Config;
use crate::entity::FetchError;
use crate::helius::{HeliusMetadataFetcher, MetadataFetcher};

/// ServiceContainer provides access to core application dependencies
pub struct ServiceContainer {
    metadata_fetcher: Arc<dyn MetadataFetcher + Send + Sync>,
}

impl ServiceContainer {
    /// Create a container backed by the Helius metadata API
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let metadata_fetcher = Arc::new(HeliusMetadataFetcher::new(config)?)
            as Arc<dyn MetadataFetcher + Send + Sync>;

        Ok(Self::with_fetcher(metadata_fetcher))
    }

    /// Create a container around an existing metadata fetcher
    pub fn with_fetcher(metadata_fetcher: Arc<dyn MetadataFetcher + Send + Sync>) -> Self {
        Self { metadata_fetcher }
    }

    // Accessor methods

    pub fn metadata_fetcher(&self) -> Arc<dyn MetadataFetcher + Send + Sync> {
        self.metadata_fetcher.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Authority, TokenMetadata};
    use async_trait::async_trait;
    use std::time::Duration;

    struct StaticFetcher;

    #[async_trait]
    impl MetadataFetcher for StaticFetcher {
        async fn fetch(&self, mint: &str) -> Result<TokenMetadata, FetchError> {
            Ok(TokenMetadata {
                name: mint.to_string(),
                mint_authority: Authority::Renounced,
                ..TokenMetadata::default()
            })
        }
    }

    fn config() -> Config {
        Config {
            telegram_bot_token: "123:abc".to_string(),
            helius_api_key: "key".to_string(),
            helius_api_url: "http://127.0.0.1:9/v0".to_string(),
            request_timeout: Duration::from_secs(10),
        }
    }

    #[tokio::test]
    async fn builds_helius_backed_container() {
        let services = ServiceContainer::new(&config()).unwrap();
        let err = services.metadata_fetcher().fetch("Mint111").await.unwrap_err();

        // Nothing listens on the discard port
        assert!(matches!(err, FetchError::Network(_)));
    }

    #[tokio::test]
    async fn injected_fetcher_is_shared() {
        let services = ServiceContainer::with_fetcher(Arc::new(StaticFetcher));

        let metadata = services.metadata_fetcher().fetch("Mint111").await.unwrap();
        assert_eq!(metadata.name, "Mint111");
        assert_eq!(metadata.symbol, "N/A");
        assert_eq!(metadata.freeze_authority, Authority::Unknown);
    }
}
