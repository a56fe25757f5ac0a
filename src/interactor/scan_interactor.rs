use crate::entity::{FetchError, ScanReport, ScanRequest};
use crate::helius::MetadataFetcher;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait ScanInteractor: Send + Sync {
    async fn scan(&self, request: &ScanRequest) -> Result<ScanReport, FetchError>;
}

pub struct ScanInteractorImpl {
    metadata_fetcher: Arc<dyn MetadataFetcher + Send + Sync>,
}

impl ScanInteractorImpl {
    pub fn new(metadata_fetcher: Arc<dyn MetadataFetcher + Send + Sync>) -> Self {
        Self { metadata_fetcher }
    }
}

#[async_trait]
impl ScanInteractor for ScanInteractorImpl {
    async fn scan(&self, request: &ScanRequest) -> Result<ScanReport, FetchError> {
        let metadata = self.metadata_fetcher.fetch(&request.mint).await?;

        Ok(ScanReport::new(request.mint.clone(), metadata))
    }
}
