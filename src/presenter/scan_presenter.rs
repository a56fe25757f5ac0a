use crate::entity::ScanRequest;
use crate::interactor::scan_interactor::ScanInteractor;
use crate::view::scan_view::ScanView;
use anyhow::Result;
use async_trait::async_trait;
use log::{info, warn};
use std::sync::Arc;

#[async_trait]
pub trait ScanPresenter: Send + Sync {
    async fn scan(&self, args: &[String]) -> Result<()>;
}

pub struct ScanPresenterImpl<I, V> {
    interactor: Arc<I>,
    view: Arc<V>,
}

impl<I, V> ScanPresenterImpl<I, V>
where
    I: ScanInteractor,
    V: ScanView,
{
    pub fn new(interactor: Arc<I>, view: Arc<V>) -> Self {
        Self { interactor, view }
    }
}

#[async_trait]
impl<I, V> ScanPresenter for ScanPresenterImpl<I, V>
where
    I: ScanInteractor + Send + Sync,
    V: ScanView + Send + Sync,
{
    async fn scan(&self, args: &[String]) -> Result<()> {
        let request = match ScanRequest::from_args(args) {
            Ok(request) => request,
            Err(_) => return self.view.display_usage().await,
        };

        info!("Scanning mint: {}", request.mint);

        match self.interactor.scan(&request).await {
            Ok(report) => {
                self.view.display_report(&report).await?;
            }
            Err(e) => {
                warn!("Scan failed for mint {}: {}", request.mint, e);
                self.view.display_error(e.to_string()).await?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Authority, FetchError, ScanReport, TokenMetadata};
    use crate::interactor::scan_interactor::ScanInteractorImpl;
    use crate::helius::MetadataFetcher;
    use crate::view::scan_view::{format_error, format_report, USAGE_MESSAGE};
    use reqwest::StatusCode;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    enum Reply {
        Metadata(TokenMetadata),
        ServerError(&'static str),
    }

    struct FakeFetcher {
        reply: Reply,
        calls: AtomicUsize,
        last_mint: Mutex<Option<String>>,
    }

    impl FakeFetcher {
        fn new(reply: Reply) -> Arc<Self> {
            Arc::new(Self {
                reply,
                calls: AtomicUsize::new(0),
                last_mint: Mutex::new(None),
            })
        }
    }

    #[async_trait]
    impl MetadataFetcher for FakeFetcher {
        async fn fetch(&self, mint: &str) -> Result<TokenMetadata, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_mint.lock().unwrap() = Some(mint.to_string());
            match &self.reply {
                Reply::Metadata(metadata) => Ok(metadata.clone()),
                Reply::ServerError(body) => Err(FetchError::Status {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    body: body.to_string(),
                }),
            }
        }
    }

    #[derive(Default)]
    struct RecordingView {
        messages: Mutex<Vec<String>>,
    }

    impl RecordingView {
        fn messages(&self) -> Vec<String> {
            self.messages.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ScanView for RecordingView {
        async fn display_usage(&self) -> Result<()> {
            self.messages.lock().unwrap().push(USAGE_MESSAGE.to_string());
            Ok(())
        }

        async fn display_report(&self, report: &ScanReport) -> Result<()> {
            self.messages.lock().unwrap().push(format_report(report));
            Ok(())
        }

        async fn display_error(&self, error_message: String) -> Result<()> {
            self.messages
                .lock()
                .unwrap()
                .push(format_error(&error_message));
            Ok(())
        }
    }

    fn presenter(
        fetcher: Arc<FakeFetcher>,
        view: Arc<RecordingView>,
    ) -> ScanPresenterImpl<ScanInteractorImpl, RecordingView> {
        let interactor = Arc::new(ScanInteractorImpl::new(fetcher));
        ScanPresenterImpl::new(interactor, view)
    }

    fn renounced() -> TokenMetadata {
        TokenMetadata {
            name: "Bonk".to_string(),
            symbol: "BONK".to_string(),
            mint_authority: Authority::Renounced,
            freeze_authority: Authority::Renounced,
        }
    }

    #[tokio::test]
    async fn missing_argument_replies_usage_without_fetching() {
        let fetcher = FakeFetcher::new(Reply::Metadata(renounced()));
        let view = Arc::new(RecordingView::default());

        presenter(fetcher.clone(), view.clone())
            .scan(&[])
            .await
            .unwrap();

        assert_eq!(view.messages(), vec![USAGE_MESSAGE.to_string()]);
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn oversized_mint_replies_usage_without_fetching() {
        let fetcher = FakeFetcher::new(Reply::Metadata(renounced()));
        let view = Arc::new(RecordingView::default());

        presenter(fetcher.clone(), view.clone())
            .scan(&["x".repeat(5000)])
            .await
            .unwrap();

        assert_eq!(view.messages(), vec![USAGE_MESSAGE.to_string()]);
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn scan_trims_mint_and_renders_report() {
        let fetcher = FakeFetcher::new(Reply::Metadata(renounced()));
        let view = Arc::new(RecordingView::default());

        presenter(fetcher.clone(), view.clone())
            .scan(&["  DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263 ".to_string()])
            .await
            .unwrap();

        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            fetcher.last_mint.lock().unwrap().as_deref(),
            Some("DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263")
        );

        let messages = view.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("🏷️ Token: Bonk (BONK)"));
        assert!(messages[0].contains("Renounced ✅"));
        assert!(messages[0].contains("None ✅"));
        assert!(!messages[0].contains("Pump.fun"));
    }

    #[tokio::test]
    async fn pump_mint_gets_marker() {
        let fetcher = FakeFetcher::new(Reply::Metadata(renounced()));
        let view = Arc::new(RecordingView::default());

        presenter(fetcher, view.clone())
            .scan(&["57BTcUAH7KuaZVVSGuz8XJeXYacUozc6KB92TcNkpump".to_string()])
            .await
            .unwrap();

        assert!(view.messages()[0].contains("🎯 Pump.fun token"));
    }

    #[tokio::test]
    async fn fetch_failure_is_rendered_as_message() {
        let fetcher = FakeFetcher::new(Reply::ServerError("internal failure…"));
        let view = Arc::new(RecordingView::default());

        let result = presenter(fetcher, view.clone())
            .scan(&["Mint111".to_string()])
            .await;

        assert!(result.is_ok());
        let messages = view.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].starts_with("❌ Error fetching metadata:"));
        assert!(messages[0].contains("internal failure…"));
    }
}
