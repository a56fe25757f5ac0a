use super::CommandHandler;
use crate::di::ServiceContainer;
use crate::interactor::scan_interactor::ScanInteractorImpl;
use crate::presenter::scan_presenter::{ScanPresenter, ScanPresenterImpl};
use crate::view::scan_view::TelegramScanView;
use anyhow::Result;
use log::info;
use std::sync::Arc;
use teloxide::prelude::*;

pub struct ScanCommand;

impl CommandHandler for ScanCommand {
    fn command_name() -> &'static str {
        "scan"
    }

    fn description() -> &'static str {
        "check mint and freeze authorities of a token"
    }

    async fn execute(
        bot: Bot,
        msg: Message,
        args: Vec<String>,
        services: Arc<ServiceContainer>,
    ) -> Result<()> {
        let chat_id = msg.chat.id;

        info!("Scan command received in chat {}", chat_id);

        let interactor = Arc::new(ScanInteractorImpl::new(services.metadata_fetcher()));
        let view = Arc::new(TelegramScanView::new(bot, chat_id));
        let presenter = ScanPresenterImpl::new(interactor, view);

        presenter.scan(&args).await
    }
}
