use anyhow::Result;
use log::info;
use std::sync::Arc;
use teloxide::prelude::*;

use super::CommandHandler;
use crate::di::ServiceContainer;
use crate::view::scan_view::START_MESSAGE;

pub struct StartCommand;

impl CommandHandler for StartCommand {
    fn command_name() -> &'static str {
        "start"
    }

    fn description() -> &'static str {
        "show how to use the bot"
    }

    async fn execute(
        bot: Bot,
        msg: Message,
        _args: Vec<String>,
        _services: Arc<ServiceContainer>,
    ) -> Result<()> {
        info!("Start command received in chat {}", msg.chat.id);

        bot.send_message(msg.chat.id, START_MESSAGE).await?;

        Ok(())
    }
}
