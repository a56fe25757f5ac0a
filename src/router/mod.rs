use std::sync::Arc;
use teloxide::{dispatching::UpdateHandler, prelude::*};

use crate::commands::{self, split_args, BotCommands, CommandHandler};
use crate::di::ServiceContainer;

// Base router trait
pub trait Router: Send + Sync {
    fn setup_handlers(&self) -> UpdateHandler<anyhow::Error>;
}

// Command router implementation
pub struct TelegramRouter {
    services: Arc<ServiceContainer>,
}

impl TelegramRouter {
    pub fn new(services: Arc<ServiceContainer>) -> Self {
        Self { services }
    }
}

impl Router for TelegramRouter {
    fn setup_handlers(&self) -> UpdateHandler<anyhow::Error> {
        use dptree::case;
        use teloxide::dispatching::UpdateFilterExt;

        let services_for_start = self.services.clone();
        let services_for_scan = self.services.clone();
        let services_for_help = self.services.clone();

        // Use BotCommands enum with teloxide's command filter
        let command_handler = teloxide::filter_command::<BotCommands, _>()
            .branch(
                case![BotCommands::Start].endpoint(move |bot: Bot, msg: Message| {
                    let services = services_for_start.clone();
                    async move {
                        commands::start::StartCommand::execute(bot, msg, Vec::new(), services)
                            .await
                    }
                }),
            )
            .branch(case![BotCommands::Scan(text)].endpoint(
                move |bot: Bot, msg: Message, text: String| {
                    let services = services_for_scan.clone();
                    async move {
                        commands::scan::ScanCommand::execute(
                            bot,
                            msg,
                            split_args(&text),
                            services,
                        )
                        .await
                    }
                },
            ))
            .branch(
                case![BotCommands::Help].endpoint(move |bot: Bot, msg: Message| {
                    let services = services_for_help.clone();
                    async move {
                        commands::help::HelpCommand::execute(bot, msg, Vec::new(), services).await
                    }
                }),
            );

        Update::filter_message().branch(command_handler)
    }
}
