pub mod commands;
pub mod config;
pub mod di;
pub mod entity;
pub mod helius;
pub mod interactor;
pub mod presenter;
pub mod router;
pub mod view;

use std::sync::Arc;
use teloxide::Bot;

// Re-export commonly used items
pub use commands::*;
pub use config::Config;
pub use di::*;
pub use entity::*;
pub use helius::*;
pub use router::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Wires the service container and router around an already built bot
pub fn create_application(
    bot: Bot,
    config: Config,
) -> Result<(TelegramRouter, Bot, Arc<ServiceContainer>), BotError> {
    let services = Arc::new(ServiceContainer::new(&config)?);
    let router = TelegramRouter::new(services.clone());

    Ok((router, bot, services))
}
