//! RugScan Bot for Telegram - Main executable
//!
//! Entry point for the Telegram bot that looks up a token mint on Helius
//! and reports whether its mint and freeze authorities were renounced.
use anyhow::Context;
use dotenv::dotenv;
use log::{info, warn};
use rugscan_bot::{telegram_command_list, Config, Router};
use teloxide::{dptree, prelude::*, Bot};

/// Application entry point
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logging with default level of "info"
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    info!("Starting RugScan Telegram Bot v{}", rugscan_bot::VERSION);

    // Load and validate environment variables
    let config = Config::from_env().context("Failed to load configuration")?;
    info!(
        "Using Helius API at {} with a {}s timeout",
        config.helius_api_url,
        config.request_timeout.as_secs()
    );

    // Create Telegram bot instance
    let bot = Bot::new(config.telegram_bot_token.clone());

    // Initialize the application components
    let (router, bot, service_container) = rugscan_bot::create_application(bot, config)
        .context("Failed to initialize application")?;

    if let Err(e) = bot.set_my_commands(telegram_command_list()).await {
        warn!("Failed to register bot commands: {}", e);
    }

    // Get the handler from the router
    let handler = router.setup_handlers();

    // Build dispatcher with dependency injections and control-C handling
    let mut dispatcher = teloxide::dispatching::Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![service_container])
        .enable_ctrlc_handler()
        .build();

    info!("Bot is running! Press Ctrl+C to stop.");
    dispatcher.dispatch().await;

    info!("Bot stopped");

    Ok(())
}
