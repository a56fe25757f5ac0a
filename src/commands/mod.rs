use anyhow::Result;
use std::sync::Arc;
use teloxide::{prelude::*, types::BotCommand};

use crate::di::ServiceContainer;

pub mod help;
pub mod scan;
pub mod start;

/// Trait that defines a command handler
pub trait CommandHandler {
    /// The command name in lowercase
    fn command_name() -> &'static str;

    /// The command description for help
    fn description() -> &'static str;

    /// Execute the command with its whitespace separated arguments
    async fn execute(
        bot: Bot,
        msg: Message,
        args: Vec<String>,
        services: Arc<ServiceContainer>,
    ) -> Result<()>;
}

/// Register all command handlers in the command system
pub fn register_commands() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            start::StartCommand::command_name(),
            start::StartCommand::description(),
        ),
        (
            scan::ScanCommand::command_name(),
            scan::ScanCommand::description(),
        ),
        (
            help::HelpCommand::command_name(),
            help::HelpCommand::description(),
        ),
    ]
}

/// Command list in the shape expected by `setMyCommands`
pub fn telegram_command_list() -> Vec<BotCommand> {
    register_commands()
        .into_iter()
        .map(|(name, description)| BotCommand::new(name, description))
        .collect()
}

/// Splits the text following a command into arguments
pub fn split_args(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Bot Commands enum for teloxide command filter
#[derive(teloxide::utils::command::BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum BotCommands {
    #[command(description = "show how to use the bot")]
    Start,
    #[command(description = "check mint and freeze authorities of a token: /scan <mint>")]
    Scan(String),
    #[command(description = "display this help message")]
    Help,
}

#[cfg(test)]
mod tests {
    use super::*;
    use teloxide::utils::command::BotCommands as _;

    #[test]
    fn parses_scan_with_mint() {
        let command = BotCommands::parse("/scan Mint111", "rugscan_bot").unwrap();
        assert_eq!(command, BotCommands::Scan("Mint111".to_string()));
    }

    #[test]
    fn parses_scan_addressed_to_bot() {
        let command = BotCommands::parse("/scan@rugscan_bot Mint111", "rugscan_bot").unwrap();
        assert_eq!(command, BotCommands::Scan("Mint111".to_string()));
    }

    #[test]
    fn parses_start_and_help() {
        assert_eq!(
            BotCommands::parse("/start", "rugscan_bot").unwrap(),
            BotCommands::Start
        );
        assert_eq!(
            BotCommands::parse("/help", "rugscan_bot").unwrap(),
            BotCommands::Help
        );
    }

    #[test]
    fn split_args_ignores_extra_whitespace() {
        assert_eq!(split_args("  Mint111   extra \n"), vec!["Mint111", "extra"]);
        assert!(split_args("   ").is_empty());
    }

    #[test]
    fn registered_commands_match_the_filter() {
        let names: Vec<&str> = register_commands().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["start", "scan", "help"]);

        let listed = telegram_command_list();
        assert_eq!(listed.len(), 3);
        assert_eq!(listed[1].command, "scan");
    }
}
