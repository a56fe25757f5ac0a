use crate::entity::{Authority, BotError, ScanReport};
use anyhow::Result;
use async_trait::async_trait;
use teloxide::{
    prelude::*,
    types::ParseMode,
    utils::html::{bold, code_inline, escape},
    Bot,
};

pub const START_MESSAGE: &str = "👋 Send /scan <mint> to check a token.";
pub const USAGE_MESSAGE: &str = "❌ Usage: /scan <mint>";

#[async_trait]
pub trait ScanView: Send + Sync {
    async fn display_usage(&self) -> Result<()>;
    async fn display_report(&self, report: &ScanReport) -> Result<()>;
    async fn display_error(&self, error_message: String) -> Result<()>;
}

pub struct TelegramScanView {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramScanView {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }
}

#[async_trait]
impl ScanView for TelegramScanView {
    async fn display_usage(&self) -> Result<()> {
        self.bot
            .send_message(self.chat_id, USAGE_MESSAGE)
            .await
            .map_err(BotError::TelegramApi)?;
        Ok(())
    }

    async fn display_report(&self, report: &ScanReport) -> Result<()> {
        self.bot
            .send_message(self.chat_id, format_report(report))
            .parse_mode(ParseMode::Html)
            .await
            .map_err(BotError::TelegramApi)?;
        Ok(())
    }

    async fn display_error(&self, error_message: String) -> Result<()> {
        self.bot
            .send_message(self.chat_id, format_error(&error_message))
            .await
            .map_err(BotError::TelegramApi)?;
        Ok(())
    }
}

fn mint_authority_label(authority: &Authority) -> &'static str {
    match authority {
        Authority::Renounced => "Renounced ✅",
        Authority::Active(_) => "Active ❌",
        Authority::Unknown => "Unknown ⚠️",
    }
}

fn freeze_authority_label(authority: &Authority) -> &'static str {
    match authority {
        Authority::Renounced => "None ✅",
        Authority::Active(_) => "Active ❌",
        Authority::Unknown => "Unknown ⚠️",
    }
}

/// Renders a scan report as Telegram HTML
pub fn format_report(report: &ScanReport) -> String {
    let metadata = &report.metadata;
    let mut lines = vec![
        format!("🔍 {}", bold("RugCheck Report")),
        format!("Mint: {}", code_inline(&report.mint)),
        String::new(),
        format!(
            "🏷️ Token: {} ({})",
            escape(&metadata.name),
            escape(&metadata.symbol)
        ),
        format!(
            "🔒 Mint authority: {}",
            mint_authority_label(&metadata.mint_authority)
        ),
        format!(
            "❄️ Freeze authority: {}",
            freeze_authority_label(&metadata.freeze_authority)
        ),
    ];

    if report.is_pump_fun {
        lines.push("🎯 Pump.fun token".to_string());
    }

    lines.push(String::new());
    lines.push("📊 (More checks coming soon…)".to_string());

    lines.join("\n")
}

pub fn format_error(error_message: &str) -> String {
    format!("❌ Error fetching metadata: {}", error_message)
}
