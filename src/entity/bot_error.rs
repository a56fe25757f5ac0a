use super::FetchError;

#[derive(Debug, thiserror::Error)]
pub enum BotError {
    #[error("Usage: /scan <mint>")]
    Usage,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Telegram API error: {0}")]
    TelegramApi(#[from] teloxide::RequestError),
}
