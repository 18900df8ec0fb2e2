use thiserror::Error;

pub type Result<T> = std::result::Result<T, BotError>;

/// Top-level error type for the bot
#[derive(Debug, Error)]
pub enum BotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),
}

impl BotError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
