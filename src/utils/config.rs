use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

use crate::constants::DEFAULT_WEBHOOK_PORT;
use crate::errors::BotError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Bot API token; the process refuses to start without it
    pub telegram_bot_token: String,

    /// Public callback URL for push-style delivery; long polling when unset
    pub webhook_url: Option<String>,

    /// Local port the webhook listener binds to
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            telegram_bot_token: env::var("TELEGRAM_BOT_TOKEN")
                .map_err(|_| BotError::Config("TELEGRAM_BOT_TOKEN not set".into()))?,
            webhook_url: env::var("WEBHOOK_URL").ok().filter(|url| !url.is_empty()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_WEBHOOK_PORT.to_string())
                .parse()
                .unwrap_or(DEFAULT_WEBHOOK_PORT),
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.telegram_bot_token.is_empty() {
            return Err(BotError::Config("Telegram bot token is required".into()).into());
        }

        if let Some(raw) = &self.webhook_url {
            url::Url::parse(raw)
                .map_err(|e| BotError::Config(format!("Invalid WEBHOOK_URL: {e}")))?;
        }

        Ok(())
    }

    pub fn use_webhook(&self) -> bool {
        self.webhook_url.is_some()
    }
}
