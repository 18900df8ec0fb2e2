use std::net::SocketAddr;
use std::sync::Arc;

use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::prelude::*;
use teloxide::update_listeners::webhooks;
use tracing::info;
use url::Url;

use crate::{
    errors::{BotError, Result},
    responder::MenuResponder,
    utils::Config,
};

use super::{
    commands::Command,
    handlers::{CallbackHandler, CommandHandler, TextMessageHandler},
};

/// Main Telegram bot struct
pub struct TelegramBot {
    config: Arc<Config>,
    responder: Arc<MenuResponder>,
}

impl TelegramBot {
    pub fn new(config: Arc<Config>, responder: Arc<MenuResponder>) -> Self {
        Self { config, responder }
    }

    /// Run the dispatcher until shutdown. Delivery is long polling unless a
    /// webhook URL is configured.
    pub async fn run(&self) -> Result<()> {
        let bot = Bot::new(self.config.telegram_bot_token.clone());

        let handler = dptree::entry()
            .branch(
                Update::filter_message()
                    .filter_command::<Command>()
                    .endpoint(Self::handle_command),
            )
            .branch(Update::filter_message().endpoint(TextMessageHandler::handle))
            .branch(Update::filter_callback_query().endpoint(CallbackHandler::handle));

        let mut dispatcher = Dispatcher::builder(bot.clone(), handler)
            .dependencies(dptree::deps![self.responder.clone()])
            .enable_ctrlc_handler()
            .build();

        match &self.config.webhook_url {
            Some(raw_url) => {
                let url: Url = raw_url
                    .parse()
                    .map_err(|e| BotError::config(format!("Invalid WEBHOOK_URL: {e}")))?;
                let address = SocketAddr::from(([0, 0, 0, 0], self.config.port));

                info!("🤖 Starting Telegram bot with webhook delivery on {}", address);
                let listener = webhooks::axum(bot, webhooks::Options::new(address, url)).await?;
                dispatcher
                    .dispatch_with_listener(
                        listener,
                        LoggingErrorHandler::with_custom_text("An error from the update listener"),
                    )
                    .await;
            }
            None => {
                info!("🤖 Starting Telegram bot with long polling");
                dispatcher.dispatch().await;
            }
        }

        Ok(())
    }

    /// Dispatch a parsed command to its handler
    async fn handle_command(
        bot: Bot,
        msg: Message,
        cmd: Command,
        responder: Arc<MenuResponder>,
    ) -> ResponseResult<()> {
        info!("Processing command {:?} from chat {}", cmd, msg.chat.id);

        match cmd {
            Command::Start => CommandHandler::handle_start(bot, msg, responder).await,
            Command::Deposit => CommandHandler::handle_deposit(bot, msg, responder).await,
            Command::Trade => CommandHandler::handle_trade(bot, msg, responder).await,
            Command::Status => CommandHandler::handle_status(bot, msg, responder).await,
            Command::Withdraw => CommandHandler::handle_withdraw(bot, msg, responder).await,
            Command::Help => CommandHandler::handle_help(bot, msg, responder).await,
        }
    }
}
