use std::sync::Arc;

use teloxide::prelude::*;

use crate::responder::MenuResponder;

use super::send_reply;

/// Handlers for slash commands
pub struct CommandHandler;

impl CommandHandler {
    pub async fn handle_start(
        bot: Bot,
        msg: Message,
        responder: Arc<MenuResponder>,
    ) -> ResponseResult<()> {
        let first_name = msg
            .from()
            .map(|user| user.first_name.clone())
            .unwrap_or_else(|| "trader".to_string());
        send_reply(&bot, msg.chat.id, responder.welcome(&first_name)).await
    }

    pub async fn handle_deposit(
        bot: Bot,
        msg: Message,
        responder: Arc<MenuResponder>,
    ) -> ResponseResult<()> {
        send_reply(&bot, msg.chat.id, responder.deposit()).await
    }

    pub async fn handle_trade(
        bot: Bot,
        msg: Message,
        responder: Arc<MenuResponder>,
    ) -> ResponseResult<()> {
        send_reply(&bot, msg.chat.id, responder.trade()).await
    }

    pub async fn handle_status(
        bot: Bot,
        msg: Message,
        responder: Arc<MenuResponder>,
    ) -> ResponseResult<()> {
        let user_id = match msg.from() {
            Some(user) => user.id,
            None => return Ok(()),
        };
        send_reply(&bot, msg.chat.id, responder.status(user_id).await).await
    }

    pub async fn handle_withdraw(
        bot: Bot,
        msg: Message,
        responder: Arc<MenuResponder>,
    ) -> ResponseResult<()> {
        let user_id = match msg.from() {
            Some(user) => user.id,
            None => return Ok(()),
        };
        send_reply(&bot, msg.chat.id, responder.withdraw(user_id).await).await
    }

    pub async fn handle_help(
        bot: Bot,
        msg: Message,
        responder: Arc<MenuResponder>,
    ) -> ResponseResult<()> {
        send_reply(&bot, msg.chat.id, responder.help()).await
    }
}
