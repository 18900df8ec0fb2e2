use std::sync::Arc;

use teloxide::prelude::*;

use crate::responder::MenuResponder;

use super::send_reply;

/// Handler for free-form text messages (withdrawal address intake)
pub struct TextMessageHandler;

impl TextMessageHandler {
    /// Route plain text into the withdrawal flow. Text outside that flow,
    /// and anything command-shaped, produces no reply.
    pub async fn handle(
        bot: Bot,
        msg: Message,
        responder: Arc<MenuResponder>,
    ) -> ResponseResult<()> {
        let user_id = match msg.from() {
            Some(user) => user.id,
            None => return Ok(()),
        };

        if let Some(text) = msg.text() {
            if text.starts_with('/') {
                // Command without proper parsing, ignore
                return Ok(());
            }

            if let Some(reply) = responder.handle_address(user_id, text).await {
                send_reply(&bot, msg.chat.id, reply).await?;
            }
        }

        Ok(())
    }
}
