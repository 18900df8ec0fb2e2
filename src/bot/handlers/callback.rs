use std::sync::Arc;

use teloxide::{prelude::*, types::CallbackQuery};
use tracing::debug;

use crate::responder::MenuResponder;

use super::edit_reply;

/// Handler for callback queries from inline keyboards
pub struct CallbackHandler;

impl CallbackHandler {
    /// Answer the query, then edit the originating message in place.
    /// Unrecognized callback tokens are dropped without a reply.
    pub async fn handle(
        bot: Bot,
        q: CallbackQuery,
        responder: Arc<MenuResponder>,
    ) -> ResponseResult<()> {
        if let Some(data) = q.data.as_deref() {
            bot.answer_callback_query(q.id.clone()).await?;

            let message = match q.message.as_ref() {
                Some(message) => message,
                None => return Ok(()),
            };
            let user_id = q.from.id;

            let reply = match data {
                "deposit" => Some(responder.deposit()),
                "trade" => Some(responder.trade()),
                "toggle_trade" => Some(responder.toggle(user_id).await),
                "withdraw" => Some(responder.withdraw(user_id).await),
                "status" => Some(responder.status(user_id).await),
                "back" => Some(responder.main_menu()),
                other => {
                    debug!("Dropping unrecognized callback {:?} from {}", other, user_id);
                    None
                }
            };

            if let Some(reply) = reply {
                edit_reply(&bot, message.chat.id, message.id, reply).await?;
            }
        }

        Ok(())
    }
}
