pub mod callback;
pub mod command;
pub mod menu;
pub mod text;

pub use callback::CallbackHandler;
pub use command::CommandHandler;
pub use menu::MenuCreator;
pub use text::TextMessageHandler;

use teloxide::prelude::*;
use teloxide::types::{MessageId, ParseMode};

use crate::responder::Reply;

/// Send a responder reply as a new message
pub(crate) async fn send_reply(bot: &Bot, chat_id: ChatId, reply: Reply) -> ResponseResult<()> {
    let mut request = bot
        .send_message(chat_id, reply.text)
        .parse_mode(ParseMode::MarkdownV2);
    if let Some(menu) = reply.menu {
        request = request.reply_markup(MenuCreator::keyboard_for(menu));
    }
    request.await?;
    Ok(())
}

/// Edit the message a button press originated from
pub(crate) async fn edit_reply(
    bot: &Bot,
    chat_id: ChatId,
    message_id: MessageId,
    reply: Reply,
) -> ResponseResult<()> {
    let mut request = bot
        .edit_message_text(chat_id, message_id, reply.text)
        .parse_mode(ParseMode::MarkdownV2);
    if let Some(menu) = reply.menu {
        request = request.reply_markup(MenuCreator::keyboard_for(menu));
    }
    request.await?;
    Ok(())
}
