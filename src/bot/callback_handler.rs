//! Callback Handler module for processing inline keyboard callback queries

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::debug;

use super::callback_data::CallbackData;
use super::responder::Responder;
use super::sender::send_reply;

/// Handle brand, product and back button presses
pub async fn callback_handler(
    bot: Bot,
    q: teloxide::types::CallbackQuery,
    responder: Arc<Responder>,
) -> Result<()> {
    debug!(user_id = %q.from.id, "Received callback query from user");

    // Answer first so the button stops spinning even if delivery fails
    bot.answer_callback_query(q.id.clone()).await?;

    let data = q.data.as_deref().unwrap_or("");
    let Some(callback) = CallbackData::parse(data) else {
        debug!(user_id = %q.from.id, data, "Ignoring unrecognized callback data");
        return Ok(());
    };

    let Some(msg) = &q.message else {
        debug!(user_id = %q.from.id, "Callback query has no message to answer in");
        return Ok(());
    };

    let reply = responder.on_callback(&callback);
    send_reply(&bot, msg.chat().id, Some(msg.id()), reply, &responder).await
}
