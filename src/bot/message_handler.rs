//! Message Handler module for processing incoming Telegram messages

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::debug;

use super::responder::{Command, Responder};
use super::sender::send_reply;

/// Handle commands and free-text product lookups
pub async fn message_handler(bot: Bot, msg: Message, responder: Arc<Responder>) -> Result<()> {
    let Some(text) = msg.text() else {
        debug!(user_id = %msg.chat.id, "Ignoring non-text message");
        return Ok(());
    };

    let reply = if text.starts_with('/') {
        match Command::parse(text) {
            Some(command) => {
                debug!(user_id = %msg.chat.id, command = ?command, "Received command from user");
                responder.on_command(command)
            }
            None => {
                debug!(user_id = %msg.chat.id, text, "Ignoring unknown command");
                return Ok(());
            }
        }
    } else {
        debug!(user_id = %msg.chat.id, message_length = text.len(), "Received text message from user");
        responder.on_text(text)
    };

    send_reply(&bot, msg.chat.id, None, reply, &responder).await
}
