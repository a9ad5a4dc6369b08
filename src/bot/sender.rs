//! Delivers [`Reply`] values through the Telegram Bot API

use anyhow::Result;
use std::path::Path;
use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardMarkup, InputFile, MessageId};
use tracing::{debug, info, warn};

use super::responder::{PhotoSource, Reply, Responder};

/// Send `reply` to `chat_id`.
///
/// Text replies replace the message given in `edit` when possible; photos
/// are always sent as new messages.
pub async fn send_reply(
    bot: &Bot,
    chat_id: ChatId,
    edit: Option<MessageId>,
    reply: Reply,
    responder: &Responder,
) -> Result<()> {
    match reply {
        Reply::Text { text, keyboard } => send_text(bot, chat_id, edit, text, keyboard).await,
        Reply::Photo {
            source,
            caption,
            brand,
            keyboard,
        } => {
            let photo = match input_file(&source).await {
                Ok(photo) => photo,
                Err(attempted) => {
                    let text = responder.image_not_found_text(Path::new(&attempted));
                    return send_text(bot, chat_id, None, text, Some(keyboard)).await;
                }
            };

            bot.send_photo(chat_id, photo)
                .caption(caption)
                .reply_markup(keyboard)
                .await?;
            info!(user_id = %chat_id, brand = %brand, "Product photo sent");
            Ok(())
        }
    }
}

async fn send_text(
    bot: &Bot,
    chat_id: ChatId,
    edit: Option<MessageId>,
    text: String,
    keyboard: Option<InlineKeyboardMarkup>,
) -> Result<()> {
    if let Some(message_id) = edit {
        let mut request = bot.edit_message_text(chat_id, message_id, text.clone());
        if let Some(ref keyboard) = keyboard {
            request = request.reply_markup(keyboard.clone());
        }
        match request.await {
            Ok(_) => return Ok(()),
            Err(e) => {
                warn!(user_id = %chat_id, error = %e, "Failed to edit message, sending a new one");
            }
        }
    }

    let mut request = bot.send_message(chat_id, text);
    if let Some(keyboard) = keyboard {
        request = request.reply_markup(keyboard);
    }
    request.await?;
    Ok(())
}

/// Build the upload for a photo, or return the reference that failed
async fn input_file(source: &PhotoSource) -> Result<InputFile, String> {
    match source {
        PhotoSource::Url(url) => match reqwest::Url::parse(url) {
            Ok(parsed) => Ok(InputFile::url(parsed)),
            Err(e) => {
                warn!(url = %url, error = %e, "Invalid image URL");
                Err(url.clone())
            }
        },
        PhotoSource::Local(path) => match tokio::fs::read(path).await {
            Ok(bytes) => {
                debug!(path = %path.display(), bytes = bytes.len(), "Read local product image");
                let file_name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "photo".to_string());
                Ok(InputFile::memory(bytes).file_name(file_name))
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read local product image");
                Err(path.display().to_string())
            }
        },
    }
}
