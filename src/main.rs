use anyhow::{Context, Result};
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use catalog_bot::bot::{self, Responder};
use catalog_bot::catalog::CatalogStore;
use catalog_bot::config::BotConfig;
use catalog_bot::localization::LocalizationManager;
use catalog_bot::path_resolver::PathResolver;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting Catalog Telegram Bot");

    let config = BotConfig::from_env()?;

    let localization = LocalizationManager::new(&config.locales_dir)
        .with_context(|| format!("loading messages from {}", config.locales_dir.display()))?;

    info!(path = %config.products_path.display(), "Loading product catalog");
    let catalog = Arc::new(CatalogStore::load(config.products_path.clone()));

    let responder = Arc::new(Responder::new(
        catalog,
        PathResolver::new(config.image_base_dir.clone()),
        Arc::new(localization),
        config.language.clone(),
    ));

    let bot = Bot::new(config.bot_token);

    info!("Bot initialized, starting dispatcher");

    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint({
            let responder = Arc::clone(&responder);
            move |bot: Bot, msg: Message| {
                let responder = Arc::clone(&responder);
                async move { bot::message_handler(bot, msg, responder).await }
            }
        }))
        .branch(Update::filter_callback_query().endpoint({
            let responder = Arc::clone(&responder);
            move |bot: Bot, q: CallbackQuery| {
                let responder = Arc::clone(&responder);
                async move { bot::callback_handler(bot, q, responder).await }
            }
        }));

    Dispatcher::builder(bot, handler)
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
