//! Responder module: decides the reply for every inbound event
//!
//! Nothing in here talks to Telegram. Each event is answered from the
//! current catalog snapshot and turned into a [`Reply`] that the sender
//! delivers.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use teloxide::types::InlineKeyboardMarkup;
use tracing::{debug, info, warn};

use crate::catalog::{Catalog, CatalogStore, Product};
use crate::localization::LocalizationManager;
use crate::path_resolver::PathResolver;

use super::callback_data::CallbackData;
use super::ui_builder::{create_brand_keyboard, create_product_keyboard};

/// Commands the bot answers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    Refresh,
}

impl Command {
    /// Parse `/start`, `/help` or `/refresh`, with an optional `@botname` suffix
    pub fn parse(text: &str) -> Option<Self> {
        let word = text.split_whitespace().next()?;
        let name = word.strip_prefix('/')?;
        let name = name.split_once('@').map_or(name, |(name, _)| name);
        match name {
            "start" => Some(Command::Start),
            "help" => Some(Command::Help),
            "refresh" => Some(Command::Refresh),
            _ => None,
        }
    }
}

/// Where the photo bytes come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoSource {
    /// Fetched by Telegram itself
    Url(String),
    /// Read from disk and uploaded
    Local(PathBuf),
}

/// One outbound response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text {
        text: String,
        keyboard: Option<InlineKeyboardMarkup>,
    },
    Photo {
        source: PhotoSource,
        caption: String,
        /// Brand whose product menu is attached
        brand: String,
        keyboard: InlineKeyboardMarkup,
    },
}

impl Reply {
    pub fn text(&self) -> Option<&str> {
        match self {
            Reply::Text { text, .. } => Some(text),
            Reply::Photo { .. } => None,
        }
    }

    pub fn keyboard(&self) -> Option<&InlineKeyboardMarkup> {
        match self {
            Reply::Text { keyboard, .. } => keyboard.as_ref(),
            Reply::Photo { keyboard, .. } => Some(keyboard),
        }
    }
}

#[derive(Debug)]
pub struct Responder {
    catalog: Arc<CatalogStore>,
    resolver: PathResolver,
    localization: Arc<LocalizationManager>,
    language: String,
}

impl Responder {
    pub fn new(
        catalog: Arc<CatalogStore>,
        resolver: PathResolver,
        localization: Arc<LocalizationManager>,
        language: impl Into<String>,
    ) -> Self {
        let language = language.into();
        if !localization.has_language(&language) {
            warn!(language = %language, "No messages for configured language, falling back to English");
        }
        Self {
            catalog,
            resolver,
            localization,
            language,
        }
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    fn t(&self, key: &str) -> String {
        self.localization
            .get_message_in_language(key, &self.language, None)
    }

    fn t_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        self.localization
            .get_message_with_args(key, &self.language, args)
    }

    fn brand_menu_reply(&self, catalog: &Catalog, key: &str) -> Reply {
        let mut text = self.t(key);
        if catalog.is_empty() {
            text = format!("{}\n\n{}", text, self.t("catalog-empty"));
        }
        Reply::Text {
            text,
            keyboard: Some(create_brand_keyboard(catalog)),
        }
    }

    fn product_keyboard(&self, catalog: &Catalog, brand: &str) -> InlineKeyboardMarkup {
        create_product_keyboard(catalog, brand, &self.t("back-to-brands"))
    }

    pub fn start(&self) -> Reply {
        self.brand_menu_reply(&self.catalog.snapshot(), "start-prompt")
    }

    pub fn help(&self) -> Reply {
        self.brand_menu_reply(&self.catalog.snapshot(), "help-text")
    }

    /// Reload the catalog from its source and confirm with the new brand menu
    pub fn refresh(&self) -> Reply {
        let catalog = self.catalog.reload();
        info!(products = catalog.len(), "Catalog refreshed on request");
        let count = catalog.len().to_string();
        Reply::Text {
            text: self.t_args("refresh-done", &[("count", count.as_str())]),
            keyboard: Some(create_brand_keyboard(&catalog)),
        }
    }

    pub fn on_command(&self, command: Command) -> Reply {
        match command {
            Command::Start => self.start(),
            Command::Help => self.help(),
            Command::Refresh => self.refresh(),
        }
    }

    pub fn on_callback(&self, data: &CallbackData) -> Reply {
        let catalog = self.catalog.snapshot();
        match data {
            CallbackData::Brand(brand) => {
                if !catalog.has_brand(brand) {
                    debug!(brand = %brand, "Brand no longer in catalog");
                    return self.not_found(&catalog);
                }
                Reply::Text {
                    text: self.t_args("brand-selected", &[("brand", brand.as_str())]),
                    keyboard: Some(self.product_keyboard(&catalog, brand)),
                }
            }
            CallbackData::Item { brand, name } => match catalog.find(brand, name) {
                Some(product) => self.product_reply(&catalog, product),
                None => {
                    debug!(brand = %brand, name = %name, "Product no longer in catalog");
                    self.not_found(&catalog)
                }
            },
            CallbackData::BackToBrands => self.brand_menu_reply(&catalog, "start-prompt"),
        }
    }

    /// Free text: case-insensitive product name match across all brands
    pub fn on_text(&self, text: &str) -> Reply {
        let catalog = self.catalog.snapshot();
        match catalog.find_by_name(text) {
            Some(product) => self.product_reply(&catalog, product),
            None => Reply::Text {
                text: self.t("choose-brand-first"),
                keyboard: Some(create_brand_keyboard(&catalog)),
            },
        }
    }

    fn not_found(&self, catalog: &Catalog) -> Reply {
        Reply::Text {
            text: self.t("product-not-found"),
            keyboard: Some(create_brand_keyboard(catalog)),
        }
    }

    fn product_reply(&self, catalog: &Catalog, product: &Product) -> Reply {
        let keyboard = self.product_keyboard(catalog, &product.brand);

        let source = if product.has_remote_image() {
            PhotoSource::Url(product.image.clone())
        } else {
            match self.resolver.try_resolve(&product.image) {
                Ok(path) => PhotoSource::Local(path),
                Err(unresolved) => {
                    warn!(
                        image = %product.image,
                        attempted = %unresolved.attempted.display(),
                        "Product image could not be resolved"
                    );
                    return Reply::Text {
                        text: self.image_not_found_text(&unresolved.attempted),
                        keyboard: Some(keyboard),
                    };
                }
            }
        };

        Reply::Photo {
            source,
            caption: product.caption.clone(),
            brand: product.brand.clone(),
            keyboard,
        }
    }

    pub fn image_not_found_text(&self, attempted: &Path) -> String {
        let path = attempted.display().to_string();
        self.t_args("image-not-found", &[("path", path.as_str())])
    }
}
