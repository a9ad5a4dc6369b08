//! # Configuration Module
//!
//! Runtime settings read from the environment (optionally seeded from a
//! `.env` file by the binary).

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

pub const DEFAULT_PRODUCTS_PATH: &str = "products.json";
pub const DEFAULT_IMAGE_BASE_DIR: &str = ".";
pub const DEFAULT_LANGUAGE: &str = "fa";
pub const DEFAULT_LOCALES_DIR: &str = "./locales";

/// Bot configuration
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Telegram bot token
    pub bot_token: String,
    /// Catalog source file
    pub products_path: PathBuf,
    /// Base directory for relative local image references
    pub image_base_dir: PathBuf,
    /// Language of user-facing messages
    pub language: String,
    /// Directory holding `<lang>/main.ftl` resources
    pub locales_dir: PathBuf,
}

impl BotConfig {
    /// Build the configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bot_token = get("TELEGRAM_BOT_TOKEN").context("TELEGRAM_BOT_TOKEN must be set")?;

        Ok(Self {
            bot_token,
            products_path: get("PRODUCTS_JSON")
                .unwrap_or_else(|| DEFAULT_PRODUCTS_PATH.to_string())
                .into(),
            image_base_dir: get("IMAGE_BASE_DIR")
                .unwrap_or_else(|| DEFAULT_IMAGE_BASE_DIR.to_string())
                .into(),
            language: get("BOT_LANGUAGE").unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            locales_dir: get("LOCALES_DIR")
                .unwrap_or_else(|| DEFAULT_LOCALES_DIR.to_string())
                .into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_applied() {
        let config = BotConfig::from_lookup(lookup(&[("TELEGRAM_BOT_TOKEN", "123:abc")])).unwrap();
        assert_eq!(config.bot_token, "123:abc");
        assert_eq!(config.products_path, PathBuf::from(DEFAULT_PRODUCTS_PATH));
        assert_eq!(config.image_base_dir, PathBuf::from(DEFAULT_IMAGE_BASE_DIR));
        assert_eq!(config.language, "fa");
    }

    #[test]
    fn test_missing_token_is_error() {
        assert!(BotConfig::from_lookup(lookup(&[])).is_err());
        assert!(BotConfig::from_lookup(lookup(&[("TELEGRAM_BOT_TOKEN", "  ")])).is_err());
    }

    #[test]
    fn test_overrides() {
        let config = BotConfig::from_lookup(lookup(&[
            ("TELEGRAM_BOT_TOKEN", "t"),
            ("PRODUCTS_JSON", "/data/catalog.json"),
            ("IMAGE_BASE_DIR", "/data/images"),
            ("BOT_LANGUAGE", "en"),
        ]))
        .unwrap();
        assert_eq!(config.products_path, PathBuf::from("/data/catalog.json"));
        assert_eq!(config.image_base_dir, PathBuf::from("/data/images"));
        assert_eq!(config.language, "en");
    }
}
