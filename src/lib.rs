//! # Catalog Telegram Bot
//!
//! A Telegram bot that lets users browse a product catalog through a
//! two-level inline menu (brand, then product) and replies with the
//! product photo and caption.

pub mod bot;
pub mod catalog;
pub mod catalog_errors;
pub mod config;
pub mod localization;
pub mod path_resolver;
