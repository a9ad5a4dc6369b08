//! Bot module for handling Telegram interactions
//!
//! This module is split into several submodules:
//! - `message_handler`: Handles commands and free-text messages
//! - `callback_handler`: Handles inline keyboard callback queries
//! - `callback_data`: Encodes and parses button payloads
//! - `ui_builder`: Creates the brand and product keyboards
//! - `responder`: Decides the reply for each event, independent of Telegram
//! - `sender`: Delivers replies through the Bot API

pub mod callback_data;
pub mod callback_handler;
pub mod message_handler;
pub mod responder;
pub mod sender;
pub mod ui_builder;

// Re-export main handler functions for use in main.rs
pub use callback_handler::callback_handler;
pub use message_handler::message_handler;

pub use callback_data::CallbackData;
pub use responder::{Command, PhotoSource, Reply, Responder};
pub use ui_builder::{create_brand_keyboard, create_product_keyboard};
