//! UI Builder module for creating the brand and product keyboards

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};
use tracing::warn;

use crate::catalog::Catalog;

use super::callback_data::{CallbackData, MAX_CALLBACK_DATA_BYTES};

/// Buttons per keyboard row
pub const MENU_COLUMNS: usize = 2;

fn callback_button(label: &str, data: CallbackData) -> InlineKeyboardButton {
    let payload = data.encode();
    if payload.len() > MAX_CALLBACK_DATA_BYTES {
        warn!(
            payload_bytes = payload.len(),
            label, "Callback data exceeds Telegram limit, button may be rejected"
        );
    }
    InlineKeyboardButton::callback(label.to_string(), payload)
}

fn into_rows(buttons: Vec<InlineKeyboardButton>) -> Vec<Vec<InlineKeyboardButton>> {
    buttons
        .chunks(MENU_COLUMNS)
        .map(|row| row.to_vec())
        .collect()
}

/// One button per distinct brand, in catalog order
pub fn create_brand_keyboard(catalog: &Catalog) -> InlineKeyboardMarkup {
    let buttons = catalog
        .brands()
        .into_iter()
        .map(|brand| callback_button(brand, CallbackData::Brand(brand.to_string())))
        .collect();

    InlineKeyboardMarkup::new(into_rows(buttons))
}

/// One button per product of `brand`, followed by a full-width back button
pub fn create_product_keyboard(
    catalog: &Catalog,
    brand: &str,
    back_label: &str,
) -> InlineKeyboardMarkup {
    let buttons = catalog
        .products_for_brand(brand)
        .into_iter()
        .map(|product| {
            callback_button(
                &product.name,
                CallbackData::Item {
                    brand: brand.to_string(),
                    name: product.name.clone(),
                },
            )
        })
        .collect();

    let mut rows = into_rows(buttons);
    rows.push(vec![callback_button(back_label, CallbackData::BackToBrands)]);

    InlineKeyboardMarkup::new(rows)
}
