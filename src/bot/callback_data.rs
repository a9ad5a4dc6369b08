//! Callback data carried by inline keyboard buttons
//!
//! Wire format: `brand::<brand>`, `item::<brand>::<name>` or `back::brands`.
//! Brand names must not contain `::`; product names may, since the item
//! payload is split on the first delimiter only.

const DELIMITER: &str = "::";
const BRAND_PREFIX: &str = "brand::";
const ITEM_PREFIX: &str = "item::";
const BACK_TO_BRANDS: &str = "back::brands";

/// Telegram rejects callback data longer than this many bytes
pub const MAX_CALLBACK_DATA_BYTES: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackData {
    Brand(String),
    Item { brand: String, name: String },
    BackToBrands,
}

impl CallbackData {
    pub fn encode(&self) -> String {
        match self {
            CallbackData::Brand(brand) => format!("{BRAND_PREFIX}{brand}"),
            CallbackData::Item { brand, name } => format!("{ITEM_PREFIX}{brand}{DELIMITER}{name}"),
            CallbackData::BackToBrands => BACK_TO_BRANDS.to_string(),
        }
    }

    pub fn parse(data: &str) -> Option<Self> {
        if data == BACK_TO_BRANDS {
            return Some(CallbackData::BackToBrands);
        }
        if let Some(brand) = data.strip_prefix(BRAND_PREFIX) {
            return Some(CallbackData::Brand(brand.to_string()));
        }
        if let Some(rest) = data.strip_prefix(ITEM_PREFIX) {
            let (brand, name) = rest.split_once(DELIMITER)?;
            return Some(CallbackData::Item {
                brand: brand.to_string(),
                name: name.to_string(),
            });
        }
        None
    }
}
