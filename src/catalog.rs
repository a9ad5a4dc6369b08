//! # Catalog Module
//!
//! Loads the product catalog from its JSON source, normalizes records and
//! keeps the current catalog as an immutable snapshot that is swapped
//! wholesale on reload.

use arc_swap::ArcSwap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::catalog_errors::CatalogError;

/// A single catalog entry, normalized and validated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub brand: String,
    pub name: String,
    /// Remote URL or local path of the product photo
    pub image: String,
    pub caption: String,
}

impl Product {
    /// Whether the image reference should be fetched remotely by the gateway
    pub fn has_remote_image(&self) -> bool {
        is_remote_reference(&self.image)
    }
}

/// Entry as it appears in the source file, every field optional
#[derive(Debug, Default, Deserialize)]
struct RawProduct {
    #[serde(default)]
    brand: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    caption: Option<String>,
}

impl RawProduct {
    fn normalize(self) -> Option<Product> {
        let brand = trimmed(self.brand);
        let name = trimmed(self.name);
        let image = trimmed(self.image);
        if brand.is_empty() || name.is_empty() || image.is_empty() {
            return None;
        }

        let caption = match trimmed(self.caption) {
            c if c.is_empty() => name.clone(),
            c => c,
        };

        Some(Product {
            brand,
            name,
            image,
            caption,
        })
    }
}

fn trimmed(field: Option<String>) -> String {
    field.map(|s| s.trim().to_string()).unwrap_or_default()
}

/// Returns true for `http://` and `https://` references (case-insensitive)
pub fn is_remote_reference(reference: &str) -> bool {
    let lower = reference.trim_start().to_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Parse catalog records from JSON text.
///
/// Entries missing `brand`, `name` or `image` (after trimming) are dropped,
/// as are entries whose fields are not strings. Source order is preserved.
pub fn parse_products(content: &str) -> Result<Vec<Product>, CatalogError> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    let entries = match value {
        serde_json::Value::Array(entries) => entries,
        other => {
            return Err(CatalogError::Structure(format!(
                "expected a list of records, found {}",
                json_kind(&other)
            )))
        }
    };

    let total = entries.len();
    let mut products = Vec::with_capacity(total);
    for (index, entry) in entries.into_iter().enumerate() {
        let raw = match serde_json::from_value::<RawProduct>(entry) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(index, error = %e, "Skipping malformed catalog entry");
                continue;
            }
        };
        match raw.normalize() {
            Some(product) => products.push(product),
            None => debug!(index, "Skipping incomplete catalog entry"),
        }
    }

    if products.len() < total {
        warn!(
            kept = products.len(),
            dropped = total - products.len(),
            "Some catalog entries were dropped"
        );
    }

    Ok(products)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "a list",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Read and parse the catalog source file
pub fn try_load_products(path: &Path) -> Result<Vec<Product>, CatalogError> {
    let content = fs::read_to_string(path)?;
    parse_products(&content)
}

/// Load the catalog, degrading to an empty list on any failure
pub fn load_products(path: &Path) -> Vec<Product> {
    match try_load_products(path) {
        Ok(products) => {
            info!(path = %path.display(), products = products.len(), "Catalog loaded");
            products
        }
        Err(e) => {
            error!(path = %path.display(), error = %e, "Failed to load products");
            Vec::new()
        }
    }
}

/// Immutable view over a loaded set of products
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct brands in order of first appearance
    pub fn brands(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.products
            .iter()
            .map(|p| p.brand.as_str())
            .filter(|brand| seen.insert(*brand))
            .collect()
    }

    pub fn has_brand(&self, brand: &str) -> bool {
        self.products.iter().any(|p| p.brand == brand)
    }

    /// Products of one brand, in source order
    pub fn products_for_brand(&self, brand: &str) -> Vec<&Product> {
        self.products.iter().filter(|p| p.brand == brand).collect()
    }

    /// Brand to products mapping, both levels ordered by first appearance
    pub fn group_by_brand(&self) -> Vec<(&str, Vec<&Product>)> {
        self.brands()
            .into_iter()
            .map(|brand| (brand, self.products_for_brand(brand)))
            .collect()
    }

    /// Exact, case-sensitive lookup on both brand and name
    pub fn find(&self, brand: &str, name: &str) -> Option<&Product> {
        self.products
            .iter()
            .find(|p| p.brand == brand && p.name == name)
    }

    /// Case-insensitive lookup by product name across all brands
    pub fn find_by_name(&self, text: &str) -> Option<&Product> {
        let needle = text.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.products
            .iter()
            .find(|p| p.name.to_lowercase() == needle)
    }
}

/// Process-wide handle on the current catalog snapshot
#[derive(Debug)]
pub struct CatalogStore {
    source: PathBuf,
    snapshot: ArcSwap<Catalog>,
}

impl CatalogStore {
    /// Create a store and perform the initial load from `source`
    pub fn load(source: impl Into<PathBuf>) -> Self {
        let source = source.into();
        let catalog = Catalog::new(load_products(&source));
        Self {
            source,
            snapshot: ArcSwap::from_pointee(catalog),
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Current snapshot; stays valid even if a reload happens meanwhile
    pub fn snapshot(&self) -> Arc<Catalog> {
        self.snapshot.load_full()
    }

    /// Re-read the source and swap in the new snapshot
    pub fn reload(&self) -> Arc<Catalog> {
        let catalog = Arc::new(Catalog::new(load_products(&self.source)));
        self.snapshot.store(Arc::clone(&catalog));
        info!(products = catalog.len(), "Catalog snapshot replaced");
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_reference_detection() {
        assert!(is_remote_reference("http://example.com/a.jpg"));
        assert!(is_remote_reference("HTTPS://example.com/a.jpg"));
        assert!(!is_remote_reference("images/a.jpg"));
        assert!(!is_remote_reference("ftp://example.com/a.jpg"));
    }

    #[test]
    fn test_caption_defaults_to_name() {
        let products = parse_products(
            r#"[{"brand": "A", "name": " X ", "image": "x.png", "caption": "   "},
                {"brand": "A", "name": "Y", "image": "y.png"}]"#,
        )
        .unwrap();
        assert_eq!(products[0].caption, "X");
        assert_eq!(products[1].caption, "Y");
    }

    #[test]
    fn test_non_list_source_is_structure_error() {
        let result = parse_products(r#"{"brand": "A"}"#);
        assert!(matches!(result, Err(CatalogError::Structure(_))));
    }

    #[test]
    fn test_find_by_name_ignores_surrounding_whitespace() {
        let catalog = Catalog::new(
            parse_products(r#"[{"brand": "A", "name": "Widget", "image": "w.png"}]"#).unwrap(),
        );
        assert!(catalog.find_by_name("  widget ").is_some());
        assert!(catalog.find_by_name("   ").is_none());
    }
}
