//! # Localization Tests
//!
//! This module contains unit tests for the localization functionality,
//! testing message retrieval and formatting with various edge cases.

use catalog_bot::localization::LocalizationManager;
use std::collections::HashMap;
use std::path::Path;

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_localization() -> LocalizationManager {
        let locales = Path::new(env!("CARGO_MANIFEST_DIR")).join("locales");
        LocalizationManager::new(&locales).expect("Failed to create localization manager")
    }

    #[test]
    fn test_get_message_existing_key() {
        let manager = setup_localization();

        let message = manager.get_message_in_language("help-text", "en", None);
        assert!(message.contains("/refresh"));
    }

    #[test]
    fn test_persian_messages_loaded() {
        let manager = setup_localization();

        assert!(manager.has_language("fa"));
        let message = manager.get_message_in_language("back-to-brands", "fa", None);
        assert!(message.contains("بازگشت"));
    }

    #[test]
    fn test_get_message_nonexistent_key() {
        let manager = setup_localization();

        let message = manager.get_message_in_language("nonexistent-key", "en", None);
        assert!(message.starts_with("Missing translation:"));
    }

    #[test]
    fn test_get_message_unsupported_language() {
        let manager = setup_localization();

        let message = manager.get_message_in_language("back-to-brands", "unsupported", None);
        // Should fall back to English
        assert_eq!(message, "⬅️ Back to brands");
    }

    #[test]
    fn test_get_message_with_args() {
        let manager = setup_localization();

        let mut args = HashMap::new();
        args.insert("path", "images/rocket.png");

        let message = manager.get_message_in_language("image-not-found", "en", Some(&args));
        assert_eq!(message, "Image not found: images/rocket.png");
    }

    #[test]
    fn test_get_message_with_slice_args() {
        let manager = setup_localization();

        let message = manager.get_message_with_args("brand-selected", "fa", &[("brand", "Acme")]);
        assert!(message.contains("Acme"));
        // No bidi isolation marks around arguments
        assert!(!message.contains('\u{2068}'));
    }

    #[test]
    fn test_missing_locales_dir_is_error() {
        assert!(LocalizationManager::new(Path::new("/definitely/not/here")).is_err());
    }
}
