use anyhow::{bail, Result};
use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource, FluentValue};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};
use unic_langid::LanguageIdentifier;

/// Languages shipped under `locales/`
pub const SUPPORTED_LANGUAGES: &[&str] = &["en", "fa"];

/// Language used when a message is missing in the requested one
pub const FALLBACK_LANGUAGE: &str = "en";

/// Localization manager for the catalog bot
pub struct LocalizationManager {
    bundles: HashMap<String, Arc<FluentBundle<FluentResource>>>,
}

impl std::fmt::Debug for LocalizationManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalizationManager")
            .field("languages", &self.bundles.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl LocalizationManager {
    /// Create a localization manager from `<locales_dir>/<lang>/main.ftl` files
    pub fn new(locales_dir: &Path) -> Result<Self> {
        let mut bundles = HashMap::new();

        for lang in SUPPORTED_LANGUAGES {
            let locale: LanguageIdentifier = lang.parse()?;
            if let Some(bundle) = Self::create_bundle(locales_dir, &locale) {
                bundles.insert(lang.to_string(), Arc::new(bundle));
            }
        }

        if !bundles.contains_key(FALLBACK_LANGUAGE) {
            bail!(
                "no '{}' locale resources found in {}",
                FALLBACK_LANGUAGE,
                locales_dir.display()
            );
        }

        Ok(Self { bundles })
    }

    /// Create a fluent bundle for a specific locale
    fn create_bundle(
        locales_dir: &Path,
        locale: &LanguageIdentifier,
    ) -> Option<FluentBundle<FluentResource>> {
        let resource_path: PathBuf = locales_dir.join(locale.to_string()).join("main.ftl");
        let content = match fs::read_to_string(&resource_path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %resource_path.display(), error = %e, "Locale resource not loaded");
                return None;
            }
        };

        let resource = match FluentResource::try_new(content) {
            Ok(resource) => resource,
            Err((resource, errors)) => {
                warn!(path = %resource_path.display(), errors = errors.len(), "Locale resource has syntax errors");
                resource
            }
        };

        let mut bundle = FluentBundle::new_concurrent(vec![locale.clone()]);
        // Telegram renders the bidi isolation marks literally
        bundle.set_use_isolating(false);
        if let Err(errors) = bundle.add_resource(resource) {
            warn!(locale = %locale, errors = errors.len(), "Duplicate messages in locale resource");
        }

        debug!(locale = %locale, "Locale resource loaded");
        Some(bundle)
    }

    pub fn has_language(&self, language: &str) -> bool {
        self.bundles.contains_key(language)
    }

    /// Get a localized message in a specific language, falling back to English
    pub fn get_message_in_language(
        &self,
        key: &str,
        language: &str,
        args: Option<&HashMap<&str, &str>>,
    ) -> String {
        let bundle = match self
            .bundles
            .get(language)
            .filter(|bundle| bundle.has_message(key))
            .or_else(|| self.bundles.get(FALLBACK_LANGUAGE))
        {
            Some(bundle) => bundle,
            None => return format!("Missing translation: {}", key),
        };

        let msg = match bundle.get_message(key) {
            Some(msg) => msg,
            None => return format!("Missing translation: {}", key),
        };

        let pattern = match msg.value() {
            Some(pattern) => pattern,
            None => return format!("Missing value for key: {}", key),
        };

        let fluent_args = args.map(|args| {
            let mut fluent_args = FluentArgs::new();
            for (k, v) in args {
                fluent_args.set(*k, FluentValue::from(*v));
            }
            fluent_args
        });

        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, fluent_args.as_ref(), &mut errors);
        if !errors.is_empty() {
            debug!(key, errors = errors.len(), "Message formatted with errors");
        }

        value.into_owned()
    }

    /// Get a localized message with simple string arguments
    pub fn get_message_with_args(&self, key: &str, language: &str, args: &[(&str, &str)]) -> String {
        let args_map: HashMap<&str, &str> = args.iter().cloned().collect();
        self.get_message_in_language(key, language, Some(&args_map))
    }
}
