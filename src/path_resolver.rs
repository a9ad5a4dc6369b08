//! # Path Resolver Module
//!
//! Maps a local image reference from the catalog to an existing file.
//! Catalog files were often authored with an image-editor export name
//! instead of the product name, so when the exact file is missing the
//! resolver looks for that placeholder name next to it.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use unicode_normalization::UnicodeNormalization;

/// Base filename the fallback search looks for
pub const PLACEHOLDER_STEM: &str = "Untitled design";

/// Extensions probed for the placeholder, in priority order
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "PNG", "jpg", "JPG", "jpeg", "JPEG", "webp", "WEBP",
];

/// Arabic letters replaced by their Persian forms
const LOOKALIKE_LETTERS: &[(char, char)] = &[
    ('\u{064A}', '\u{06CC}'), // ARABIC YEH -> FARSI YEH
    ('\u{0643}', '\u{06A9}'), // ARABIC KAF -> KEHEH
];

/// Outcome of a failed resolution, carrying the path that was tried
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unresolved {
    pub attempted: PathBuf,
}

/// Resolves local image references relative to a fixed base directory
#[derive(Debug, Clone)]
pub struct PathResolver {
    base_dir: PathBuf,
}

impl PathResolver {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Path a reference maps to before any existence check
    pub fn candidate_path(&self, reference: &str) -> PathBuf {
        let path = PathBuf::from(normalize_reference(reference));
        if path.is_absolute() {
            path
        } else {
            self.base_dir.join(path)
        }
    }

    /// Find the file for `reference`, or `None` if nothing matches
    pub fn resolve(&self, reference: &str) -> Option<PathBuf> {
        self.try_resolve(reference).ok()
    }

    /// Like [`PathResolver::resolve`] but reports the attempted path on failure
    pub fn try_resolve(&self, reference: &str) -> Result<PathBuf, Unresolved> {
        let candidate = self.candidate_path(reference);
        if candidate.is_file() {
            return Ok(candidate);
        }

        let parent = candidate
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.base_dir.clone());

        match find_placeholder(&parent) {
            Some(found) => {
                debug!(
                    reference,
                    resolved = %found.display(),
                    "Exact image missing, using placeholder sibling"
                );
                Ok(found)
            }
            None => Err(Unresolved {
                attempted: candidate,
            }),
        }
    }
}

/// Canonicalize look-alike letters, compose to NFC and use forward slashes
pub fn normalize_reference(reference: &str) -> String {
    let unified: String = reference
        .trim()
        .chars()
        .map(|c| {
            LOOKALIKE_LETTERS
                .iter()
                .find(|(from, _)| *from == c)
                .map(|(_, to)| *to)
                .unwrap_or(c)
        })
        .collect();

    unified.nfc().collect::<String>().replace('\\', "/")
}

fn find_placeholder(dir: &Path) -> Option<PathBuf> {
    for ext in IMAGE_EXTENSIONS {
        let candidate = dir.join(format!("{PLACEHOLDER_STEM}.{ext}"));
        if candidate.is_file() {
            return Some(candidate);
        }
    }

    let entries = fs::read_dir(dir).ok()?;
    let mut matches: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.starts_with(PLACEHOLDER_STEM))
        })
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    matches.sort();
    matches.into_iter().next()
}
