//! # Path Resolver Tests
//!
//! Exact matches, placeholder fallback and misses against real directories.

use catalog_bot::path_resolver::PathResolver;
use std::fs;
use tempfile::TempDir;

fn touch(dir: &TempDir, relative: &str) -> std::path::PathBuf {
    let path = dir.path().join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, b"\x89PNG\r\n\x1a\n").unwrap();
    path
}

#[test]
fn test_exact_file_is_returned_unchanged() {
    let dir = TempDir::new().unwrap();
    let exact = touch(&dir, "acme/rocket.png");
    let resolver = PathResolver::new(dir.path());

    assert_eq!(resolver.resolve(exact.to_str().unwrap()), Some(exact.clone()));
    assert_eq!(resolver.resolve("acme/rocket.png"), Some(exact));
}

#[test]
fn test_falls_back_to_placeholder_sibling() {
    let dir = TempDir::new().unwrap();
    let placeholder = touch(&dir, "acme/Untitled design.png");
    let resolver = PathResolver::new(dir.path());

    assert_eq!(resolver.resolve("acme/rocket.png"), Some(placeholder));
}

#[test]
fn test_placeholder_extension_case_variants() {
    let dir = TempDir::new().unwrap();
    let placeholder = touch(&dir, "acme/Untitled design.JPG");
    let resolver = PathResolver::new(dir.path());

    assert_eq!(resolver.resolve("acme/rocket.jpg"), Some(placeholder));
}

#[test]
fn test_prefix_match_picks_first_sorted() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "acme/Untitled design (3).png");
    let first = touch(&dir, "acme/Untitled design (1).png");
    touch(&dir, "acme/other.png");
    let resolver = PathResolver::new(dir.path());

    assert_eq!(resolver.resolve("acme/rocket.png"), Some(first));
}

#[test]
fn test_nothing_matches_returns_none_with_attempted_path() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "acme/other.png");
    let resolver = PathResolver::new(dir.path());

    assert_eq!(resolver.resolve("acme/rocket.png"), None);
    let unresolved = resolver.try_resolve("acme/rocket.png").unwrap_err();
    assert_eq!(unresolved.attempted, dir.path().join("acme/rocket.png"));
}

#[test]
fn test_missing_parent_directory_returns_none() {
    let dir = TempDir::new().unwrap();
    let resolver = PathResolver::new(dir.path());
    assert_eq!(resolver.resolve("nowhere/rocket.png"), None);
}

#[test]
fn test_backslashes_and_lookalike_letters_are_normalized() {
    let dir = TempDir::new().unwrap();
    // Stored on disk with the Persian yeh
    let exact = touch(&dir, "brand/چای.png");
    let resolver = PathResolver::new(dir.path());

    // Referenced with a backslash and the Arabic yeh
    assert_eq!(resolver.resolve("brand\\چاي.png"), Some(exact));
}
