//! # Catalog Error Types Module
//!
//! This module defines the error types produced while reading and parsing
//! the product catalog source file.

/// Custom error types for catalog loading
#[derive(Debug, Clone)]
pub enum CatalogError {
    /// The source file could not be read
    Read(String),
    /// The source file is not valid JSON
    Parse(String),
    /// The top-level JSON value is not a list of records
    Structure(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Read(msg) => write!(f, "Read error: {msg}"),
            CatalogError::Parse(msg) => write!(f, "Parse error: {msg}"),
            CatalogError::Structure(msg) => write!(f, "Structure error: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::Read(err.to_string())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CatalogError::Structure("expected a list".to_string());
        assert_eq!(err.to_string(), "Structure error: expected a list");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: CatalogError = io.into();
        assert!(matches!(err, CatalogError::Read(_)));
    }
}
