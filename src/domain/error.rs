//! Error types for the JetCatalog plugin.
//!
//! This module defines the centralized error type [`CatalogError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! None of these errors reach the user directly. Failures on the worker side are
//! flattened into a message string and surface as `LoadState::Error`.

use thiserror::Error;

/// The main error type for JetCatalog plugin operations.
///
/// # Examples
///
/// ```
/// use jetcatalog::domain::CatalogError;
///
/// fn validate_config() -> Result<(), CatalogError> {
///     Err(CatalogError::Config("catalog_file is empty".to_string()))
/// }
///
/// assert!(validate_config().is_err());
/// ```
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog could not be read or is malformed.
    ///
    /// Covers JSON parse failures, unsupported format versions and duplicate ids.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with background worker failed.
    ///
    /// Occurs when the worker is asked to serve a request before its catalog
    /// has been initialized.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for JetCatalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert_with_question_mark() {
        fn open_missing() -> Result<String> {
            Ok(std::fs::read_to_string("/definitely/not/here.json")?)
        }

        let err = open_missing().unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
        assert!(err.to_string().starts_with("IO error:"));
    }

    #[test]
    fn display_includes_detail() {
        let err = CatalogError::Catalog("duplicate id 3".to_string());
        assert_eq!(err.to_string(), "Catalog error: duplicate id 3");
    }
}
