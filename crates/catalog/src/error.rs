//! Error types for the catalog crate.
//!
//! Only loading an external catalog can fail. Everything that works on an
//! already built `Catalog` is total.

use thiserror::Error;

/// Errors that can occur while loading or validating a catalog
///
/// The `#[derive(Error)]` macro from thiserror implements
/// `std::error::Error` and `Display` from the `#[error(...)]` attributes.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog file could not be found
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the catalog file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The catalog document is not valid JSON or has the wrong shape
    #[error("Parse error: {reason}")]
    ParseError { reason: String },

    /// A product field had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Two products share the same identifier
    #[error("Duplicate product id: {id}")]
    DuplicateProduct { id: String },
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::ParseError {
            reason: err.to_string(),
        }
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
