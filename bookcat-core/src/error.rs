//! Error types for Bookcat Core

use thiserror::Error;

/// Result type alias using CatalogError
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Top-level error type for all catalog operations
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Form error: {0}")]
    Form(#[from] FormError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("No book at index {0}")]
    NoSuchBook(usize),

    #[error("No book is selected")]
    NoSelection,

    #[error("Close the form first")]
    FormOpen,
}

/// Errors raised by the modal form
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Unknown form field: {0}")]
    UnknownField(String),

    #[error("The form is not open")]
    NotOpen,

    #[error("Edit target {0} no longer exists")]
    StaleEditTarget(usize),
}

/// Errors that occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Backend error: {0}")]
    BackendError(String),
}
