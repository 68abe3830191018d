//! Registry-specific error types

use thiserror::Error;

/// Errors raised by registry lookups and tree bookkeeping
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// No registered directory matched a lookup or name search
    #[error("No directory matching '{0}' can be found")]
    NotFound(String),

    /// Tag inheritance was requested but the parent path is not registered
    #[error(
        "The parent of '{0}' is not registered. Add the parent directory separately and try again"
    )]
    ParentNotRegistered(String),
}

/// Type alias for cleaner function signatures
pub type Result<T> = std::result::Result<T, RegistryError>;
