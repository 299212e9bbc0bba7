//! Error types for procura.
//!
//! All errors are strongly typed using thiserror. Registry failures
//! (`NotFound`, `Write`, ...) live with the registry abstraction in
//! [`crate::registry`]; this module holds input validation and the
//! top-level wrapper.

use thiserror::Error;

use crate::registry::RegistryError;

/// Validation errors raised while constructing keys, records, and requests.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Record key cannot be empty")]
    EmptyKey,

    #[error("Field name cannot be empty")]
    EmptyFieldName,

    #[error("Document type cannot be empty")]
    EmptyDocType,

    #[error("Required field '{field}' is missing")]
    MissingField { field: String },
}

/// Top-level error type for procura.
///
/// Registry errors propagate through unchanged: a caller can still match
/// on [`RegistryError::NotFound`] or [`RegistryError::Write`] after the
/// wrap, and the discriminant helpers below cover the common checks.
#[derive(Debug, Error)]
pub enum ProcuraError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl ProcuraError {
    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns true if this is a validation error.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if this is a registry error.
    #[must_use]
    pub const fn is_registry(&self) -> bool {
        matches!(self, Self::Registry(_))
    }

    /// Returns true if the underlying failure was a lookup miss.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Registry(RegistryError::NotFound(_)))
    }

    /// Returns true if the underlying failure was a rejected write-back.
    #[must_use]
    pub const fn is_write_rejection(&self) -> bool {
        matches!(self, Self::Registry(RegistryError::Write { .. }))
    }
}

/// Result type alias for procura operations.
pub type ProcuraResult<T> = Result<T, ProcuraError>;
