//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
///
/// Field validation outcomes are not errors; they live on
/// [`FieldState`](crate::types::FieldState) as a [`FieldErrorKind`](crate::types::FieldErrorKind).
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// `commit()` was called while the save gate was closed
    #[error("Cannot commit: the edit is unchanged or invalid")]
    GateClosed,

    /// Credential not found
    #[error("Credential not found: {0}")]
    CredentialNotFound(String),

    /// The storage layer rejected the edit because the username is already taken at this origin
    #[error("A credential for {username} already exists at {origin}")]
    DuplicateCredential { origin: String, username: String },

    /// Duplicate lookup failed
    #[error("Duplicate lookup error: {0}")]
    LookupError(String),

    /// Storage layer error
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl CoreError {
    /// Whether it is expected behavior (user input, contract misuse, missing record), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::GateClosed
            | Self::CredentialNotFound(_)
            | Self::DuplicateCredential { .. }
            | Self::ValidationError(_) => true,
            Self::LookupError(_) | Self::StorageError(_) => false,
        }
    }

    /// Log this error at the level chosen by [`is_expected`](Self::is_expected).
    pub fn log(&self, context: &str) {
        if self.is_expected() {
            log::warn!("{context}: {self}");
        } else {
            log::error!("{context}: {self}");
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
