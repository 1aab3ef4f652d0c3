//! Editable field state

use serde::{Deserialize, Serialize};

/// Which of the two editable fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Username,
    Password,
}

/// Why a field is invalid. Advisory only, rendered inline next to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldErrorKind {
    /// Another credential at the same origin already uses this username
    DuplicateUsername,
    /// The password was cleared
    EmptyPassword,
}

impl FieldErrorKind {
    /// Short description for inline display
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::DuplicateUsername => "A password for this username is already saved for this site",
            Self::EmptyPassword => "Password can't be empty",
        }
    }

    /// The field this error is attached to
    #[must_use]
    pub fn field(self) -> FieldKind {
        match self {
            Self::DuplicateUsername => FieldKind::Username,
            Self::EmptyPassword => FieldKind::Password,
        }
    }
}

/// Draft value of one editable field plus its classification.
///
/// Constructed only through [`pristine`](Self::pristine), [`changed`](Self::changed)
/// and [`invalid`](Self::invalid), so `valid` and `error` never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldState {
    value: String,
    dirty: bool,
    valid: bool,
    error: Option<FieldErrorKind>,
}

impl FieldState {
    /// Value equal to the stored one
    #[must_use]
    pub fn pristine(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            dirty: false,
            valid: true,
            error: None,
        }
    }

    /// Value differs from the stored one and passes its rule
    #[must_use]
    pub fn changed(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            dirty: true,
            valid: true,
            error: None,
        }
    }

    /// Value differs from the stored one and fails its rule
    #[must_use]
    pub fn invalid(value: impl Into<String>, error: FieldErrorKind) -> Self {
        Self {
            value: value.into(),
            dirty: true,
            valid: false,
            error: Some(error),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn error(&self) -> Option<FieldErrorKind> {
        self.error
    }
}
