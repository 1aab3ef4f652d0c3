//! Type definition module

mod credential;
mod duplicate_index;
mod field_state;

pub use credential::{CommittedEdit, CredentialRecord};
pub use duplicate_index::{DuplicateIndex, DuplicateStatus};
pub use field_state::{FieldErrorKind, FieldKind, FieldState};
