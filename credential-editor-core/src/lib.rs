//! Credential Editor Core Library
//!
//! Validation and save-gating logic behind an "edit saved credential" form:
//! - per-field dirty/valid classification (`FieldState`)
//! - the duplicate-username check against other credentials at the same origin (`DuplicateIndex`)
//! - the pure recomputation rules (`editor::engine`) and the session snapshot (`EditSession`)
//! - a service that wires a session to its storage collaborators (`CredentialEditService`)
//!
//! Storage is abstracted through traits; this crate contains no storage implementation.

pub mod editor;
pub mod error;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use editor::EditSession;
pub use error::{CoreError, CoreResult};
pub use services::{CredentialEditService, ServiceContext};
pub use traits::{CredentialRepository, DuplicateLookup};
