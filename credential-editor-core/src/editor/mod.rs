//! Field validation and save gate for one credential edit
//!
//! [`EditSession`] is an immutable snapshot. Every entry point consumes the
//! current snapshot and returns the next one, computed by the pure functions
//! in [`engine`]. The hosting layer diffs old and new snapshots to update its
//! presentation.

pub mod engine;
mod session;

pub use session::EditSession;
