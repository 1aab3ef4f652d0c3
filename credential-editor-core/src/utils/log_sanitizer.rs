//! Log sanitization utilities
//!
//! Keeps passwords out of logs and `Debug` output, and bounds the length of
//! user-typed values that do get logged.

/// Maximum number of characters of a user-typed value included in log output.
const TRUNCATE_LIMIT: usize = 64;

/// Placeholder printed instead of a secret.
pub const SECRET_MASK: &str = "********";

/// Render a secret for logs: never the value, only whether it is empty.
pub fn mask_secret(secret: &str) -> &'static str {
    if secret.is_empty() {
        "<empty>"
    } else {
        SECRET_MASK
    }
}

/// Truncate a user-typed value for safe logging.
///
/// Counts characters, not bytes, so multi-byte input is never split.
pub fn truncate_for_log(s: &str) -> String {
    match s.char_indices().nth(TRUNCATE_LIMIT) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}... [truncated, total {} bytes]", &s[..cut], s.len()),
    }
}
