//! Utility modules

pub mod log_sanitizer;
