//! Utility modules.

/// Log sanitization utilities to prevent oversized or sensitive log lines.
pub mod log_sanitizer;

/// Serde helpers for loosely typed portal fields.
pub mod serde_helpers;
