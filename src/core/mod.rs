//! Core business logic for JWT operations.
//!
//! This module contains the domain logic separated from CLI concerns.
//! All types and functions here are testable without the CLI layer.
//! Signature computation and comparison are delegated to `jsonwebtoken`.

pub mod algorithm;
pub mod decoder;
pub mod encoder;
pub mod input;
pub mod validator;

/// Longest user-supplied value echoed back in an error message, in chars.
const MAX_DISPLAY_CHARS: usize = 64;

/// Make a user-supplied value safe to echo in an error message.
///
/// Replaces control characters (including ANSI escape sequences) with
/// the Unicode replacement character to prevent terminal injection,
/// then truncates overly long values.
pub(crate) fn sanitize_for_display(value: &str) -> String {
    let mut clean: String = value
        .chars()
        .take(MAX_DISPLAY_CHARS)
        .map(|c| if c.is_control() { '\u{FFFD}' } else { c })
        .collect();
    if value.chars().count() > MAX_DISPLAY_CHARS {
        clean.push_str("...(truncated)");
    }
    clean
}
