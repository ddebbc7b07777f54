//! Pretty JSON rendering for command output.
//!
//! Output uses 4-space indentation and keeps keys in the order the value
//! serializes them. Serialization failures are reported as errors rather
//! than silently producing no output.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::JwtCliError;

const INDENT: &[u8] = b"    ";

/// Render a value as 4-space indented JSON, without a trailing newline.
///
/// # Errors
///
/// Returns [`JwtCliError::Render`] if the value cannot be serialized
/// (e.g. a map with non-string keys).
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JwtCliError> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value
        .serialize(&mut serializer)
        .map_err(|e| JwtCliError::Render {
            reason: e.to_string(),
        })?;

    String::from_utf8(buf).map_err(|e| JwtCliError::Render {
        reason: e.to_string(),
    })
}
