//! Structural JWT parsing.
//!
//! Splits a compact token into its three segments, base64url-decodes the
//! header and payload, and parses each as a JSON object. The signature is
//! never checked here; see [`crate::core::validator`] for that.

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Serialize;
use serde_json::Value;

use crate::error::JwtCliError;

/// The decoded parts of a JWT.
///
/// Only constructed once every segment has parsed, so a value of this
/// type is always complete. Implements a custom `Debug` that redacts
/// `payload` and `signature` to prevent accidental leakage of claim data.
pub struct DecodedToken {
    /// The parsed JWT header (typically contains `alg` and `typ`).
    pub header: Value,
    /// The parsed JWT payload (claims).
    pub payload: Value,
    /// `header "." payload` exactly as they appeared in the token.
    pub signing_input: String,
    /// The raw base64url-encoded signature segment.
    pub signature: String,
}

/// Custom `Debug` that redacts payload and signature to prevent
/// accidental leakage through debug formatting or error chains.
impl fmt::Debug for DecodedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodedToken")
            .field("header", &self.header)
            .field("payload", &"[REDACTED]")
            .field("signing_input", &"[REDACTED]")
            .field("signature", &"[REDACTED]")
            .finish()
    }
}

/// The two-key view printed by `decode` and `validate`.
///
/// Field order is the output order: `header` first, then `payload`.
#[derive(Debug, Serialize)]
pub struct TokenContents<'a> {
    /// The token header.
    pub header: &'a Value,
    /// The token claims.
    pub payload: &'a Value,
}

impl DecodedToken {
    /// Borrow the header and payload as the printable wrapper.
    pub fn contents(&self) -> TokenContents<'_> {
        TokenContents {
            header: &self.header,
            payload: &self.payload,
        }
    }

    /// The `alg` header value, if present and a string.
    pub fn algorithm_name(&self) -> Option<&str> {
        self.header.get("alg").and_then(Value::as_str)
    }
}

/// Decode a raw JWT string into its constituent parts.
///
/// # Errors
///
/// Returns [`JwtCliError::MalformedToken`] if the token doesn't have
/// exactly three parts, if base64url decoding fails, or if the header or
/// payload is not a JSON object.
pub fn decode_token(token: &str) -> Result<DecodedToken, JwtCliError> {
    let parts: Vec<&str> = token.split('.').collect();
    let [header_b64, payload_b64, signature] = parts.as_slice() else {
        return Err(JwtCliError::malformed(format!(
            "expected 'header.payload.signature' structure, found {} segment(s)",
            parts.len()
        )));
    };

    tracing::debug!(
        header_len = header_b64.len(),
        payload_len = payload_b64.len(),
        signature_len = signature.len(),
        "split token into segments"
    );

    let header = decode_segment(header_b64, "header")?;
    let payload = decode_segment(payload_b64, "payload")?;

    Ok(DecodedToken {
        header,
        payload,
        signing_input: format!("{header_b64}.{payload_b64}"),
        signature: (*signature).to_string(),
    })
}

/// Base64url-decode a segment and parse it as a JSON object.
fn decode_segment(encoded: &str, segment_name: &str) -> Result<Value, JwtCliError> {
    let bytes = URL_SAFE_NO_PAD.decode(encoded).map_err(|_| {
        JwtCliError::malformed(format!("{segment_name} is not valid base64url"))
    })?;

    let value: Value = serde_json::from_slice(&bytes).map_err(|e| {
        JwtCliError::malformed(format!("{segment_name} is not valid JSON: {e}"))
    })?;

    if !value.is_object() {
        return Err(JwtCliError::malformed(format!(
            "{segment_name} is not a JSON object"
        )));
    }
    Ok(value)
}
