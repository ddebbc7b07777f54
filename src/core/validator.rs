//! JWT signature validation logic.
//!
//! Parses the token structurally, gates the header's `alg` through the
//! HMAC allow-list, then recomputes and compares the signature with
//! `jsonwebtoken::crypto::verify`, which compares in constant time.
//! Claim semantics (`exp`, `nbf`, `aud`, ...) are not evaluated.

use jsonwebtoken::DecodingKey;

use crate::core::algorithm::SigningAlgorithm;
use crate::core::decoder::{DecodedToken, decode_token};
use crate::core::sanitize_for_display;
use crate::error::JwtCliError;

/// Validate a JWT's signature with a shared secret.
///
/// Returns the decoded token only when the signature matches.
///
/// # Errors
///
/// - [`JwtCliError::MalformedToken`] if the token cannot be parsed.
/// - [`JwtCliError::UnknownAlgorithm`] if the header's `alg` is missing
///   or outside the allow-list. No signature is computed in that case.
/// - [`JwtCliError::SignatureMismatch`] if the signature does not match.
pub fn validate_token(token: &str, secret: &[u8]) -> Result<DecodedToken, JwtCliError> {
    let decoded = decode_token(token)?;
    let algorithm = header_algorithm(&decoded)?;

    let key = DecodingKey::from_secret(secret);
    let valid = jsonwebtoken::crypto::verify(
        &decoded.signature,
        decoded.signing_input.as_bytes(),
        &key,
        algorithm.into(),
    )
    .map_err(|e| JwtCliError::malformed(format!("signature could not be checked: {e}")))?;

    tracing::debug!(%algorithm, valid, "checked token signature");

    if !valid {
        return Err(JwtCliError::SignatureMismatch);
    }
    Ok(decoded)
}

/// Resolve the header's `alg` against the allow-list.
///
/// A missing or non-string `alg` is reported as the empty name.
fn header_algorithm(decoded: &DecodedToken) -> Result<SigningAlgorithm, JwtCliError> {
    let name = decoded.algorithm_name().unwrap_or_default();
    SigningAlgorithm::resolve(name).ok_or_else(|| {
        tracing::debug!("header names an algorithm outside the allow-list");
        JwtCliError::UnknownAlgorithm {
            algorithm: sanitize_for_display(name),
        }
    })
}
