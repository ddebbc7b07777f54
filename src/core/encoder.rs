//! JWT encoding and signing.
//!
//! Builds the `{"alg":...,"typ":"JWT"}` header, base64url-encodes header
//! and claims, and signs `header.payload` with `jsonwebtoken::crypto::sign`.
//! Object keys are serialized in sorted order, so identical claims,
//! algorithm and secret always produce the identical token.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use jsonwebtoken::EncodingKey;
use serde_json::{Value, json};

use crate::core::algorithm::SigningAlgorithm;
use crate::core::sanitize_for_display;
use crate::error::JwtCliError;

/// Fixed `typ` header value for every produced token.
const TOKEN_TYPE: &str = "JWT";

/// Encode and sign a claim set given as JSON text.
///
/// # Errors
///
/// - [`JwtCliError::ClaimsNotJson`] if `claims_json` is not a JSON object.
/// - [`JwtCliError::UnknownAlgorithm`] if `algorithm` is not supported.
/// - [`JwtCliError::SigningFailure`] if the signing primitive fails.
pub fn encode_token(
    claims_json: &str,
    algorithm: &str,
    secret: &[u8],
) -> Result<String, JwtCliError> {
    let claims = parse_claims(claims_json)?;
    let algorithm =
        SigningAlgorithm::resolve(algorithm).ok_or_else(|| JwtCliError::UnknownAlgorithm {
            algorithm: sanitize_for_display(algorithm),
        })?;

    sign_claims(&claims, algorithm, secret)
}

/// Sign an already-parsed claim set.
///
/// # Errors
///
/// Returns [`JwtCliError::SigningFailure`] if serialization or the
/// signing primitive fails.
pub fn sign_claims(
    claims: &Value,
    algorithm: SigningAlgorithm,
    secret: &[u8],
) -> Result<String, JwtCliError> {
    let header = json!({ "alg": algorithm.name(), "typ": TOKEN_TYPE });
    let signing_input = format!("{}.{}", encode_segment(&header)?, encode_segment(claims)?);

    let key = EncodingKey::from_secret(secret);
    let signature = jsonwebtoken::crypto::sign(signing_input.as_bytes(), &key, algorithm.into())
        .map_err(|e| JwtCliError::SigningFailure {
            reason: e.to_string(),
        })?;

    tracing::debug!(%algorithm, "signed token");
    Ok(format!("{signing_input}.{signature}"))
}

fn parse_claims(claims_json: &str) -> Result<Value, JwtCliError> {
    let claims: Value =
        serde_json::from_str(claims_json).map_err(|e| JwtCliError::ClaimsNotJson {
            reason: e.to_string(),
        })?;

    if !claims.is_object() {
        return Err(JwtCliError::ClaimsNotJson {
            reason: "claims must be a JSON object".to_string(),
        });
    }
    Ok(claims)
}

/// Serialize a JSON value compactly and base64url-encode it without padding.
fn encode_segment(value: &Value) -> Result<String, JwtCliError> {
    let bytes = serde_json::to_vec(value).map_err(|e| JwtCliError::SigningFailure {
        reason: e.to_string(),
    })?;
    Ok(URL_SAFE_NO_PAD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::decoder::decode_token;

    const JOHN_DOE_HS256: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
                                  eyJuYW1lIjoiSm9obiBEb2UifQ.\
                                  mjqxkG2vFF0jUjF7V4DTqQ8-YMmEXPEbi8U1mCuSNh0";

    const JOHN_DOE_HS512: &str = "eyJhbGciOiJIUzUxMiIsInR5cCI6IkpXVCJ9.\
                                  eyJuYW1lIjoiSm9obiBEb2UifQ.\
                                  FKMAbYE3lNdalkkgs6GKb14hC9z2lkIxyTLP0ZLR6GB3WqS9AfSJik7Fsw1vEs0SuBmZRJtvQibukS0kM24sHA";

    #[test]
    fn test_encode_hs256_is_deterministic_and_matches_known_token() {
        let first = encode_token(r#"{"name":"John Doe"}"#, "HS256", b"password").unwrap();
        let second = encode_token(r#"{"name":"John Doe"}"#, "HS256", b"password").unwrap();
        assert_eq!(first, JOHN_DOE_HS256);
        assert_eq!(first, second);
    }

    #[test]
    fn test_encode_hs512_matches_known_token() {
        let token = encode_token(r#"{"name":"John Doe"}"#, "HS512", b"password").unwrap();
        assert_eq!(token, JOHN_DOE_HS512);
    }

    #[test]
    fn test_encode_header_has_alg_then_typ() {
        let token = encode_token("{}", "HS384", b"k").unwrap();
        let header_b64 = token.split('.').next().unwrap();
        let header = URL_SAFE_NO_PAD.decode(header_b64).unwrap();
        assert_eq!(header, br#"{"alg":"HS384","typ":"JWT"}"#);
    }

    #[test]
    fn test_encode_sorts_claim_keys() {
        let a = encode_token(r#"{"b":1,"a":2}"#, "HS256", b"k").unwrap();
        let b = encode_token(r#"{"a":2,"b":1}"#, "HS256", b"k").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_encode_then_decode_round_trips_claims() {
        let claims = serde_json::json!({
            "sub": "1234567890",
            "admin": true,
            "roles": ["reader", "writer"],
            "nested": { "depth": 2, "ratio": 0.5 }
        });
        let token = encode_token(&claims.to_string(), "HS512", b"any-secret").unwrap();
        let decoded = decode_token(&token).unwrap();
        assert_eq!(decoded.payload, claims);
    }

    #[test]
    fn test_encode_with_empty_secret_succeeds() {
        let token = encode_token(r#"{"a":1}"#, "HS256", b"").unwrap();
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_encode_unknown_algorithm_fails() {
        let err = encode_token(r#"{"name":"John Doe"}"#, "NOPE", b"password").unwrap_err();
        assert!(matches!(
            err,
            JwtCliError::UnknownAlgorithm { algorithm } if algorithm == "NOPE"
        ));
    }

    #[test]
    fn test_encode_refuses_none_and_asymmetric_algorithms() {
        for alg in ["none", "RS256", "ES256"] {
            let err = encode_token("{}", alg, b"password").unwrap_err();
            assert!(matches!(err, JwtCliError::UnknownAlgorithm { .. }), "{alg}");
        }
    }

    #[test]
    fn test_encode_invalid_json_fails() {
        let err = encode_token("{not json", "HS256", b"password").unwrap_err();
        assert!(matches!(err, JwtCliError::ClaimsNotJson { .. }));
    }

    #[test]
    fn test_encode_non_object_claims_fails() {
        let err = encode_token("[1, 2, 3]", "HS256", b"password").unwrap_err();
        assert!(matches!(
            err,
            JwtCliError::ClaimsNotJson { reason } if reason.contains("JSON object")
        ));
    }

    #[test]
    fn test_encode_checks_claims_before_algorithm() {
        let err = encode_token("oops", "NOPE", b"password").unwrap_err();
        assert!(matches!(err, JwtCliError::ClaimsNotJson { .. }));
    }
}
