//! Handler for the `validate` subcommand.
//!
//! Verifies a JWT's HMAC signature with a shared secret and, only when it
//! matches, pretty-prints the header and payload in the same shape as
//! `decode`.

use anyhow::Result;

use crate::cli::ValidateArgs;
use crate::core::{input, validator};
use crate::display::json_printer;

/// Execute the `validate` subcommand with the given arguments.
pub fn execute(args: &ValidateArgs) -> Result<String> {
    let token = input::resolve_text(args.token.as_deref(), "token")?;
    let secret = input::resolve_secret(args.secret.as_ref(), args.secret_env.as_deref())?;

    let decoded = validator::validate_token(&token, secret.as_bytes())?;
    tracing::info!("token signature is valid");
    Ok(json_printer::render_json(&decoded.contents())?)
}

#[cfg(test)]
mod tests {
    use zeroize::Zeroizing;

    use super::*;
    use crate::error::JwtCliError;

    const JOHN_DOE_HS256: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
                                  eyJuYW1lIjoiSm9obiBEb2UifQ.\
                                  mjqxkG2vFF0jUjF7V4DTqQ8-YMmEXPEbi8U1mCuSNh0";

    fn args(secret: &str) -> ValidateArgs {
        ValidateArgs {
            token: Some(JOHN_DOE_HS256.to_string()),
            secret: Some(Zeroizing::new(secret.to_string())),
            secret_env: None,
        }
    }

    #[test]
    fn test_validate_correct_secret_renders_claims() {
        let out = execute(&args("password")).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["payload"], serde_json::json!({ "name": "John Doe" }));
        assert_eq!(parsed["header"]["alg"], "HS256");
    }

    #[test]
    fn test_validate_wrong_secret_produces_no_output() {
        let err = execute(&args("wrong")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<JwtCliError>(),
            Some(JwtCliError::SignatureMismatch)
        ));
    }
}
