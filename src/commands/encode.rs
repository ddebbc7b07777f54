//! Handler for the `encode` subcommand.
//!
//! Signs a JSON claim set with the chosen HMAC algorithm and prints the
//! compact token.

use anyhow::Result;

use crate::cli::EncodeArgs;
use crate::core::{encoder, input};

/// Execute the `encode` subcommand with the given arguments.
///
/// A missing `--alg` is treated as the empty algorithm name and fails
/// resolution like any other unknown name.
pub fn execute(args: &EncodeArgs) -> Result<String> {
    let claims = input::resolve_text(args.claims.as_deref(), "claims")?;
    let secret = input::resolve_secret(args.secret.as_ref(), args.secret_env.as_deref())?;
    let algorithm = args.alg.as_deref().unwrap_or_default();

    let token = encoder::encode_token(&claims, algorithm, secret.as_bytes())?;
    tracing::info!(algorithm, "encoded token");
    Ok(token)
}
