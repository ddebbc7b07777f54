//! Resolution of command input: token or claims text, and the secret.
//!
//! Text comes from the positional argument or, when that is omitted and
//! stdin is piped, from stdin. The secret comes from `--secret`,
//! `--secret-env`, or defaults to empty.

use std::io::{self, IsTerminal, Read};

use zeroize::Zeroizing;

use crate::core::sanitize_for_display;
use crate::error::JwtCliError;

/// Maximum number of bytes accepted from stdin (1 MB).
const MAX_STDIN_BYTES: u64 = 1_048_576;

/// Resolve positional text, falling back to stdin when it was omitted.
///
/// `what` names the input in error messages ("token", "claims").
///
/// # Errors
///
/// Returns [`JwtCliError::NoInputProvided`] if the argument is empty, or
/// if it was omitted and stdin is a terminal or yields only whitespace.
pub fn resolve_text(arg: Option<&str>, what: &'static str) -> Result<String, JwtCliError> {
    match arg {
        Some(value) => non_empty(value, what),
        None => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                return Err(JwtCliError::NoInputProvided { what });
            }
            tracing::debug!(what, "reading input from stdin");
            let text = read_bounded(stdin.lock(), what)?;
            non_empty(&text, what)
        }
    }
}

/// Resolve the shared secret.
///
/// `--secret-env` wins when given (clap keeps the two flags exclusive);
/// with neither flag the secret is empty.
///
/// # Errors
///
/// Returns an error if the environment variable name is invalid, the
/// variable is unset, or its value is not valid UTF-8.
pub fn resolve_secret(
    secret: Option<&Zeroizing<String>>,
    secret_env: Option<&str>,
) -> Result<Zeroizing<String>, JwtCliError> {
    if let Some(name) = secret_env {
        return read_env_var(name);
    }
    Ok(secret
        .cloned()
        .unwrap_or_else(|| Zeroizing::new(String::new())))
}

fn non_empty(value: &str, what: &'static str) -> Result<String, JwtCliError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(JwtCliError::NoInputProvided { what });
    }
    Ok(trimmed.to_string())
}

/// Read at most [`MAX_STDIN_BYTES`] from `reader` as UTF-8.
fn read_bounded(reader: impl Read, what: &'static str) -> Result<String, JwtCliError> {
    let mut text = String::new();
    reader
        .take(MAX_STDIN_BYTES + 1)
        .read_to_string(&mut text)
        .map_err(|e| JwtCliError::StdinRead {
            what,
            reason: e.to_string(),
        })?;

    if text.len() as u64 > MAX_STDIN_BYTES {
        return Err(JwtCliError::InputTooLarge {
            what,
            limit: MAX_STDIN_BYTES,
        });
    }
    Ok(text)
}

/// Read a secret from the environment.
///
/// Names that are empty or contain `=` or NUL are rejected before the
/// lookup; `std::env::var` may panic on them.
fn read_env_var(name: &str) -> Result<Zeroizing<String>, JwtCliError> {
    if name.is_empty() || name.contains('=') || name.contains('\0') {
        return Err(JwtCliError::InvalidEnvVarName {
            name: sanitize_for_display(name),
        });
    }

    match std::env::var(name) {
        Ok(value) => Ok(Zeroizing::new(value)),
        Err(std::env::VarError::NotPresent) => Err(JwtCliError::EnvVarNotFound {
            name: name.to_string(),
        }),
        Err(std::env::VarError::NotUnicode(_)) => Err(JwtCliError::EnvVarNotUnicode {
            name: name.to_string(),
        }),
    }
}
