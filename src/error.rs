//! Domain error types for jwt-cli.
//!
//! All business-logic errors are defined here using `thiserror`.
//! They are rendered as a single `error: ...` line at the CLI boundary
//! and always end the invocation with exit status 1.

use thiserror::Error;

/// Errors that can occur while decoding, validating or encoding a JWT.
#[derive(Debug, Error)]
pub enum JwtCliError {
    /// The token is not three base64url segments holding JSON objects.
    #[error("malformed token: {reason}")]
    MalformedToken {
        /// What part of the structural parse failed.
        reason: String,
    },

    /// The algorithm is not one this tool can sign or verify with.
    ///
    /// Raised on encode for an unresolvable `--alg`, and on validate when
    /// the token header names anything outside the HMAC allow-list.
    #[error("unknown or unsupported signing algorithm: '{algorithm}'")]
    UnknownAlgorithm {
        /// The algorithm name as supplied (sanitized for display).
        algorithm: String,
    },

    /// The recomputed signature does not match the token's signature.
    #[error("signature is invalid")]
    SignatureMismatch,

    /// The claims argument given to encode is not a JSON object.
    #[error("couldn't parse claims JSON: {reason}")]
    ClaimsNotJson {
        /// Description of the parsing failure.
        reason: String,
    },

    /// The signing primitive rejected the key or input.
    #[error("signing failed: {reason}")]
    SigningFailure {
        /// Description of the signing failure.
        reason: String,
    },

    /// No token or claims were provided through any input method.
    #[error("no {what} provided: pass it as an argument or through stdin")]
    NoInputProvided {
        /// What was expected (e.g. "token", "claims").
        what: &'static str,
    },

    /// Input read from stdin exceeded the size limit.
    #[error("{what} read from stdin exceeds the {limit} byte limit")]
    InputTooLarge {
        /// What was being read.
        what: &'static str,
        /// Maximum accepted size in bytes.
        limit: u64,
    },

    /// Reading stdin failed.
    #[error("failed to read {what} from stdin: {reason}")]
    StdinRead {
        /// What was being read.
        what: &'static str,
        /// Description of the I/O failure.
        reason: String,
    },

    /// The specified environment variable is not set.
    #[error("environment variable '{name}' is not set")]
    EnvVarNotFound {
        /// Name of the missing environment variable.
        name: String,
    },

    /// The specified environment variable does not hold valid UTF-8.
    #[error("environment variable '{name}' is not valid UTF-8")]
    EnvVarNotUnicode {
        /// Name of the environment variable.
        name: String,
    },

    /// The environment variable name is empty or contains `=` or NUL.
    #[error("invalid environment variable name '{name}'")]
    InvalidEnvVarName {
        /// The rejected name (sanitized for display).
        name: String,
    },

    /// The result could not be serialized for output.
    #[error("failed to render output: {reason}")]
    Render {
        /// Description of the serialization failure.
        reason: String,
    },
}

impl JwtCliError {
    /// Shorthand for a [`JwtCliError::MalformedToken`] with the given reason.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedToken {
            reason: reason.into(),
        }
    }
}
