//! Signing algorithm allow-list.
//!
//! The tool only ever holds a raw shared secret, so only the HMAC family
//! is accepted. Everything else, `none` and the asymmetric families in
//! particular, resolves to nothing. On validate the algorithm name comes
//! from the untrusted token header, so this list is the only gate between
//! the header and the signature check.

use std::fmt;

use jsonwebtoken::Algorithm;

/// An HMAC signing scheme this tool can sign and verify with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SigningAlgorithm {
    /// HMAC with SHA-256.
    HS256,
    /// HMAC with SHA-384.
    HS384,
    /// HMAC with SHA-512.
    HS512,
}

impl SigningAlgorithm {
    /// Every supported algorithm, in the order shown in help text.
    pub const ALL: [SigningAlgorithm; 3] = [Self::HS256, Self::HS384, Self::HS512];

    /// Resolve an algorithm identifier to a supported scheme.
    ///
    /// Names are matched exactly as registered (`HS256`, not `hs256`).
    pub fn resolve(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|alg| alg.name() == name)
    }

    /// The registered JWS name, as written into the `alg` header.
    pub fn name(self) -> &'static str {
        match self {
            Self::HS256 => "HS256",
            Self::HS384 => "HS384",
            Self::HS512 => "HS512",
        }
    }
}

impl fmt::Display for SigningAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<SigningAlgorithm> for Algorithm {
    fn from(alg: SigningAlgorithm) -> Self {
        match alg {
            SigningAlgorithm::HS256 => Algorithm::HS256,
            SigningAlgorithm::HS384 => Algorithm::HS384,
            SigningAlgorithm::HS512 => Algorithm::HS512,
        }
    }
}
