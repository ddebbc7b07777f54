//! Shared test fixtures and helper utilities.
//!
//! Provides pre-built JWT tokens with known claims and secrets, and
//! helpers for loading expected-output files from `tests/fixtures/`.
#![allow(dead_code)]

/// jwt.io sample token signed with HS256 and secret [`PASSWORD`].
///
/// Header: `{"alg":"HS256","typ":"JWT"}`
/// Payload: `{"sub":"1234567890","name":"John Doe","iat":1516239022}`
pub const HS256_TOKEN: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
     eyJzdWIiOiIxMjM0NTY3ODkwIiwibmFtZSI6IkpvaG4gRG9lIiwiaWF0IjoxNTE2MjM5MDIyfQ.\
     kXSdJhhUKTJemgs8O0rfIJmUaxoSIDdClL_OPmaC7Eo";

/// The same header and payload as [`HS256_TOKEN`] with a signature made
/// by a different secret.
pub const HS256_TOKEN_BAD_SIGNATURE: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
     eyJzdWIiOiIxMjM0NTY3ODkwIiwibmFtZSI6IkpvaG4gRG9lIiwiaWF0IjoxNTE2MjM5MDIyfQ.\
     kiLK7xLmGyLdcwYDzwJfHE8Wa42STGYLgtpzEiYqKhQ";

/// jwt.io sample token signed with HS512.
///
/// Header: `{"alg":"HS512","typ":"JWT"}`
/// Payload: `{"sub":"1234567890","name":"John Doe","admin":true,"iat":1516239022}`
pub const HS512_TOKEN: &str = "eyJhbGciOiJIUzUxMiIsInR5cCI6IkpXVCJ9.\
     eyJzdWIiOiIxMjM0NTY3ODkwIiwibmFtZSI6IkpvaG4gRG9lIiwiYWRtaW4iOnRydWUsImlhdCI6MTUxNjIzOTAyMn0.\
     VFb0qJ1LRg_4ujbZoRMXnVkUgiuKq5KxWqNdbKq_G9Vvz-S1zZa9LPxtHWKa64zDl2ofkT8F6jBt_K4riU-fPg";

/// `{"name":"John Doe"}` signed with HS256 and [`PASSWORD`].
pub const JOHN_DOE_HS256: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
     eyJuYW1lIjoiSm9obiBEb2UifQ.\
     mjqxkG2vFF0jUjF7V4DTqQ8-YMmEXPEbi8U1mCuSNh0";

/// `{"name":"John Doe"}` signed with HS512 and [`PASSWORD`].
pub const JOHN_DOE_HS512: &str = "eyJhbGciOiJIUzUxMiIsInR5cCI6IkpXVCJ9.\
     eyJuYW1lIjoiSm9obiBEb2UifQ.\
     FKMAbYE3lNdalkkgs6GKb14hC9z2lkIxyTLP0ZLR6GB3WqS9AfSJik7Fsw1vEs0SuBmZRJtvQibukS0kM24sHA";

/// An unsigned token: `{"alg":"none"}.{"sub":"admin"}.`
pub const NONE_ALG_TOKEN: &str = "eyJhbGciOiJub25lIn0.eyJzdWIiOiJhZG1pbiJ9.";

/// A malformed token with only two parts (missing signature).
pub const MALFORMED_TOKEN_TWO_PARTS: &str = "eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiIxMjM0NTY3ODkwIn0";

/// A completely invalid token string.
pub const INVALID_TOKEN: &str = "notajwt";

/// Secret that signed the tokens above.
pub const PASSWORD: &str = "password";

/// Read a file under `tests/fixtures/`.
pub fn fixture(relative: &str) -> String {
    let path = format!("{}/tests/fixtures/{relative}", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to read {path}: {e}"))
}
