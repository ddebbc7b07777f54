//! Terminal output rendering.
//!
//! Pretty JSON for successful decode/validate runs and the single
//! `error:` line for failures.

pub mod error_printer;
pub mod json_printer;
