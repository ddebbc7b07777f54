//! Command handlers for each CLI subcommand.
//!
//! Each subcommand is implemented in its own module and exposes
//! a single `execute` function that receives the parsed arguments and
//! returns the complete text to print. Nothing is written to stdout
//! until a handler has succeeded.

pub mod decode;
pub mod encode;
pub mod validate;
