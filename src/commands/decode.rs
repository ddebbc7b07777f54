//! Handler for the `decode` subcommand.
//!
//! Decodes and pretty-prints a JWT's header and payload without
//! verifying its signature. Supports reading the token from a CLI
//! argument or stdin.

use anyhow::Result;

use crate::cli::DecodeArgs;
use crate::core::{decoder, input};
use crate::display::json_printer;

/// Execute the `decode` subcommand with the given arguments.
pub fn execute(args: &DecodeArgs) -> Result<String> {
    let token = input::resolve_text(args.token.as_deref(), "token")?;
    let decoded = decoder::decode_token(&token)?;
    tracing::info!("decoded token without signature check");
    Ok(json_printer::render_json(&decoded.contents())?)
}
