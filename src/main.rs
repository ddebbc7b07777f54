//! jwt-cli: encode, decode and validate JSON Web Tokens from the terminal.
//!
//! Entry point for the application. Classifies the argument vector,
//! parses it with clap and delegates to the appropriate command handler.

#![forbid(unsafe_code)]

mod cli;
mod commands;
mod core;
mod display;
mod error;
mod logging;

use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use cli::{Commands, Invocation};

fn main() -> ExitCode {
    match run(std::env::args_os().collect()) {
        Ok(code) => code,
        Err(e) => {
            display::error_printer::print_error(&e);
            ExitCode::FAILURE
        }
    }
}

/// Dispatch an argument vector and print the command's output.
///
/// Returns `ExitCode` so the caller can exit without `process::exit`,
/// allowing all destructors (including `Zeroizing`) to run.
fn run(args: Vec<OsString>) -> Result<ExitCode> {
    let prog = cli::program_name(&args);
    let args = match cli::classify(args) {
        Invocation::Overview => {
            write_stdout(&cli::overview(&prog))?;
            return Ok(ExitCode::SUCCESS);
        }
        Invocation::Command(args) => args,
    };

    let cli = match cli::parse(args, &prog) {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version land here too, with exit code 0.
            let _ = e.print();
            return Ok(ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(2)));
        }
    };

    logging::init(cli.verbose);
    tracing::debug!(command = ?cli.command, "dispatching");

    let output = dispatch(&cli.command)?;
    write_stdout(&output)?;
    Ok(ExitCode::SUCCESS)
}

/// Run the selected handler and return the text to print.
fn dispatch(command: &Commands) -> Result<String> {
    match command {
        Commands::Decode(args) => commands::decode::execute(args),
        Commands::Validate(args) => commands::validate::execute(args),
        Commands::Encode(args) => commands::encode::execute(args),
    }
}

fn write_stdout(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{text}")
        .and_then(|()| stdout.flush())
        .context("failed to write to stdout")
}
