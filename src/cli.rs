//! CLI argument definitions for jwt-cli.
//!
//! Uses `clap` derive macros to define the command-line interface.
//! Each subcommand has its own argument struct, built fresh for every
//! invocation and passed to its handler.
//!
//! Before clap sees the arguments, [`classify`] picks the subcommand from
//! the first argument case-insensitively and routes anything it does not
//! recognize to the overview usage.
//!
//! # Security
//!
//! The argument structs implement custom `Debug` to redact tokens,
//! claims and secrets, preventing accidental leakage through debug formatting,
//! error chains, or logging.

use std::ffi::OsString;
use std::fmt;
use std::path::Path;

use clap::{ArgAction, CommandFactory, FromArgMatches, Parser, Subcommand};
use zeroize::Zeroizing;

/// Name used in usage and help text when the invoked name is unknown.
pub const BIN_NAME: &str = "jwt-cli";

/// Encode, decode and validate JSON Web Tokens.
#[derive(Debug, Parser)]
#[command(name = BIN_NAME, bin_name = BIN_NAME)]
#[command(version, long_about = None)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace).
    ///
    /// The JWT_CLI_LOG environment variable, when set, takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Display a JWT's header and claims without verifying its signature.
    Decode(DecodeArgs),

    /// Verify a JWT's signature with a shared secret and display its contents.
    Validate(ValidateArgs),

    /// Encode and sign a JWT from JSON claims.
    Encode(EncodeArgs),
}

/// Arguments for the `decode` subcommand.
#[derive(clap::Args)]
pub struct DecodeArgs {
    /// The JWT to decode. If omitted, reads from stdin.
    #[arg(value_name = "JWT")]
    pub token: Option<String>,
}

/// Arguments for the `validate` subcommand.
#[derive(clap::Args)]
pub struct ValidateArgs {
    /// The JWT to validate. If omitted, reads from stdin.
    #[arg(value_name = "JWT")]
    pub token: Option<String>,

    /// The HMAC signing secret. Defaults to the empty secret.
    ///
    /// WARNING: Passing secrets via CLI arguments may expose them in shell
    /// history. Prefer --secret-env instead.
    #[arg(long, value_name = "SECRET", value_parser = parse_zeroizing_string)]
    pub secret: Option<Zeroizing<String>>,

    /// Read the HMAC signing secret from the specified environment variable.
    #[arg(long, value_name = "VAR_NAME", conflicts_with = "secret")]
    pub secret_env: Option<String>,
}

/// Arguments for the `encode` subcommand.
#[derive(clap::Args)]
pub struct EncodeArgs {
    /// The claims as a JSON object. If omitted, reads from stdin.
    #[arg(value_name = "JSON_CLAIMS")]
    pub claims: Option<String>,

    /// The signing algorithm: HS256, HS384 or HS512.
    #[arg(long, value_name = "ALG")]
    pub alg: Option<String>,

    /// The HMAC signing secret. Defaults to the empty secret.
    ///
    /// WARNING: Passing secrets via CLI arguments may expose them in shell
    /// history. Prefer --secret-env instead.
    #[arg(long, value_name = "SECRET", value_parser = parse_zeroizing_string)]
    pub secret: Option<Zeroizing<String>>,

    /// Read the HMAC signing secret from the specified environment variable.
    #[arg(long, value_name = "VAR_NAME", conflicts_with = "secret")]
    pub secret_env: Option<String>,
}

/// Parse a string into a `Zeroizing<String>` for secure CLI arguments.
fn parse_zeroizing_string(s: &str) -> Result<Zeroizing<String>, std::convert::Infallible> {
    Ok(Zeroizing::new(s.to_string()))
}

/// Custom `Debug` that redacts the token to prevent accidental leakage.
impl fmt::Debug for DecodeArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodeArgs")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Custom `Debug` that redacts token and secret.
impl fmt::Debug for ValidateArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidateArgs")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("secret", &self.secret.as_ref().map(|_| "[REDACTED]"))
            .field("secret_env", &self.secret_env)
            .finish()
    }
}

/// Custom `Debug` that redacts claims and secret.
impl fmt::Debug for EncodeArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodeArgs")
            .field("claims", &self.claims.as_ref().map(|_| "[REDACTED]"))
            .field("alg", &self.alg)
            .field("secret", &self.secret.as_ref().map(|_| "[REDACTED]"))
            .field("secret_env", &self.secret_env)
            .finish()
    }
}

/// Subcommand names accepted as the first argument, lowercase.
const SUBCOMMANDS: [&str; 3] = ["decode", "validate", "encode"];

/// How an argument vector should be handled.
#[derive(Debug, PartialEq, Eq)]
pub enum Invocation {
    /// Print the overview usage and exit successfully.
    Overview,
    /// Hand the (normalized) arguments to clap.
    Command(Vec<OsString>),
}

/// Decide what to do with the full argument vector, program name included.
///
/// The first argument selects the subcommand case-insensitively and is
/// rewritten to lowercase. `--version`/`-V` pass through to clap. Anything
/// else, including no argument at all, is an [`Invocation::Overview`].
pub fn classify(mut args: Vec<OsString>) -> Invocation {
    let Some(first) = args.get(1).and_then(|a| a.to_str()) else {
        return Invocation::Overview;
    };

    if first == "--version" || first == "-V" {
        return Invocation::Command(args);
    }

    let lowered = first.to_ascii_lowercase();
    if SUBCOMMANDS.contains(&lowered.as_str()) {
        args[1] = OsString::from(lowered);
        Invocation::Command(args)
    } else {
        Invocation::Overview
    }
}

/// Token used in the `decode` and `validate` help examples.
const EXAMPLE_TOKEN: &str = concat!(
    "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.eyJmb28iOiJiYXIifQ.",
    "-fKGu6c4VNyGzGuzG1M0Cx87gyYFxM3-o2H_vRAnfVY"
);

/// The name the binary was invoked as, taken from the first argument.
///
/// Falls back to [`BIN_NAME`] when the first argument is missing or has
/// no file name.
pub fn program_name(args: &[OsString]) -> String {
    args.first()
        .map(Path::new)
        .and_then(Path::file_stem)
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| BIN_NAME.to_string())
}

/// The clap command, with usage lines and help examples naming `prog`.
pub fn command(prog: &str) -> clap::Command {
    let examples = [
        ("decode", format!("Example:\n  {prog} decode {EXAMPLE_TOKEN}")),
        (
            "validate",
            format!("Example:\n  {prog} validate --secret password {EXAMPLE_TOKEN}"),
        ),
        (
            "encode",
            format!("Example:\n  {prog} encode --alg HS256 --secret password '{{\"foo\":\"bar\"}}'"),
        ),
    ];
    examples
        .into_iter()
        .fold(Cli::command().bin_name(prog), |cmd, (name, example)| {
            cmd.mut_subcommand(name, move |sub| sub.after_help(example))
        })
}

/// Parse a normalized argument vector, naming `prog` in usage and help.
///
/// # Errors
///
/// Returns the clap error for help, version and invalid flags alike; the
/// caller prints it and uses its exit code.
pub fn parse(args: Vec<OsString>, prog: &str) -> Result<Cli, clap::Error> {
    let matches = command(prog).try_get_matches_from(args)?;
    Cli::from_arg_matches(&matches)
}

/// The top-level usage text printed for [`Invocation::Overview`].
pub fn overview(prog: &str) -> String {
    format!(
        "Encodes, decodes and validates JWTs.\n\
         \n\
         Usage:\n  \
         {prog} encode [OPTIONS] <JSON_CLAIMS>   Encodes and signs a JWT\n  \
         {prog} decode [OPTIONS] <JWT>           Decodes a JWT, without validating it\n  \
         {prog} validate [OPTIONS] <JWT>         Decodes & verifies a JWT's signature\n\
         \n\
         Use `{prog} <cmd> --help` for more information."
    )
}
