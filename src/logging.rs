//! Diagnostic logging to stderr.
//!
//! The filter comes from `JWT_CLI_LOG` (standard `EnvFilter` syntax) when
//! set, otherwise from the `-v` count. At the default level only warnings
//! are shown, so a normal run writes nothing but its result or error line.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding an explicit log filter.
pub const LOG_ENV_VAR: &str = "JWT_CLI_LOG";

/// Map a `-v` count to a default filter directive.
fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false),
        )
        .try_init();
}
