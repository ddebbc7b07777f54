//! Single-line error rendering for stderr.
//!
//! Every failure is printed as `error: <message>`. The `error:` marker is
//! bold red when stderr is a terminal and `NO_COLOR` is unset.

use std::io::{self, IsTerminal, Write};

use colored::Colorize;

const MARKER: &str = "error:";

/// Format an error as the line printed to stderr, without the newline.
///
/// Uses the alternate `anyhow` format so context and source are joined
/// on one line.
///
/// The marker is colored whenever `use_color` is set, whatever colored's
/// own stdout-based detection reports.
pub fn format_error(err: &anyhow::Error, use_color: bool) -> String {
    let marker = if use_color {
        colored::control::set_override(true);
        let marker = MARKER.red().bold().to_string();
        colored::control::unset_override();
        marker
    } else {
        MARKER.to_string()
    };
    format!("{marker} {err:#}")
}

/// Print an error line to stderr.
pub fn print_error(err: &anyhow::Error) {
    let stderr = io::stderr();
    let use_color = stderr.is_terminal() && std::env::var_os("NO_COLOR").is_none();
    let line = format_error(err, use_color);
    // Nothing sensible is left to do if stderr itself is gone.
    let _ = writeln!(stderr.lock(), "{line}");
}
