//! Status message formatting for stderr.
//!
//! Sanitized values always go to stdout unstyled. Only these status lines are
//! coloured, and only when the stream is a terminal.

use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Prints an informational message.
pub fn print_info_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{}", msg.cyan())
    } else {
        writeln!(writer, "{}", msg)
    }
}

/// Prints a warning message.
pub fn print_warn_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{} {}", "warning:".yellow().bold(), msg)
    } else {
        writeln!(writer, "warning: {}", msg)
    }
}

/// Prints an error message.
pub fn print_error_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{} {}", "error:".red().bold(), msg)
    } else {
        writeln!(writer, "error: {}", msg)
    }
}
