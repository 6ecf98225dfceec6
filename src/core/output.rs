//! Output helpers for the prompt line and diagnostics.
//!
//! stdout carries nothing but the status line, so prompts can capture it verbatim.
//! Diagnostics go to stderr and are only emitted under `--debug`.

use crate::core::status_line::StatusLine;
use colored::*;
use std::io::{self, Write};

/// Write the status line and its terminating newline.
pub fn write_status_line<W: Write>(out: &mut W, status: &StatusLine) -> io::Result<()> {
    writeln!(out, "{status}")?;
    out.flush()
}

/// Formats and prints an error message on stderr
///
/// # Format
/// ```text
/// ✕ gstatus: <message>
/// ```
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✕ gstatus:".red(), message);
}
