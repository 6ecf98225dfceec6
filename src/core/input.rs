//! Acquisition of porcelain status lines.
//!
//! Lines come either from standard input (`git status --porcelain --branch | gstatus`)
//! or from running the configured status command in the current directory.
//!
//! # Public API
//! - [`InputMode`]: Where to read from, selectable on the command line
//! - [`read_status_lines`]: Produce the lines for a mode
//! - [`is_not_a_repository`]: Recognize git's "not a git repository" failure

use crate::core::{
    config::Config,
    error::{GstatusError, Result},
};
use clap::ValueEnum;
use std::io::{self, BufRead, IsTerminal};
use std::process::Command;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum InputMode {
    /// Read piped stdin when present, otherwise run git
    #[default]
    Auto,
    /// Always read stdin
    Stdin,
    /// Always run git
    Git,
}

pub fn read_status_lines(mode: InputMode, config: &Config) -> Result<Vec<String>> {
    match mode {
        InputMode::Stdin => read_lines_from(io::stdin().lock()),
        InputMode::Git => run_status_command(config),
        InputMode::Auto => {
            let stdin = io::stdin();
            if stdin.is_terminal() || !stdin_has_input(&stdin, config.stdin_wait_ms) {
                return run_status_command(config);
            }

            let lines = read_lines_from(stdin.lock())?;
            if lines.is_empty() {
                log::debug!("stdin is not a terminal but carried no input, running git");
                return run_status_command(config);
            }
            Ok(lines)
        }
    }
}

/// Whether piped stdin becomes readable within `wait_ms`.
///
/// A pipe inherited from the shell that is never written to or closed must not
/// stall the prompt; in that case git is run instead.
#[cfg(unix)]
fn stdin_has_input(stdin: &io::Stdin, wait_ms: u16) -> bool {
    use nix::poll::{poll, PollFd, PollFlags};
    use std::os::fd::AsFd;

    let mut fds = [PollFd::new(stdin.as_fd(), PollFlags::POLLIN)];
    match poll(&mut fds, wait_ms) {
        Ok(ready) => ready > 0,
        Err(e) => {
            log::debug!("Polling stdin failed: {e}");
            false
        }
    }
}

#[cfg(not(unix))]
fn stdin_has_input(_stdin: &io::Stdin, _wait_ms: u16) -> bool {
    true
}

/// Split a reader into lines, dropping `\r` from CRLF endings.
///
/// Paths and branch names are raw bytes in porcelain output, so lines are
/// decoded lossily rather than rejected.
pub fn read_lines_from<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.split(b'\n') {
        let mut line = line?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        lines.push(String::from_utf8_lossy(&line).into_owned());
    }
    Ok(lines)
}

/// Run the status command, folding stderr in on failure like `2>&1` would.
pub fn run_status_command(config: &Config) -> Result<Vec<String>> {
    let command_line = config.command_line();
    log::debug!("Running '{command_line}'");

    let output = Command::new(&config.git_command)
        .args(&config.status_args)
        .output()
        .map_err(|e| GstatusError::git_command_failed(&command_line, e))?;

    let mut lines = read_lines_from(output.stdout.as_slice())?;
    if !output.status.success() {
        log::debug!("'{command_line}' exited with {}", output.status);
        lines.extend(read_lines_from(output.stderr.as_slice())?);
    }

    Ok(lines)
}

/// Whether the first line is git refusing to run outside a repository.
pub fn is_not_a_repository(first_line: &str) -> bool {
    first_line.starts_with("fatal: ") && first_line.contains("ot a git repository")
}
