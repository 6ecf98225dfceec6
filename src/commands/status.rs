use crate::core::{
    config::Config,
    error::Result,
    input::{is_not_a_repository, read_status_lines, InputMode},
    output::write_status_line,
    status_line::{current_status, StatusLine},
};
use std::io;
use std::path::Path;

/// Build the status line for the current directory.
///
/// Returns `Ok(None)` when the status command reports that the directory is not
/// inside a repository; that is a normal outcome for a prompt, not a failure.
pub fn render_status(input: InputMode, config: &Config) -> Result<Option<StatusLine>> {
    let lines = read_status_lines(input, config)?;

    if lines.first().is_some_and(|line| is_not_a_repository(line)) {
        log::debug!("Status input reports no repository: {}", lines[0]);
        return Ok(None);
    }

    current_status(&lines).map(Some)
}

pub fn execute_status(input: InputMode, config_path: Option<&Path>) -> Result<()> {
    let config = Config::load(config_path)?;

    if let Some(status) = render_status(input, &config)? {
        write_status_line(&mut io::stdout().lock(), &status)?;
    }

    Ok(())
}
