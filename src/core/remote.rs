//! Ahead/behind counts from the tracking suffix of the header line.
//!
//! Git appends the suffix only when the branch has diverged from its upstream or
//! the upstream is gone:
//!
//! ```text
//! ## main...origin/main [ahead 2]
//! ## main...origin/main [behind 1]
//! ## main...origin/main [ahead 2, behind 1]
//! ## main...origin/main [gone]
//! ```

use crate::core::error::{GstatusError, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemoteTracking {
    pub ahead: u32,
    pub behind: u32,
}

/// Contents of a ` [...]` suffix that closes the line, brackets excluded.
pub fn tracking_suffix(branch_line: &str) -> Option<&str> {
    let inner = branch_line.strip_suffix(']')?;
    let start = inner.rfind(" [")?;
    Some(&inner[start + 2..])
}

pub fn parse_remote(branch_line: &str) -> Result<RemoteTracking> {
    let mut remote = RemoteTracking::default();

    let Some(suffix) = tracking_suffix(branch_line) else {
        return Ok(remote);
    };

    for part in suffix.split(',').map(str::trim) {
        if let Some(count) = part.strip_prefix("ahead") {
            remote.ahead = parse_count(part, count)?;
        } else if let Some(count) = part.strip_prefix("behind") {
            remote.behind = parse_count(part, count)?;
        } else {
            log::debug!("Ignoring tracking state '{part}'");
        }
    }

    Ok(remote)
}

fn parse_count(part: &str, count: &str) -> Result<u32> {
    count
        .trim()
        .parse()
        .map_err(|_| GstatusError::invalid_tracking_count(part))
}
