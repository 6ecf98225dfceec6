//! Parsing of the `## ...` header line of porcelain status output.
//!
//! The header comes in a handful of shapes depending on repository state and git
//! version:
//!
//! ```text
//! ## main
//! ## main...origin/main
//! ## main...origin/main [ahead 2, behind 1]
//! ## HEAD (no branch)
//! ## Initial commit on main        (git < 2.17)
//! ## No commits yet on main        (git >= 2.17)
//! ```
//!
//! [`parse_branch`] reduces all of them to a [`BranchInfo`]. The tracking suffix is
//! left to [`crate::core::remote`].

use crate::core::error::{GstatusError, Result};
use std::fs;
use std::path::Path;

/// Marker that opens the header line
pub const HEADER_MARKER: &str = "##";

/// Placeholder upstream when the branch tracks nothing
pub const NO_UPSTREAM: &str = "..";

const UPSTREAM_SEPARATOR: &str = "...";
const DETACHED_MARKER: &str = "(no branch)";
const UNBORN_PHRASES: [&str; 2] = ["Initial commit", "No commits yet"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchInfo {
    pub branch: String,
    pub upstream: String,
    pub is_local_only: bool,
}

impl Default for BranchInfo {
    fn default() -> Self {
        Self {
            branch: String::new(),
            upstream: NO_UPSTREAM.to_string(),
            is_local_only: true,
        }
    }
}

/// Strip the `## ` marker, returning the header text.
pub fn header_text(branch_line: &str) -> Result<&str> {
    branch_line
        .strip_prefix(HEADER_MARKER)
        .and_then(|rest| rest.strip_prefix(' '))
        .ok_or_else(|| GstatusError::malformed_header(branch_line))
}

/// Parse the branch identity from the header line.
///
/// `head_file` is only read for a detached HEAD, where the branch is reported as
/// the commit id stored in it.
pub fn parse_branch(branch_line: &str, head_file: &Path) -> Result<BranchInfo> {
    let mut text = header_text(branch_line)?;

    if let Some(found) = text.rfind(" [") {
        if text.ends_with(']') {
            text = &text[..found];
        }
    }

    if let Some((branch, upstream)) = text.split_once(UPSTREAM_SEPARATOR) {
        return Ok(BranchInfo {
            branch: branch.to_string(),
            upstream: upstream.to_string(),
            is_local_only: false,
        });
    }

    if text.contains(DETACHED_MARKER) {
        return Ok(BranchInfo {
            branch: read_head_commit(head_file)?,
            ..Default::default()
        });
    }

    if UNBORN_PHRASES.iter().any(|phrase| text.contains(phrase)) {
        let branch = text.rsplit(' ').next().unwrap_or(text);
        return Ok(BranchInfo {
            branch: branch.to_string(),
            ..Default::default()
        });
    }

    Ok(BranchInfo {
        branch: text.to_string(),
        ..Default::default()
    })
}

fn read_head_commit(head_file: &Path) -> Result<String> {
    let content = fs::read_to_string(head_file)
        .map_err(|e| GstatusError::head_file_unreadable(head_file, e))?;

    content
        .split_whitespace()
        .next()
        .map(str::to_string)
        .ok_or_else(|| GstatusError::head_file_empty(head_file))
}
