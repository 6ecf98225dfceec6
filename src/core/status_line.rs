//! Composition of all parsers into the single prompt line.
//!
//! This module provides [`StatusLine`], built from the porcelain lines plus the
//! resolved [`RepoPaths`]. Its `Display` output is the space-separated field list
//! shell prompts consume:
//!
//! ```text
//! branch ahead behind staged conflicts changed untracked stashes local upstream merging rebase
//! main 2 0 1 0 3 4 1 0 origin/main 0 0
//! ```
//!
//! `local` and `merging` render as `1`/`0`; `rebase` renders as `0` or `<step>/<total>`.
//! Building either succeeds completely or returns the first fatal error.

use crate::core::{
    branch::{parse_branch, BranchInfo},
    error::{GstatusError, Result},
    paths::{discover_from_cwd, RepoPaths},
    rebase::{rebase_merge_progress, rebase_progress, RebaseProgress},
    remote::{parse_remote, RemoteTracking},
    stash::stash_count,
    stats::{parse_stats, WorkingTreeStats},
};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub branch: BranchInfo,
    pub remote: RemoteTracking,
    pub stats: WorkingTreeStats,
    pub stashes: u32,
    pub merging: bool,
    pub rebase: RebaseProgress,
}

impl StatusLine {
    /// Build the summary from status lines (header first) and resolved paths.
    pub fn from_lines<S: AsRef<str>>(lines: &[S], paths: &RepoPaths) -> Result<Self> {
        let (header, entries) = lines.split_first().ok_or(GstatusError::EmptyInput)?;
        let header = header.as_ref();

        let branch = parse_branch(header, &paths.head())?;
        let remote = parse_remote(header)?;
        let stats = parse_stats(entries);
        let stashes = stash_count(&paths.stash());
        let merging = paths.merge().exists();
        let rebase =
            rebase_progress(&paths.rebase()).or_else(|| rebase_merge_progress(&paths.rebase_merge()));

        log::debug!(
            "Parsed {} file lines for branch '{}' ({stats:?})",
            entries.len(),
            branch.branch
        );

        Ok(StatusLine {
            branch,
            remote,
            stats,
            stashes,
            merging,
            rebase,
        })
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {} {} {} {} {} {}",
            self.branch.branch,
            self.remote.ahead,
            self.remote.behind,
            self.stats.staged,
            self.stats.conflicts,
            self.stats.changed,
            self.stats.untracked,
            self.stashes,
            u8::from(self.branch.is_local_only),
            self.branch.upstream,
            u8::from(self.merging),
            self.rebase
        )
    }
}

/// Summarize status lines for the repository containing the current directory.
pub fn current_status<S: AsRef<str>>(lines: &[S]) -> Result<StatusLine> {
    let paths = RepoPaths::resolve(discover_from_cwd()?)?;
    StatusLine::from_lines(lines, &paths)
}
