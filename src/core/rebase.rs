//! Progress of an in-flight rebase.
//!
//! `git am` style rebases keep their state in `rebase-apply/` with the current step
//! in `next` and the total in `last`. The merge backend (and interactive rebases)
//! use `rebase-merge/` with `msgnum` and `end` instead.

use std::fmt;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RebaseProgress {
    #[default]
    Idle,
    InProgress { current: String, total: String },
}

impl RebaseProgress {
    /// Keep `self` when a rebase was found, otherwise try `other`.
    pub fn or_else(self, other: impl FnOnce() -> RebaseProgress) -> RebaseProgress {
        match self {
            RebaseProgress::Idle => other(),
            found => found,
        }
    }
}

impl fmt::Display for RebaseProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RebaseProgress::Idle => write!(f, "0"),
            RebaseProgress::InProgress { current, total } => write!(f, "{current}/{total}"),
        }
    }
}

/// Progress recorded in a `rebase-apply` directory.
pub fn rebase_progress(rebase_dir: &Path) -> RebaseProgress {
    read_progress(rebase_dir, "next", "last")
}

/// Progress recorded in a `rebase-merge` directory.
pub fn rebase_merge_progress(rebase_dir: &Path) -> RebaseProgress {
    read_progress(rebase_dir, "msgnum", "end")
}

fn read_progress(rebase_dir: &Path, current_file: &str, total_file: &str) -> RebaseProgress {
    match (
        read_token(&rebase_dir.join(current_file)),
        read_token(&rebase_dir.join(total_file)),
    ) {
        (Some(current), Some(total)) => RebaseProgress::InProgress { current, total },
        _ => RebaseProgress::Idle,
    }
}

fn read_token(path: &Path) -> Option<String> {
    let content = fs::read_to_string(path).ok()?;
    content.split_whitespace().next().map(str::to_string)
}
