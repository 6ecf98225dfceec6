//! gstatus - Compact git status summary for shell prompts.
//!
//! This library turns the output of `git status --porcelain --branch`, plus a few
//! files under `.git`, into one space-separated line a prompt can split into
//! fields: branch, ahead/behind counts, file counts, stashes, upstream, merge and
//! rebase state.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - Header and file-status parsing
//! - Worktree-aware repository path resolution
//! - Stash and rebase state readers
//! - The [`StatusLine`] aggregate and its error type

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use crate::core::{
    current_status,
    parse_branch,
    parse_remote,
    parse_stats,
    rebase_progress,
    stash_count,

    BranchInfo,
    Config,
    // Error handling
    GstatusError,
    InputMode,
    RebaseProgress,
    RemoteTracking,
    // Path resolution
    RepoPaths,
    Result,
    StatusLine,
    WorkingTreeStats,
};
