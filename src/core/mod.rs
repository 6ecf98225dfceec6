//! Core functionality for the gstatus tool.
//!
//! This module holds the status parsers, the path resolution they depend on, and
//! the ambient pieces (errors, configuration, input and output).

pub mod branch;
pub mod config;
pub mod dirs;
pub mod error;
pub mod input;
pub mod output;
pub mod paths;
pub mod rebase;
pub mod remote;
pub mod stash;
pub mod stats;
pub mod status_line;

// === Error handling ===
pub use error::{GstatusError, Result};

// === Path resolution ===
// Locates HEAD, MERGE_HEAD, rebase state and the stash log, following worktrees
pub use paths::{discover_from_cwd, discover_metadata_path, RepoPaths};

// === Header line parsing ===
pub use branch::{parse_branch, BranchInfo};
pub use remote::{parse_remote, RemoteTracking};

// === File status counting ===
pub use stats::{parse_stats, WorkingTreeStats};

// === Repository state files ===
pub use rebase::{rebase_merge_progress, rebase_progress, RebaseProgress};
pub use stash::stash_count;

// === Aggregation ===
pub use status_line::{current_status, StatusLine};

// === Input, configuration and output ===
pub use config::Config;
pub use input::{is_not_a_repository, read_status_lines, InputMode};
pub use output::{print_error, write_status_line};
