//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`GstatusError`], the single error type returned by every
//! parsing and resolution step. It uses `thiserror` for the definitions and offers
//! constructor helpers for the variants that carry a path or a source error.
//!
//! # Public API
//! - [`GstatusError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, GstatusError>`
//!
//! # Error Categories
//! - **Repository discovery**: No `.git` entry above the working directory, broken worktree links
//! - **Status input**: Empty input, unrecognized header line, garbled tracking counts
//! - **Metadata files**: Detached HEAD file missing or empty
//! - **Collaborators**: Failing status command, unreadable or invalid configuration
//!
//! Missing stash logs, rebase markers and merge markers are never errors; they
//! simply mean "nothing in progress".

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for gstatus
#[derive(Error, Debug)]
pub enum GstatusError {
    // Repository discovery errors
    #[error("Not in a git repository")]
    NotInGitRepo,

    #[error("Could not open worktree file '{path}': {source}")]
    WorktreeFileUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Worktree file '{path}' has no gitdir entry")]
    WorktreeFileMalformed { path: PathBuf },

    #[error("No .git ancestor found for worktree directory '{path}'")]
    WorktreeRootNotFound { path: PathBuf },

    // Status input errors
    #[error("No status input to parse")]
    EmptyInput,

    #[error("Unrecognized status header: '{line}'")]
    MalformedHeader { line: String },

    #[error("Invalid ahead/behind count: '{text}'")]
    InvalidTrackingCount { text: String },

    // Metadata file errors
    #[error("Failed to read HEAD file '{path}': {source}")]
    HeadFileUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("HEAD file '{path}' is empty")]
    HeadFileEmpty { path: PathBuf },

    // Collaborator errors
    #[error("Failed to run '{command}': {source}")]
    GitCommandFailed {
        command: String,
        source: std::io::Error,
    },

    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results using GstatusError
pub type Result<T> = std::result::Result<T, GstatusError>;

impl GstatusError {
    /// Create a worktree file unreadable error
    pub fn worktree_file_unreadable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WorktreeFileUnreadable {
            path: path.into(),
            source,
        }
    }

    /// Create a worktree file malformed error
    pub fn worktree_file_malformed(path: impl Into<PathBuf>) -> Self {
        Self::WorktreeFileMalformed { path: path.into() }
    }

    /// Create a worktree root not found error
    pub fn worktree_root_not_found(path: impl Into<PathBuf>) -> Self {
        Self::WorktreeRootNotFound { path: path.into() }
    }

    /// Create a malformed header error
    pub fn malformed_header(line: impl Into<String>) -> Self {
        Self::MalformedHeader { line: line.into() }
    }

    /// Create an invalid tracking count error
    pub fn invalid_tracking_count(text: impl Into<String>) -> Self {
        Self::InvalidTrackingCount { text: text.into() }
    }

    /// Create a HEAD file unreadable error
    pub fn head_file_unreadable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::HeadFileUnreadable {
            path: path.into(),
            source,
        }
    }

    /// Create a HEAD file empty error
    pub fn head_file_empty(path: impl Into<PathBuf>) -> Self {
        Self::HeadFileEmpty { path: path.into() }
    }

    /// Create a git command failed error
    pub fn git_command_failed(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::GitCommandFailed {
            command: command.into(),
            source,
        }
    }

    /// Create a config read failed error
    pub fn config_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config parse failed error
    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }
}
