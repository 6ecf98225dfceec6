//! Repository metadata location, including linked worktrees.
//!
//! This module provides [`RepoPaths`], which turns the `.git` entry found above the
//! working directory into the two directories every other reader needs:
//!
//! - `metadata_dir`: the per-checkout metadata (HEAD, MERGE_HEAD, rebase state)
//! - `repo_root`: the shared metadata store (stash log)
//!
//! In a normal checkout both are the `.git` directory. In a linked worktree `.git`
//! is a file of the form `gitdir: /repo/.git/worktrees/<name>`; the pointed-to
//! directory becomes `metadata_dir` and its nearest ancestor named `.git` becomes
//! `repo_root`.
//!
//! # Public API
//! - [`RepoPaths`]: Resolved directories plus derived state-file paths
//! - [`discover_metadata_path`]: Walk upward from a directory to the `.git` entry
//! - [`discover_from_cwd`]: Same, starting at the current directory

use crate::core::error::{GstatusError, Result};
use std::env;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the metadata entry at the top of every checkout
pub const METADATA_LEAF: &str = ".git";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoPaths {
    pub repo_root: PathBuf,
    pub metadata_dir: PathBuf,
}

impl RepoPaths {
    /// Resolve paths from a `.git` entry, following worktree indirection when it
    /// is a file rather than a directory.
    pub fn resolve(git_path: impl AsRef<Path>) -> Result<Self> {
        let git_path = git_path.as_ref();

        if git_path.is_dir() {
            return Ok(RepoPaths {
                repo_root: git_path.to_path_buf(),
                metadata_dir: git_path.to_path_buf(),
            });
        }

        let metadata_dir = read_gitdir_pointer(git_path)?;
        let repo_root = metadata_dir
            .ancestors()
            .find(|dir| dir.file_name() == Some(OsStr::new(METADATA_LEAF)))
            .map(Path::to_path_buf)
            .ok_or_else(|| GstatusError::worktree_root_not_found(&metadata_dir))?;

        log::debug!(
            "Worktree metadata at {}, shared store at {}",
            metadata_dir.display(),
            repo_root.display()
        );

        Ok(RepoPaths {
            repo_root,
            metadata_dir,
        })
    }

    pub fn head(&self) -> PathBuf {
        self.metadata_dir.join("HEAD")
    }

    pub fn merge(&self) -> PathBuf {
        self.metadata_dir.join("MERGE_HEAD")
    }

    /// State directory of `git am` style rebases
    pub fn rebase(&self) -> PathBuf {
        self.metadata_dir.join("rebase-apply")
    }

    /// State directory of merge-backend and interactive rebases
    pub fn rebase_merge(&self) -> PathBuf {
        self.metadata_dir.join("rebase-merge")
    }

    /// Stashes are shared between worktrees, so the log lives in the main store.
    pub fn stash(&self) -> PathBuf {
        self.repo_root.join("logs").join("refs").join("stash")
    }
}

/// Read the `gitdir: <path>` line of a worktree `.git` file.
fn read_gitdir_pointer(git_file: &Path) -> Result<PathBuf> {
    let content = fs::read_to_string(git_file)
        .map_err(|e| GstatusError::worktree_file_unreadable(git_file, e))?;

    let target = content
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| GstatusError::worktree_file_malformed(git_file))?;

    let target = PathBuf::from(target);
    if target.is_absolute() {
        return Ok(target);
    }

    // Relative pointers are relative to the directory holding the .git file
    let base = git_file.parent().unwrap_or_else(|| Path::new("."));
    Ok(base.join(target))
}

/// Walk from `start` toward the filesystem root and return the first `.git`
/// entry found, whether directory or worktree file.
pub fn discover_metadata_path(start: &Path) -> Result<PathBuf> {
    for dir in start.ancestors() {
        let candidate = dir.join(METADATA_LEAF);
        if candidate.exists() {
            log::debug!("Found repository metadata at {}", candidate.display());
            return Ok(candidate);
        }
    }

    Err(GstatusError::NotInGitRepo)
}

pub fn discover_from_cwd() -> Result<PathBuf> {
    let cwd = env::current_dir()?;
    discover_metadata_path(&cwd)
}
