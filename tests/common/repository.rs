//! Repository management and setup utilities
//!
//! Provides functions for creating test repositories, either real ones through the
//! `git` binary or bare `.git` layouts holding only the files gstatus reads.

#![allow(dead_code)]

use assert_cmd::Command;
use gstatus::core::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test repository setup result containing both the temporary directory
/// and the checkout path. The TempDir must be kept alive for the duration
/// of the test to prevent cleanup.
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestRepo {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The `.git` directory of a non-worktree checkout
    pub fn git_dir(&self) -> PathBuf {
        self.path.join(".git")
    }
}

/// Runs the gstatus binary with `dir` as working directory.
///
/// Git is kept from searching above the temporary directory so results do not
/// depend on where the test runs.
pub fn gstatus_in(dir: &Path) -> Result<Command> {
    let mut cmd = Command::cargo_bin("gstatus")
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    cmd.current_dir(dir);
    if let Some(parent) = dir.parent() {
        cmd.env("GIT_CEILING_DIRECTORIES", parent);
    }
    Ok(cmd)
}

/// Sets up a checkout whose `.git` is an empty directory
///
/// Enough for piped input: gstatus only reads metadata files from it.
pub fn setup_fake_repo() -> Result<TestRepo> {
    let repo = new_checkout()?;
    fs::create_dir(repo.git_dir())?;
    Ok(repo)
}

fn new_checkout() -> Result<TestRepo> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("repo");
    fs::create_dir(&path)?;

    Ok(TestRepo { temp_dir, path })
}

/// Sets up a main checkout plus a linked worktree named `wt`
///
/// Returns the repository and the worktree checkout directory.
pub fn setup_fake_worktree() -> Result<(TestRepo, PathBuf)> {
    let repo = setup_fake_repo()?;
    let wt_meta = repo.git_dir().join("worktrees").join("wt");
    fs::create_dir_all(&wt_meta)?;

    let wt_path = repo.temp_dir.path().join("wt");
    fs::create_dir_all(&wt_path)?;
    fs::write(
        wt_path.join(".git"),
        format!("gitdir: {}\n", wt_meta.display()),
    )?;

    Ok((repo, wt_path))
}

/// Writes a file below a metadata directory, creating parents
pub fn write_metadata(git_dir: &Path, relative: &str, content: &str) -> Result<()> {
    let path = git_dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// Writes a gstatus config file into the test's temporary directory
pub fn write_config(repo: &TestRepo, json: &str) -> Result<PathBuf> {
    let path = repo.temp_dir.path().join("config.json");
    fs::write(&path, json)?;
    Ok(path)
}

/// Sets up a fresh git repository on branch `main`
///
/// Creates a temporary directory, initializes it as a git repository and sets up
/// basic git configuration to avoid user prompts.
pub fn setup_test_repo() -> Result<TestRepo> {
    let repo = new_checkout()?;

    git(&repo.path, &["init", "--quiet"])?;
    git(&repo.path, &["symbolic-ref", "HEAD", "refs/heads/main"])?;
    git(&repo.path, &["config", "user.name", "Test User"])?;
    git(&repo.path, &["config", "user.email", "test@example.com"])?;
    git(&repo.path, &["config", "commit.gpgsign", "false"])?;

    Ok(repo)
}

/// Sets up a git repository with an initial commit containing "initial.txt"
pub fn setup_test_repo_with_initial_commit() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_file(&repo.path, "initial.txt", "initial content\n")?;
    git(&repo.path, &["add", "initial.txt"])?;
    git(&repo.path, &["commit", "--quiet", "-m", "Initial commit"])?;

    Ok(repo)
}

pub fn create_file(repo_path: &Path, filename: &str, content: &str) -> Result<()> {
    fs::write(repo_path.join(filename), content)?;
    Ok(())
}

/// Runs a git command in `repo_path`, ignoring its output
pub fn git(repo_path: &Path, args: &[&str]) -> Result<()> {
    std::process::Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .output()?;
    Ok(())
}
