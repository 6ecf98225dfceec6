//! Canned porcelain input for the common repository states

#![allow(dead_code)]

/// Branch tracking an upstream with every kind of file change
pub const BUSY_BRANCH: &str = "\
## main...origin/main [ahead 3, behind 1]
M  src/lib.rs
MM src/main.rs
 M README.md
 D old.txt
UU conflicted.rs
?? notes.txt
?? scratch/
";

/// Freshly created local branch, nothing changed
pub const CLEAN_LOCAL: &str = "## feature/login\n";

/// Detached HEAD during a rebase
pub const DETACHED: &str = "## HEAD (no branch)\n M src/lib.rs\n";

/// Repository with no commits, newer and older git wording
pub const UNBORN: &str = "## No commits yet on main\n?? a.txt\n";
pub const UNBORN_OLD_GIT: &str = "## Initial commit on main\n?? a.txt\n";

/// Upstream branch deleted on the remote
pub const UPSTREAM_GONE: &str = "## topic...origin/topic [gone]\n";

/// What `git status` prints outside a repository
pub const NOT_A_REPOSITORY: &str =
    "fatal: not a git repository (or any of the parent directories): .git\n";
