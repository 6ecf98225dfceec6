//! Stash count from the stash reflog.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Number of non-empty lines in the stash log; a missing log means no stashes.
pub fn stash_count(stash_file: &Path) -> u32 {
    let file = match File::open(stash_file) {
        Ok(file) => file,
        Err(e) => {
            log::debug!("No stash log at {}: {e}", stash_file.display());
            return 0;
        }
    };

    // Reflog messages carry commit subjects in whatever encoding they were written
    let mut count = 0;
    for line in BufReader::new(file).split(b'\n') {
        match line {
            Ok(line) if !line.is_empty() => count += 1,
            Ok(_) => {}
            Err(e) => {
                log::warn!("Stopped reading stash log {}: {e}", stash_file.display());
                break;
            }
        }
    }
    count
}
