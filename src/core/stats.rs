//! Working-tree file counts from porcelain status lines.
//!
//! Each line starts with a two-character code `XY`: `X` is the index state and `Y`
//! the work-tree state. A line can count as both staged and changed (`MM`), but
//! untracked and conflicted lines count once and nowhere else.

/// Index/work-tree pairs that mark an unmerged path
pub const CONFLICT_CODES: [(u8, u8); 7] = [
    (b'A', b'A'),
    (b'A', b'U'),
    (b'D', b'D'),
    (b'D', b'U'),
    (b'U', b'A'),
    (b'U', b'D'),
    (b'U', b'U'),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkingTreeStats {
    pub staged: u32,
    pub changed: u32,
    pub conflicts: u32,
    pub untracked: u32,
}

impl WorkingTreeStats {
    /// Fold one status line into the counts.
    pub fn record(&mut self, line: &str) {
        let &[x, y, ..] = line.as_bytes() else {
            log::debug!("Skipping short status line {line:?}");
            return;
        };

        if x == b'?' {
            self.untracked += 1;
            return;
        }

        if is_conflict(x, y) {
            self.conflicts += 1;
            return;
        }

        if matches!(x, b'A' | b'C' | b'D' | b'M' | b'R') {
            self.staged += 1;
        }
        if matches!(y, b'C' | b'D' | b'M' | b'R') {
            self.changed += 1;
        }
    }
}

pub fn is_conflict(x: u8, y: u8) -> bool {
    CONFLICT_CODES.contains(&(x, y))
}

/// Classify every per-file line (the header excluded).
pub fn parse_stats<I, S>(lines: I) -> WorkingTreeStats
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut stats = WorkingTreeStats::default();
    for line in lines {
        stats.record(line.as_ref());
    }
    stats
}
