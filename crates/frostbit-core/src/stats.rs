//! Cell access counters.
//!
//! Every [`FrozenArray`](crate::FrozenArray) counts the reads, writes and
//! commits performed on its cells. Containers use the counters to show that
//! an operation touches a bounded number of cells regardless of capacity.

use std::cell::Cell;
use std::ops::Add;

/// Snapshot of cell access counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct AccessStats {
    /// Cell reads, controlled or checked.
    pub reads: u64,
    /// Cell stores.
    pub writes: u64,
    /// Reads that committed a value to a not-written cell.
    pub commits: u64,
}

impl AccessStats {
    /// Total cell accesses (reads plus writes).
    pub fn accesses(&self) -> u64 {
        self.reads + self.writes
    }

    /// Counters accumulated since an earlier snapshot.
    pub fn since(&self, earlier: AccessStats) -> AccessStats {
        AccessStats {
            reads: self.reads.saturating_sub(earlier.reads),
            writes: self.writes.saturating_sub(earlier.writes),
            commits: self.commits.saturating_sub(earlier.commits),
        }
    }
}

impl Add for AccessStats {
    type Output = AccessStats;

    fn add(self, rhs: AccessStats) -> AccessStats {
        AccessStats {
            reads: self.reads + rhs.reads,
            writes: self.writes + rhs.writes,
            commits: self.commits + rhs.commits,
        }
    }
}

/// Interior-mutable counters owned by an array.
#[derive(Default)]
pub(crate) struct StatsCell {
    reads: Cell<u64>,
    writes: Cell<u64>,
    commits: Cell<u64>,
}

impl StatsCell {
    pub(crate) fn record_read(&self, committed: bool) {
        self.reads.set(self.reads.get() + 1);
        if committed {
            self.commits.set(self.commits.get() + 1);
        }
    }

    pub(crate) fn record_write(&self) {
        self.writes.set(self.writes.get() + 1);
    }

    pub(crate) fn snapshot(&self) -> AccessStats {
        AccessStats {
            reads: self.reads.get(),
            writes: self.writes.get(),
            commits: self.commits.get(),
        }
    }
}
