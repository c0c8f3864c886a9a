//! Benchmark profiles and baselines for frostbit.
//!
//! - [`UNIVERSES`]: universe sizes the sparse set benchmarks sweep over
//! - [`half_full`]: a set holding every even value of its universe
//! - [`ZeroedSparseSet`]: the classic sparse set that zero-fills both arrays
//!   at construction, as a baseline for construction cost

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use frostbit_core::FreezePolicy;
use frostbit_sparse::{SparseSet, SparseSetConfig};

/// Universe sizes swept by the per-operation benchmarks. Per-op time should
/// be flat across them.
pub const UNIVERSES: [usize; 4] = [1 << 8, 1 << 12, 1 << 16, 1 << 20];

/// A set over `0..universe` holding every even value.
pub fn half_full(universe: usize, policy: FreezePolicy) -> SparseSet {
    let mut set = SparseSet::with_config(SparseSetConfig::new(universe).with_policy(policy));
    set.extend((0..universe).step_by(2));
    set
}

/// Deterministic pseudo-random probe sequence over `0..universe`.
///
/// An empty universe has no valid probes, so the result is empty.
pub fn probes(universe: usize, count: usize) -> Vec<usize> {
    if universe == 0 {
        return Vec::new();
    }
    let mut x: u64 = 0x2545_f491_4f6c_dd1d;
    (0..count)
        .map(|_| {
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            (x % universe as u64) as usize
        })
        .collect()
}

/// Sparse set whose arrays are zero-filled up front.
pub struct ZeroedSparseSet {
    dense: Vec<usize>,
    sparse: Vec<usize>,
    size: usize,
}

impl ZeroedSparseSet {
    pub fn new(universe: usize) -> Self {
        // Fill with a non-zero value so the allocator cannot hand back
        // pre-zeroed pages for free.
        Self {
            dense: vec![usize::MAX; universe],
            sparse: vec![usize::MAX; universe],
            size: 0,
        }
    }

    pub fn contains(&self, value: usize) -> bool {
        let i = self.sparse[value];
        i < self.size && self.dense[i] == value
    }

    pub fn insert(&mut self, value: usize) -> bool {
        if self.contains(value) {
            return false;
        }
        self.dense[self.size] = value;
        self.sparse[value] = self.size;
        self.size += 1;
        true
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_full_holds_evens() {
        let set = half_full(16, FreezePolicy::Zeroed);
        assert_eq!(set.len(), 8);
        assert!(set.contains(4));
        assert!(!set.contains(5));
    }

    #[test]
    fn probes_stay_in_universe() {
        assert!(probes(100, 1000).iter().all(|&p| p < 100));
    }

    #[test]
    fn probes_of_empty_universe_are_empty() {
        assert!(probes(0, 16).is_empty());
    }

    #[test]
    fn zeroed_baseline_behaves_like_a_set() {
        let mut set = ZeroedSparseSet::new(8);
        assert!(set.is_empty());
        assert!(set.insert(3));
        assert!(!set.insert(3));
        assert!(set.contains(3));
        assert!(!set.contains(4));
        assert_eq!(set.len(), 1);
    }
}
