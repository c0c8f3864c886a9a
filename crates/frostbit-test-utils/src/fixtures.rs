//! Freeze-policy fixtures.
//!
//! Containers built on controlled reads must behave identically whatever a
//! never-written cell commits to. These policies cover the interesting
//! cases for `usize` index cells:
//!
//! - zero, the smallest in-range index for any non-empty set;
//! - all-ones, the largest value;
//! - a repeated byte pattern that is far out of range;
//! - keystream garbage under two seeds.

use frostbit_core::FreezePolicy;
use frostbit_sparse::{SparseSet, SparseSetConfig};

/// Every policy a controlled-read container should be tested under.
pub const ALL_POLICIES: [FreezePolicy; 5] = [
    FreezePolicy::Zeroed,
    FreezePolicy::Filled(0xFF),
    FreezePolicy::Filled(0xA5),
    FreezePolicy::Scrambled {
        seed: FreezePolicy::DEFAULT_SEED,
    },
    FreezePolicy::Scrambled { seed: 7 },
];

/// The policy most likely to expose a missing equality check: every
/// committed index is 0, which is in range as soon as the set is non-empty.
pub fn adversarial_policy() -> FreezePolicy {
    FreezePolicy::Zeroed
}

/// One empty set per policy in [`ALL_POLICIES`].
pub fn sets_under_all_policies(universe: usize) -> Vec<(FreezePolicy, SparseSet)> {
    ALL_POLICIES
        .iter()
        .map(|&policy| {
            let config = SparseSetConfig::new(universe).with_policy(policy);
            (policy, SparseSet::with_config(config))
        })
        .collect()
}
