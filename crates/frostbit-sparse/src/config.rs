//! Sparse set configuration.

use frostbit_core::FreezePolicy;

use crate::error::SparseSetError;

/// Configuration for a [`SparseSet`](crate::SparseSet).
///
/// Validated at construction; immutable afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SparseSetConfig {
    /// Universe size `n`: the set holds values in `0..n`.
    pub universe: usize,

    /// Policy for values committed by reads of never-written cells.
    ///
    /// Set behaviour does not depend on it; it only changes which garbage
    /// the membership test sees. Default: [`FreezePolicy::default`].
    pub policy: FreezePolicy,
}

impl SparseSetConfig {
    /// Largest supported universe: each of the two `usize` arrays must fit
    /// in `isize::MAX` bytes.
    pub const MAX_UNIVERSE: usize = isize::MAX as usize / std::mem::size_of::<usize>();

    /// Config for the universe `0..universe` with the default policy.
    pub fn new(universe: usize) -> Self {
        Self {
            universe,
            policy: FreezePolicy::default(),
        }
    }

    /// Replace the freeze policy.
    pub fn with_policy(mut self, policy: FreezePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Check that the universe can be allocated.
    pub fn validate(&self) -> Result<(), SparseSetError> {
        if self.universe > Self::MAX_UNIVERSE {
            return Err(SparseSetError::UniverseTooLarge {
                universe: self.universe,
                max: Self::MAX_UNIVERSE,
            });
        }
        Ok(())
    }

    /// Bytes of backing storage for both arrays (values only, excluding
    /// shadow bytes).
    pub fn memory_bytes(&self) -> usize {
        self.universe
            .saturating_mul(2 * std::mem::size_of::<usize>())
    }
}

impl Default for SparseSetConfig {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn universe_preserved() {
        let config = SparseSetConfig::new(10_000);
        assert_eq!(config.universe, 10_000);
        assert_eq!(config.policy, FreezePolicy::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn with_policy_replaces_policy() {
        let config = SparseSetConfig::new(4).with_policy(FreezePolicy::Zeroed);
        assert_eq!(config.policy, FreezePolicy::Zeroed);
    }

    #[test]
    fn oversized_universe_rejected() {
        let config = SparseSetConfig::new(usize::MAX);
        assert!(matches!(
            config.validate(),
            Err(SparseSetError::UniverseTooLarge { .. })
        ));
    }

    #[test]
    fn max_universe_accepted() {
        assert!(SparseSetConfig::new(SparseSetConfig::MAX_UNIVERSE)
            .validate()
            .is_ok());
    }

    #[test]
    fn memory_bytes_counts_both_arrays() {
        let config = SparseSetConfig::new(100);
        assert_eq!(config.memory_bytes(), 200 * std::mem::size_of::<usize>());
    }

    #[test]
    fn memory_bytes_saturates() {
        assert_eq!(SparseSetConfig::new(usize::MAX).memory_bytes(), usize::MAX);
    }
}
