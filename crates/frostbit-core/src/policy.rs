//! Freeze policy: which value a not-written cell commits to.

use std::fmt;

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Chooses the bytes a cell commits to on its first read while not-written.
///
/// Whatever the policy, the committed value is a pure function of
/// `(policy, slot)`: the same cell index under the same policy always
/// commits the same bytes. Code built on controlled reads must be correct
/// under *every* policy; the variants exist so tests can pick adversarial
/// garbage and benchmarks can pick cheap garbage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FreezePolicy {
    /// Every committed byte is `0x00`.
    Zeroed,
    /// Every committed byte is the given pattern.
    Filled(u8),
    /// Committed bytes come from a ChaCha8 stream keyed by `seed`, with the
    /// cell index selecting the stream.
    Scrambled {
        /// Seed for the keystream.
        seed: u64,
    },
}

impl FreezePolicy {
    /// Seed used by [`FreezePolicy::default`].
    pub const DEFAULT_SEED: u64 = 0x9e37_79b9_7f4a_7c15;

    /// Fill `bytes` with the value committed for cell `slot`.
    pub fn fill(&self, slot: usize, bytes: &mut [u8]) {
        match *self {
            Self::Zeroed => bytes.fill(0),
            Self::Filled(pattern) => bytes.fill(pattern),
            Self::Scrambled { seed } => {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                rng.set_stream(slot as u64);
                rng.fill_bytes(bytes);
            }
        }
    }
}

impl Default for FreezePolicy {
    fn default() -> Self {
        Self::Scrambled {
            seed: Self::DEFAULT_SEED,
        }
    }
}

impl fmt::Display for FreezePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zeroed => write!(f, "zeroed"),
            Self::Filled(pattern) => write!(f, "filled(0x{pattern:02x})"),
            Self::Scrambled { seed } => write!(f, "scrambled(seed=0x{seed:016x})"),
        }
    }
}
