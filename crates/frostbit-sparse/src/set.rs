//! The sparse set.

use std::fmt;

use frostbit_core::{AccessStats, FrozenArray};

use crate::config::SparseSetConfig;
use crate::error::SparseSetError;

/// A set of values from the fixed universe `0..n`.
///
/// `contains`, `insert`, `remove` and `clear` are O(1) worst case and never
/// allocate. Construction allocates both backing arrays but does not
/// initialise them.
///
/// # Panics
///
/// `contains`, `insert` and `remove` panic if the value is outside the
/// universe.
///
/// ```
/// use frostbit_sparse::SparseSet;
///
/// let mut set = SparseSet::new(4);
/// assert!(!set.contains(2));
/// set.insert(2);
/// set.insert(0);
/// set.remove(2);
/// assert!(!set.contains(2));
/// assert!(set.contains(0));
/// set.clear();
/// assert!(!set.contains(0));
/// ```
pub struct SparseSet {
    /// Dense members; positions `0..size` are written.
    elements: FrozenArray<'static, usize>,
    /// Value → position in `elements`; written for every value ever inserted.
    index_of: FrozenArray<'static, usize>,
    size: usize,
    universe: usize,
}

impl SparseSet {
    /// Create an empty set over `0..universe` with the default policy.
    ///
    /// # Panics
    ///
    /// Panics if `universe` exceeds [`SparseSetConfig::MAX_UNIVERSE`].
    pub fn new(universe: usize) -> Self {
        Self::with_config(SparseSetConfig::new(universe))
    }

    /// Create an empty set from a config.
    ///
    /// # Panics
    ///
    /// Panics if the config does not validate.
    pub fn with_config(config: SparseSetConfig) -> Self {
        match Self::try_with_config(config) {
            Ok(set) => set,
            Err(e) => panic!("invalid sparse set config: {e}"),
        }
    }

    /// Create an empty set from a config, reporting invalid configs.
    pub fn try_with_config(config: SparseSetConfig) -> Result<Self, SparseSetError> {
        config.validate()?;
        log::debug!(
            "sparse set: universe {}, policy {}, {} value bytes",
            config.universe,
            config.policy,
            config.memory_bytes()
        );
        Ok(Self {
            elements: FrozenArray::new_uninit(config.universe, config.policy),
            index_of: FrozenArray::new_uninit(config.universe, config.policy),
            size: 0,
            universe: config.universe,
        })
    }

    /// Remove every value. O(1): only the size is reset.
    pub fn clear(&mut self) {
        log::trace!("sparse set clear: {} members dropped", self.size);
        self.size = 0;
    }

    /// Whether `value` is a member.
    #[doc(alias = "find")]
    pub fn contains(&self, value: usize) -> bool {
        self.check(value);
        // May be a committed arbitrary value if `value` was never inserted.
        let i = self.index_of.read(value);
        i < self.size && self.elements.read(i) == value
    }

    /// Add `value`. Returns `false` if it was already a member.
    pub fn insert(&mut self, value: usize) -> bool {
        if self.contains(value) {
            return false;
        }
        self.index_of.write(value, self.size);
        self.elements.write(self.size, value);
        self.size += 1;
        true
    }

    /// Remove `value`. Returns `false` if it was not a member.
    pub fn remove(&mut self, value: usize) -> bool {
        if !self.contains(value) {
            return false;
        }
        self.size -= 1;
        let i = self.index_of.read(value);
        let last = self.elements.read(self.size);
        self.elements.write(i, last);
        self.index_of.write(last, i);
        true
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the set has no members.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Universe size `n`.
    pub fn universe(&self) -> usize {
        self.universe
    }

    /// Iterate members in dense (insertion, modulo removals) order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            set: self,
            position: 0,
        }
    }

    /// Members collected in dense order.
    pub fn as_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }

    /// Cell access counters summed over both backing arrays.
    pub fn access_stats(&self) -> AccessStats {
        self.elements.stats() + self.index_of.stats()
    }

    fn check(&self, value: usize) {
        assert!(
            value < self.universe,
            "value {value} outside sparse set universe 0..{}",
            self.universe
        );
    }
}

impl fmt::Debug for SparseSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Extend<usize> for SparseSet {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a> IntoIterator for &'a SparseSet {
    type Item = usize;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`SparseSet`]'s members in dense order.
pub struct Iter<'a> {
    set: &'a SparseSet,
    position: usize,
}

impl Iterator for Iter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.position >= self.set.size {
            return None;
        }
        let value = self.set.elements.read(self.position);
        self.position += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.set.size - self.position;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_set_is_empty() {
        let set = SparseSet::new(16);
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.universe(), 16);
        assert!((0..16).all(|x| !set.contains(x)));
    }

    #[test]
    fn insert_is_idempotent() {
        let mut set = SparseSet::new(8);
        assert!(set.insert(3));
        assert!(!set.insert(3));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut set = SparseSet::new(8);
        set.insert(1);
        assert!(!set.remove(2));
        assert_eq!(set.as_vec(), vec![1]);
    }

    #[test]
    fn remove_moves_last_into_hole() {
        let mut set = SparseSet::new(8);
        set.extend([5, 6, 7]);
        assert!(set.remove(5));
        assert_eq!(set.as_vec(), vec![7, 6]);
        assert!(set.contains(7));
        assert!(set.contains(6));
        assert!(!set.contains(5));
    }

    #[test]
    fn remove_last_member() {
        let mut set = SparseSet::new(4);
        set.insert(2);
        assert!(set.remove(2));
        assert!(set.is_empty());
        assert!(!set.contains(2));
        assert!(set.insert(2));
        assert!(set.contains(2));
    }

    #[test]
    fn stale_index_after_clear_is_rejected() {
        let mut set = SparseSet::new(8);
        set.extend([0, 1, 2]);
        set.clear();
        // index_of still holds 0, 1, 2 for these values, but size is 0.
        assert!(!set.contains(0));
        set.insert(4);
        // index_of[0] == 0 < size, but elements[0] is now 4.
        assert!(!set.contains(0));
        assert!(set.contains(4));
    }

    #[test]
    fn clear_touches_no_cells() {
        let mut set = SparseSet::new(32);
        set.extend(0..10);
        let before = set.access_stats();
        set.clear();
        assert_eq!(set.access_stats().since(before).accesses(), 0);
        assert_eq!(set.elements.written_count(), 10);
        assert_eq!(set.index_of.written_count(), 10);
    }

    #[test]
    fn set_can_move_between_threads() {
        fn assert_send<T: Send>() {}
        assert_send::<SparseSet>();

        let mut set = SparseSet::new(8);
        set.insert(5);
        let set = std::thread::spawn(move || {
            set.insert(6);
            set
        })
        .join()
        .unwrap();
        assert_eq!(set.as_vec(), vec![5, 6]);
    }

    #[test]
    fn debug_lists_members() {
        let mut set = SparseSet::new(8);
        set.extend([1, 4]);
        assert_eq!(format!("{set:?}"), "{1, 4}");
    }

    #[test]
    fn iter_is_exact_size() {
        let mut set = SparseSet::new(8);
        set.extend([1, 2, 3]);
        let mut it = set.iter();
        assert_eq!(it.len(), 3);
        it.next();
        assert_eq!(it.len(), 2);
        let total: usize = (&set).into_iter().sum();
        assert_eq!(total, 6);
    }

    #[test]
    fn empty_universe() {
        let set = SparseSet::new(0);
        assert!(set.is_empty());
        assert_eq!(set.iter().count(), 0);
    }

    #[test]
    #[should_panic(expected = "outside sparse set universe")]
    fn contains_out_of_universe_panics() {
        let set = SparseSet::new(4);
        set.contains(4);
    }

    #[test]
    #[should_panic(expected = "outside sparse set universe")]
    fn insert_out_of_universe_panics() {
        let mut set = SparseSet::new(4);
        set.insert(100);
    }

    #[test]
    fn try_with_config_rejects_oversized_universe() {
        let result = SparseSet::try_with_config(SparseSetConfig::new(usize::MAX));
        assert!(matches!(
            result,
            Err(SparseSetError::UniverseTooLarge { .. })
        ));
    }
}
