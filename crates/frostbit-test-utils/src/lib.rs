//! Test utilities and reference models for frostbit development.
//!
//! Provides a [`SetModel`] oracle to check [`SparseSet`] against, a
//! [`SetOp`] vocabulary with a proptest strategy for random op sequences,
//! and freeze-policy fixtures in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::BTreeSet;

use frostbit_sparse::SparseSet;
use proptest::prelude::*;

/// One operation against a set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SetOp {
    Insert(usize),
    Remove(usize),
    Contains(usize),
    Clear,
}

/// Reference model: a `BTreeSet` with the sparse set's surface.
#[derive(Clone, Debug, Default)]
pub struct SetModel {
    members: BTreeSet<usize>,
}

impl SetModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, value: usize) -> bool {
        self.members.insert(value)
    }

    pub fn remove(&mut self, value: usize) -> bool {
        self.members.remove(&value)
    }

    pub fn contains(&self, value: usize) -> bool {
        self.members.contains(&value)
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn members(&self) -> &BTreeSet<usize> {
        &self.members
    }
}

/// Apply `op` to both the set and the model, returning `(set, model)`
/// results. `Clear` returns `(true, true)`.
pub fn apply(set: &mut SparseSet, model: &mut SetModel, op: SetOp) -> (bool, bool) {
    match op {
        SetOp::Insert(x) => (set.insert(x), model.insert(x)),
        SetOp::Remove(x) => (set.remove(x), model.remove(x)),
        SetOp::Contains(x) => (set.contains(x), model.contains(x)),
        SetOp::Clear => {
            set.clear();
            model.clear();
            (true, true)
        }
    }
}

/// Check that `set` agrees with `model` on every value of the universe.
///
/// Returns the first disagreeing value, if any.
pub fn first_disagreement(set: &SparseSet, model: &SetModel) -> Option<usize> {
    (0..set.universe()).find(|&x| set.contains(x) != model.contains(x))
}

/// Strategy for a single op over `0..universe`. Clears are rare so sets
/// grow large enough to exercise removal.
pub fn op(universe: usize) -> impl Strategy<Value = SetOp> {
    prop_oneof![
        4 => (0..universe).prop_map(SetOp::Insert),
        3 => (0..universe).prop_map(SetOp::Remove),
        3 => (0..universe).prop_map(SetOp::Contains),
        1 => Just(SetOp::Clear),
    ]
}

/// Strategy for a sequence of up to `max_len` ops over `0..universe`.
pub fn ops(universe: usize, max_len: usize) -> impl Strategy<Value = Vec<SetOp>> {
    proptest::collection::vec(op(universe), 0..max_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_tracks_set_semantics() {
        let mut model = SetModel::new();
        assert!(model.insert(3));
        assert!(!model.insert(3));
        assert_eq!(model.len(), 1);
        assert!(model.remove(3));
        assert!(model.is_empty());
    }

    #[test]
    fn apply_keeps_both_in_step() {
        let mut set = SparseSet::new(8);
        let mut model = SetModel::new();
        for op in [SetOp::Insert(1), SetOp::Insert(5), SetOp::Remove(1), SetOp::Contains(5)] {
            let (a, b) = apply(&mut set, &mut model, op);
            assert_eq!(a, b);
        }
        assert_eq!(first_disagreement(&set, &model), None);
    }
}
