//! Integration test: every operation touches a bounded number of cells,
//! independent of the universe size and of how many members the set holds.

use frostbit_core::AccessStats;
use frostbit_sparse::SparseSet;

/// Cell accesses performed by `f`.
fn cost(set: &mut SparseSet, f: impl FnOnce(&mut SparseSet)) -> AccessStats {
    let before = set.access_stats();
    f(set);
    set.access_stats().since(before)
}

fn populated(universe: usize) -> SparseSet {
    let mut set = SparseSet::new(universe);
    set.extend((0..universe).step_by(2));
    set
}

#[test]
fn contains_reads_at_most_two_cells() {
    for universe in [8, 1 << 10, 1 << 16] {
        let mut set = populated(universe);
        let hit = cost(&mut set, |s| assert!(s.contains(0)));
        let miss = cost(&mut set, |s| assert!(!s.contains(1)));
        assert!(hit.reads <= 2 && hit.writes == 0, "universe {universe}: {hit:?}");
        assert!(miss.reads <= 2 && miss.writes == 0, "universe {universe}: {miss:?}");
    }
}

#[test]
fn insert_touches_at_most_four_cells() {
    for universe in [8, 1 << 10, 1 << 16] {
        let mut set = populated(universe);
        let fresh = cost(&mut set, |s| assert!(s.insert(universe - 1)));
        let dup = cost(&mut set, |s| assert!(!s.insert(0)));
        assert!(fresh.accesses() <= 4, "universe {universe}: {fresh:?}");
        assert_eq!(fresh.writes, 2);
        assert!(dup.accesses() <= 2 && dup.writes == 0, "universe {universe}: {dup:?}");
    }
}

#[test]
fn remove_touches_at_most_six_cells() {
    for universe in [8, 1 << 10, 1 << 16] {
        let mut set = populated(universe);
        let hit = cost(&mut set, |s| assert!(s.remove(0)));
        let miss = cost(&mut set, |s| assert!(!s.remove(1)));
        assert!(hit.accesses() <= 6, "universe {universe}: {hit:?}");
        assert_eq!(hit.writes, 2);
        assert!(miss.accesses() <= 2 && miss.writes == 0, "universe {universe}: {miss:?}");
    }
}

#[test]
fn clear_touches_nothing() {
    for universe in [8, 1 << 10, 1 << 16] {
        let mut set = populated(universe);
        let c = cost(&mut set, |s| s.clear());
        assert_eq!(c, AccessStats::default(), "universe {universe}");
    }
}

#[test]
fn construction_commits_nothing() {
    let set = SparseSet::new(1 << 20);
    assert_eq!(set.access_stats(), AccessStats::default());
}
