//! Pairwise interior-disjoint path selection.
//!
//! # Greedy policy
//!
//! [`select_disjoint`] walks the paths once in the order given (depth-first
//! discovery order from the enumerator) and commits every path that does not
//! overlap one already committed.  It is order-dependent and does not
//! backtrack, so it can miss a larger disjoint set: on the diamond colony the
//! first discovered path `S-B-C-E` blocks both `S-B-E` and `S-C-E`.  Callers
//! must not sort the input; move logs depend on this order.
//!
//! [`select_maximum`] is the exact alternative.  It searches for a
//! maximum-cardinality disjoint subset and, among equally large subsets,
//! returns the one that comes first in discovery order.

use af_core::SelectionStrategy;
use af_graph::Path;
use tracing::debug;

/// Dispatch on `strategy`.
pub fn select(paths: &[Path], strategy: SelectionStrategy) -> Vec<Path> {
    let selected = match strategy {
        SelectionStrategy::Greedy  => select_disjoint(paths),
        SelectionStrategy::Maximum => select_maximum(paths),
    };
    debug!(%strategy, candidates = paths.len(), selected = selected.len(), "selected paths");
    selected
}

/// Greedy single pass in input order.  O(n² · L).
pub fn select_disjoint(paths: &[Path]) -> Vec<Path> {
    greedy_indices(paths).into_iter().map(|i| paths[i].clone()).collect()
}

fn greedy_indices(paths: &[Path]) -> Vec<usize> {
    let mut excluded = vec![false; paths.len()];
    let mut chosen   = Vec::new();

    for (i, path) in paths.iter().enumerate() {
        if excluded[i] {
            continue;
        }
        chosen.push(i);
        for (j, later) in paths.iter().enumerate().skip(i + 1) {
            if !excluded[j] && !path.is_disjoint(later) {
                excluded[j] = true;
            }
        }
    }
    chosen
}

/// Exact maximum disjoint subset by branch and bound.
///
/// Exponential in the worst case.  The greedy result seeds the bound, so the
/// search only ever improves on it.  Conflicts are tested on demand against
/// the remaining candidates, so memory stays linear in the number of paths
/// per recursion level.  Recursion depth is at most the size of a disjoint
/// set, which cannot exceed the room count plus one.
///
/// Dense colonies enumerate a huge number of paths; pair this with
/// `SearchLimits::max_paths` there.
pub fn select_maximum(paths: &[Path]) -> Vec<Path> {
    let mut best   = greedy_indices(paths);
    let mut chosen = Vec::new();
    let candidates: Vec<usize> = (0..paths.len()).collect();
    extend(paths, &candidates, &mut chosen, &mut best);

    best.sort_unstable();
    best.into_iter().map(|i| paths[i].clone()).collect()
}

/// Try every compatible extension of `chosen`, in index order.
///
/// Every entry of `candidates` is disjoint from every path in `chosen`.
fn extend(paths: &[Path], candidates: &[usize], chosen: &mut Vec<usize>, best: &mut Vec<usize>) {
    if chosen.len() > best.len() {
        best.clone_from(chosen);
    }
    for (k, &c) in candidates.iter().enumerate() {
        // Even taking every remaining candidate cannot beat `best`.
        if chosen.len() + (candidates.len() - k) <= best.len() {
            return;
        }
        let rest: Vec<usize> = candidates[k + 1..]
            .iter()
            .copied()
            .filter(|&d| paths[c].is_disjoint(&paths[d]))
            .collect();
        chosen.push(c);
        extend(paths, &rest, chosen, best);
        chosen.pop();
    }
}
