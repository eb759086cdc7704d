//! Path reconstruction from a predecessor map.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;

use log::warn;
use num_traits::{Float, Zero};

use crate::graph::{Graph, Vertex};

/// Rebuilds the path from `start` to `target` by following predecessor links.
///
/// Walks back from `target` until a vertex without a predecessor, then
/// reverses. If that walk does not end at `start` the target is unreachable
/// and the result is empty. `target == start` gives `[start]`. A target with
/// no entry in the map is treated as having no predecessor.
pub fn reconstruct<V: Vertex>(
    predecessors: &HashMap<V, Option<V>>,
    start: &V,
    target: &V,
) -> Vec<V> {
    let mut path = vec![target.clone()];
    let mut seen: HashSet<&V> = HashSet::new();
    let mut current = target;
    seen.insert(current);

    while let Some(Some(prev)) = predecessors.get(current) {
        if !seen.insert(prev) {
            warn!("predecessor chain from {:?} loops at {:?}", target, prev);
            return Vec::new();
        }
        path.push(prev.clone());
        current = prev;
    }

    path.reverse();
    if path.first() != Some(start) {
        return Vec::new();
    }
    path
}

/// Total weight of a path, taking the cheapest edge for each hop.
///
/// Returns `None` if some consecutive pair is not joined by an edge. The empty
/// path has no cost; a single vertex costs zero.
pub fn path_cost<V, W, G>(graph: &G, path: &[V]) -> Option<W>
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
    G: Graph<V, W> + ?Sized,
{
    if path.is_empty() {
        return None;
    }
    path.windows(2).try_fold(W::zero(), |total, hop| {
        graph
            .get_edge_weight(&hop[0], &hop[1])
            .map(|weight| total + weight)
    })
}
