use std::collections::HashMap;
use std::fmt::Debug;
use num_traits::{Float, Zero};
use crate::algorithm::path::reconstruct;
use crate::graph::{Graph, Vertex};
use crate::Result;

/// Counters collected during one shortest-path run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Entries pushed onto the frontier, the seed included
    pub entries_pushed: usize,
    /// Entries popped from the frontier
    pub entries_popped: usize,
    /// Popped entries discarded because a shorter distance was already known
    pub stale_skipped: usize,
    /// Vertices whose outgoing edges were scanned
    pub vertices_settled: usize,
    /// Edges examined
    pub edges_scanned: usize,
    /// Edges that lowered a tentative distance
    pub relaxations: usize,
}

/// Result of a shortest path algorithm execution
///
/// The maps are read-only once returned. Every vertex of the graph, every edge
/// destination and the source have an entry; unreachable vertices hold an
/// infinite distance and no predecessor.
#[derive(Debug, Clone)]
pub struct ShortestPathResult<V, W>
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
{
    distances: HashMap<V, W>,
    predecessors: HashMap<V, Option<V>>,
    source: V,
    stats: RunStats,
}

impl<V, W> ShortestPathResult<V, W>
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
{
    pub(crate) fn new(
        distances: HashMap<V, W>,
        predecessors: HashMap<V, Option<V>>,
        source: V,
        stats: RunStats,
    ) -> Self {
        ShortestPathResult {
            distances,
            predecessors,
            source,
            stats,
        }
    }

    /// Source vertex of the run
    pub fn source(&self) -> &V {
        &self.source
    }

    /// Distance from the source to each vertex, infinite when unreachable
    pub fn distances(&self) -> &HashMap<V, W> {
        &self.distances
    }

    /// Predecessor of each vertex on its shortest path
    pub fn predecessors(&self) -> &HashMap<V, Option<V>> {
        &self.predecessors
    }

    /// Distance to a vertex, or `None` if the vertex is unknown to the run
    pub fn distance(&self, vertex: &V) -> Option<W> {
        self.distances.get(vertex).copied()
    }

    /// Predecessor of a vertex, `None` for the source and unreached vertices
    pub fn predecessor(&self, vertex: &V) -> Option<&V> {
        self.predecessors.get(vertex).and_then(|p| p.as_ref())
    }

    /// Returns true if the vertex has a finite distance
    pub fn is_reachable(&self, vertex: &V) -> bool {
        self.distance(vertex).map_or(false, |d| d.is_finite())
    }

    /// Shortest path from the source to `target`; empty when unreachable
    pub fn path_to(&self, target: &V) -> Vec<V> {
        reconstruct(&self.predecessors, &self.source, target)
    }

    /// Counters collected while computing this result
    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Consumes the result, returning the distance and predecessor maps
    pub fn into_maps(self) -> (HashMap<V, W>, HashMap<V, Option<V>>) {
        (self.distances, self.predecessors)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<V, W, G>
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
    G: Graph<V, W> + ?Sized,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: &V) -> Result<ShortestPathResult<V, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<V, W>, target: &V) -> Vec<V> {
        result.path_to(target)
    }
}
