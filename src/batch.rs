//! Independent runs from several start vertices over one shared graph.
//!
//! The graph is only borrowed immutably. Each run owns its own maps and
//! frontier, so runs are executed in parallel with rayon.

use std::fmt::Debug;

use log::debug;
use num_traits::{Float, Zero};
use rayon::prelude::*;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{Graph, Vertex};
use crate::Result;

/// Runs `algorithm` once per start vertex.
///
/// Results come back in the order of `sources`. A failing run does not affect
/// the others.
pub fn compute_many<A, V, W, G>(
    algorithm: &A,
    graph: &G,
    sources: &[V],
) -> Vec<Result<ShortestPathResult<V, W>>>
where
    A: ShortestPathAlgorithm<V, W, G> + Sync,
    V: Vertex + Send + Sync,
    W: Float + Zero + Debug + Copy + Send,
    G: Graph<V, W> + Sync + ?Sized,
{
    debug!(
        "running {} from {} sources in parallel",
        algorithm.name(),
        sources.len()
    );
    sources
        .par_iter()
        .map(|source| algorithm.compute_shortest_paths(graph, source))
        .collect()
}
