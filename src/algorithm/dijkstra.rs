use std::collections::HashMap;
use std::fmt::Debug;
use log::{debug, trace};
use num_traits::{Float, Zero};

use crate::graph::{Graph, Vertex};
use crate::algorithm::{RunStats, ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::PriorityFrontier;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm over a lazily pruned binary-heap frontier
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

/// Gives every vertex the run knows about an infinite distance and no predecessor.
///
/// The universe is every key of the graph plus every edge destination. Edges
/// are scanned here anyway, so an invalid weight anywhere in the graph fails
/// the run before any relaxation.
fn initial_maps<V, W, G>(graph: &G) -> Result<(HashMap<V, W>, HashMap<V, Option<V>>)>
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
    G: Graph<V, W> + ?Sized,
{
    let mut distances = HashMap::with_capacity(graph.vertex_count());
    let mut predecessors = HashMap::with_capacity(graph.vertex_count());

    for vertex in graph.vertices() {
        if !distances.contains_key(vertex) {
            distances.insert(vertex.clone(), W::infinity());
            predecessors.insert(vertex.clone(), None);
        }
        for (target, weight) in graph.outgoing_edges(vertex) {
            if is_invalid(weight) {
                return Err(invalid_weight(vertex, target, weight));
            }
            if !distances.contains_key(target) {
                distances.insert(target.clone(), W::infinity());
                predecessors.insert(target.clone(), None);
            }
        }
    }

    Ok((distances, predecessors))
}

fn is_invalid<W: Float + Zero>(weight: W) -> bool {
    weight.is_nan() || weight < W::zero()
}

fn invalid_weight<V: Vertex, W: Float>(from: &V, to: &V, weight: W) -> Error {
    Error::InvalidWeight {
        from: format!("{:?}", from),
        to: format!("{:?}", to),
        weight: weight.to_f64().unwrap_or(f64::NAN),
    }
}

impl<V, W, G> ShortestPathAlgorithm<V, W, G> for Dijkstra
where
    V: Vertex,
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<V, W> + ?Sized,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &V) -> Result<ShortestPathResult<V, W>> {
        let (mut distances, mut predecessors) = initial_maps(graph)?;

        // A source outside the graph is an isolated vertex
        distances.insert(source.clone(), W::zero());
        predecessors.insert(source.clone(), None);

        let mut stats = RunStats::default();
        let mut frontier = PriorityFrontier::with_capacity(graph.vertex_count().max(1));
        frontier.push(W::zero(), source.clone());
        stats.entries_pushed += 1;

        // Main Dijkstra loop
        while let Some((dist_u, u)) = frontier.pop_min() {
            stats.entries_popped += 1;

            // Only the entry matching the current distance is authoritative
            if distances.get(&u) != Some(&dist_u) {
                stats.stale_skipped += 1;
                continue;
            }
            stats.vertices_settled += 1;
            trace!("settled {:?} at distance {:?}", u, dist_u);

            // Relax all outgoing edges
            for (v, weight) in graph.outgoing_edges(&u) {
                stats.edges_scanned += 1;
                if is_invalid(weight) {
                    debug!(
                        "aborting run from {:?}: edge {:?} -> {:?} has weight {:?}",
                        source, u, v, weight
                    );
                    return Err(invalid_weight(&u, v, weight));
                }

                // Vertices the graph never listed start out infinitely far
                let candidate = dist_u + weight;
                let current = distances.get(v).copied().unwrap_or_else(W::infinity);

                if candidate < current {
                    distances.insert(v.clone(), candidate);
                    predecessors.insert(v.clone(), Some(u.clone()));
                    frontier.push(candidate, v.clone());
                    stats.relaxations += 1;
                    stats.entries_pushed += 1;
                }
            }
        }

        debug!(
            "Dijkstra from {:?}: settled {} of {} vertices, {} relaxations, {} stale entries skipped",
            source,
            stats.vertices_settled,
            distances.len(),
            stats.relaxations,
            stats.stale_skipped
        );

        Ok(ShortestPathResult::new(distances, predecessors, source.clone(), stats))
    }
}
