use std::fmt::Debug;
use std::hash::Hash;
use num_traits::{Float, Zero};

/// Bounds every vertex identifier must satisfy.
///
/// Vertices are opaque: only identity, hashing and cloning are needed.
pub trait Vertex: Clone + Eq + Hash + Debug {}

impl<T> Vertex for T where T: Clone + Eq + Hash + Debug {}

/// Trait representing a weighted directed graph
pub trait Graph<V, W>: Debug
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of vertices keyed in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the vertices keyed in the graph
    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_>;

    /// Returns the outgoing edges of a vertex in insertion order.
    ///
    /// A vertex that is not keyed in the graph has no outgoing edges.
    fn outgoing_edges(&self, vertex: &V) -> Box<dyn Iterator<Item = (&V, W)> + '_>;

    /// Returns true if the vertex is keyed in the graph
    fn has_vertex(&self, vertex: &V) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: &V, to: &V) -> bool {
        self.outgoing_edges(from).any(|(target, _)| target == to)
    }

    /// Gets the weight of the cheapest edge between two vertices, if any
    fn get_edge_weight(&self, from: &V, to: &V) -> Option<W> {
        self.outgoing_edges(from)
            .filter(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
            .fold(None, |best, weight| match best {
                Some(b) if b <= weight => Some(b),
                _ => Some(weight),
            })
    }
}

/// Trait for mutable graph operations
///
/// Weights are stored as given. Negative weights are only rejected when a
/// shortest-path run reaches them.
pub trait MutableGraph<V, W>: Graph<V, W>
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
{
    /// Adds a vertex with no outgoing edges. Returns false if it already existed.
    fn add_vertex(&mut self, vertex: V) -> bool;

    /// Appends a directed edge, keying both endpoints in the graph
    fn add_edge(&mut self, from: V, to: V, weight: W);

    /// Appends the edge in both directions
    fn add_undirected_edge(&mut self, a: V, b: V, weight: W) {
        self.add_edge(a.clone(), b.clone(), weight);
        self.add_edge(b, a, weight);
    }

    /// Removes every edge from `from` to `to`. Returns true if any was removed.
    fn remove_edge(&mut self, from: &V, to: &V) -> bool;
}
