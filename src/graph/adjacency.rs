use crate::graph::traits::{Graph, MutableGraph, Vertex};
use num_traits::{Float, Zero};
use std::collections::HashMap;
use std::fmt::Debug;

/// A directed graph implementation using adjacency lists keyed by vertex
///
/// Vertices iterate in the order they were first added.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<V, W>
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
{
    /// Vertices in insertion order
    vertices: Vec<V>,

    /// Position of each vertex in `vertices` and `outgoing_edges`
    index: HashMap<V, usize>,

    /// Outgoing edges for each vertex: [(target_vertex, weight)]
    outgoing_edges: Vec<Vec<(V, W)>>,
}

impl<V, W> AdjacencyGraph<V, W>
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        AdjacencyGraph {
            vertices: Vec::new(),
            index: HashMap::new(),
            outgoing_edges: Vec::new(),
        }
    }

    /// Creates a new empty graph with room for the given number of vertices
    pub fn with_capacity(vertices: usize) -> Self {
        AdjacencyGraph {
            vertices: Vec::with_capacity(vertices),
            index: HashMap::with_capacity(vertices),
            outgoing_edges: Vec::with_capacity(vertices),
        }
    }

    /// Builds an undirected graph from a list of edges, inserting each both ways
    pub fn undirected<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V, W)>,
    {
        let mut graph = Self::new();
        for (a, b, weight) in edges {
            graph.add_undirected_edge(a, b, weight);
        }
        graph
    }

    fn slot(&mut self, vertex: V) -> usize {
        if let Some(&idx) = self.index.get(&vertex) {
            return idx;
        }
        let idx = self.vertices.len();
        self.index.insert(vertex.clone(), idx);
        self.vertices.push(vertex);
        self.outgoing_edges.push(Vec::new());
        idx
    }
}

impl<V, W> Default for AdjacencyGraph<V, W>
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W> Graph<V, W> for AdjacencyGraph<V, W>
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.outgoing_edges.iter().map(|edges| edges.len()).sum()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.vertices.iter())
    }

    fn outgoing_edges(&self, vertex: &V) -> Box<dyn Iterator<Item = (&V, W)> + '_> {
        match self.index.get(vertex) {
            Some(&idx) => Box::new(
                self.outgoing_edges[idx]
                    .iter()
                    .map(|(target, weight)| (target, *weight)),
            ),
            None => Box::new(std::iter::empty()),
        }
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }
}

impl<V, W> MutableGraph<V, W> for AdjacencyGraph<V, W>
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
{
    fn add_vertex(&mut self, vertex: V) -> bool {
        if self.has_vertex(&vertex) {
            return false;
        }
        self.slot(vertex);
        true
    }

    fn add_edge(&mut self, from: V, to: V, weight: W) {
        let from_idx = self.slot(from);
        self.slot(to.clone());
        self.outgoing_edges[from_idx].push((to, weight));
    }

    fn remove_edge(&mut self, from: &V, to: &V) -> bool {
        match self.index.get(from) {
            Some(&idx) => {
                let edges = &mut self.outgoing_edges[idx];
                let len_before = edges.len();
                edges.retain(|(target, _)| target != to);
                len_before > edges.len()
            }
            None => false,
        }
    }
}

impl<V, W> FromIterator<(V, V, W)> for AdjacencyGraph<V, W>
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
{
    fn from_iter<I: IntoIterator<Item = (V, V, W)>>(edges: I) -> Self {
        let mut graph = Self::new();
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight);
        }
        graph
    }
}

/// A bare adjacency map is a graph too. Edge destinations that are not keys
/// have no outgoing edges.
impl<V, W> Graph<V, W> for HashMap<V, Vec<(V, W)>>
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.len()
    }

    fn edge_count(&self) -> usize {
        self.values().map(|edges| edges.len()).sum()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.keys())
    }

    fn outgoing_edges(&self, vertex: &V) -> Box<dyn Iterator<Item = (&V, W)> + '_> {
        match self.get(vertex) {
            Some(edges) => Box::new(edges.iter().map(|(target, weight)| (target, *weight))),
            None => Box::new(std::iter::empty()),
        }
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.contains_key(vertex)
    }
}
