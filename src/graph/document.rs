//! JSON adjacency documents.
//!
//! ```json
//! {
//!   "directed": false,
//!   "adjacency": {
//!     "A": [["B", 4.0], ["C", 2.0]],
//!     "B": [["C", 1.0]]
//!   }
//! }
//! ```
//!
//! Keys are read in sorted order so the resulting graph is the same on every
//! load. Weights are stored as written; negative ones surface as an error only
//! when a shortest-path run reaches them.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::graph::{AdjacencyGraph, MutableGraph};
use crate::{Error, Result};

/// Serialized form of a weighted graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphDocument {
    /// When false every listed edge is inserted in both directions
    #[serde(default = "default_directed")]
    pub directed: bool,
    pub adjacency: BTreeMap<String, Vec<(String, f64)>>,
}

fn default_directed() -> bool {
    true
}

impl GraphDocument {
    /// Parses a document from JSON text
    pub fn from_json_str(text: &str) -> Result<Self> {
        let document: GraphDocument = serde_json::from_str(text)?;
        document.check()?;
        Ok(document)
    }

    /// Reads and parses a document from a file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    fn check(&self) -> Result<()> {
        for (vertex, edges) in &self.adjacency {
            if vertex.is_empty() {
                return Err(Error::GraphFormat("vertex names must not be empty".to_string()));
            }
            if let Some((_, weight)) = edges.iter().find(|(target, _)| target.is_empty()) {
                return Err(Error::GraphFormat(format!(
                    "edge from {vertex} with weight {weight} has an empty destination"
                )));
            }
        }
        Ok(())
    }

    /// Builds the in-memory graph
    pub fn to_graph(&self) -> AdjacencyGraph<String, OrderedFloat<f64>> {
        let mut graph = AdjacencyGraph::with_capacity(self.adjacency.len());
        for (vertex, edges) in &self.adjacency {
            graph.add_vertex(vertex.clone());
            for (target, weight) in edges {
                let weight = OrderedFloat(*weight);
                if self.directed {
                    graph.add_edge(vertex.clone(), target.clone(), weight);
                } else {
                    graph.add_undirected_edge(vertex.clone(), target.clone(), weight);
                }
            }
        }
        graph
    }
}

/// The six-vertex weighted sample graph, A through F, undirected.
pub fn sample_graph() -> AdjacencyGraph<String, OrderedFloat<f64>> {
    let edges = [
        ("A", "B", 4.0),
        ("A", "C", 2.0),
        ("B", "C", 1.0),
        ("B", "D", 5.0),
        ("C", "D", 8.0),
        ("C", "E", 10.0),
        ("D", "E", 2.0),
        ("D", "F", 6.0),
        ("E", "F", 3.0),
    ];
    AdjacencyGraph::undirected(
        edges
            .iter()
            .map(|&(a, b, w)| (a.to_string(), b.to_string(), OrderedFloat(w))),
    )
}
