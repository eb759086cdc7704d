pub mod traits;
pub mod adjacency;
pub mod document;
pub mod generators;

pub use traits::{Graph, MutableGraph, Vertex};
pub use adjacency::AdjacencyGraph;
pub use document::{sample_graph, GraphDocument};
