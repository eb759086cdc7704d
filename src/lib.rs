//! Lazy SSSP - Single-Source Shortest Paths with a lazily pruned frontier
//!
//! This library computes shortest distances from one start vertex to every
//! vertex of a directed graph with real non-negative edge weights, and
//! reconstructs concrete paths from the resulting predecessor map.
//!
//! The frontier is a binary heap that never supports decrease-key: improved
//! distances are pushed as new entries and outdated ones are discarded when
//! they surface.

pub mod algorithm;
pub mod batch;
pub mod config;
pub mod data_structures;
pub mod graph;
pub mod report;

// Re-export main types for convenient use
pub use algorithm::{
    dijkstra::Dijkstra, path::reconstruct, RunStats, ShortestPathAlgorithm, ShortestPathResult,
};
pub use graph::adjacency::AdjacencyGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid edge weight {weight} on edge {from} -> {to}")]
    InvalidWeight {
        from: String,
        to: String,
        weight: f64,
    },

    #[error("Malformed graph document: {0}")]
    GraphFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::GraphFormat(err.to_string())
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
