use std::path::PathBuf;

use log::info;
use ordered_float::OrderedFloat;

use crate::algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm};
use crate::graph::{sample_graph, AdjacencyGraph, Graph, GraphDocument};
use crate::report::Report;
use crate::Result;

/// How a report is written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Configuration for one command-line run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// JSON graph document; the built-in sample graph is used when absent
    pub graph_path: Option<PathBuf>,
    pub start: String,
    /// Restrict the report to these targets; every vertex when empty
    pub targets: Vec<String>,
    pub format: OutputFormat,
    pub color: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            graph_path: None,
            start: "A".to_string(),
            targets: Vec::new(),
            format: OutputFormat::Text,
            color: false,
        }
    }
}

impl RunConfig {
    /// Loads the configured graph
    pub fn load_graph(&self) -> Result<AdjacencyGraph<String, OrderedFloat<f64>>> {
        match &self.graph_path {
            Some(path) => {
                let graph = GraphDocument::from_path(path)?.to_graph();
                info!(
                    "loaded {} with {} vertices and {} edges",
                    path.display(),
                    graph.vertex_count(),
                    graph.edge_count()
                );
                Ok(graph)
            }
            None => {
                info!("no graph file given, using the built-in sample graph");
                Ok(sample_graph())
            }
        }
    }
}

/// Loads the graph, computes shortest paths from the start vertex and
/// renders the report.
pub fn execute(config: &RunConfig) -> Result<String> {
    let graph = config.load_graph()?;
    let dijkstra = Dijkstra::new();
    let result = dijkstra.compute_shortest_paths(&graph, &config.start)?;

    let report = if config.targets.is_empty() {
        Report::from_result(&result)
    } else {
        Report::for_targets(&result, config.targets.iter())
    };
    info!(
        "{} of {} reported vertices reachable from {}",
        report.reachable_count(),
        report.entries.len(),
        config.start
    );

    match config.format {
        OutputFormat::Text => Ok(report.render(config.color)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&report)?),
    }
}
