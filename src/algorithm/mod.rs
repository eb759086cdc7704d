pub mod traits;
pub mod dijkstra;
pub mod path;

pub use traits::{RunStats, ShortestPathAlgorithm, ShortestPathResult};
pub use path::{path_cost, reconstruct};
