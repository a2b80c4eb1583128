//! Shortest road lengths between cities of a small directed graph.
//!
//! Graphs are built either from console entries or from a text file of
//! incidence lists with weights, and queried with Bellman-Ford relaxation.

use std::path::Path;

use error::Result;
use graphs::{graph_factory::GraphFactory, Vertex};
use search::{
    bellman_ford::BellmanFord,
    path::{ShortestPathOutcome, ShortestPathRequest},
    PathFinding,
};

pub mod console;
pub mod error;
pub mod graphs;
pub mod report;
pub mod search;
pub mod utility;

pub use error::{BuildError, Error};
pub use graphs::Graph;

/// Reads the graph at `path` and answers a single query on it.
pub fn shortest_path_from_file(
    path: &Path,
    source: Vertex,
    target: Vertex,
) -> Result<ShortestPathOutcome> {
    let graph = GraphFactory::from_file(path)?;
    let request = ShortestPathRequest::new(&graph, source, target).ok_or_else(|| {
        Error::InvalidInput(format!(
            "cities {} and {} must be between 1 and {}",
            source,
            target,
            graph.number_of_vertices()
        ))
    })?;
    Ok(BellmanFord::new(&graph).shortest_path_distance(&request))
}
