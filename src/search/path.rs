use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graphs::{Distance, Graph, Vertex};

/// Represents a request for the shortest distance between two cities.
///
/// Both vertices are checked against the graph on construction, so a
/// pathfinder can index by them without further validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShortestPathRequest {
    source: Vertex,
    target: Vertex,
}

impl ShortestPathRequest {
    pub fn new(graph: &Graph, source: Vertex, target: Vertex) -> Option<ShortestPathRequest> {
        if !graph.contains_vertex(source) || !graph.contains_vertex(target) {
            return None;
        }

        Some(ShortestPathRequest { source, target })
    }

    pub fn source(&self) -> Vertex {
        self.source
    }

    pub fn target(&self) -> Vertex {
        self.target
    }
}

/// Result of a shortest distance query. `Unreachable` is a regular answer,
/// not an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "distance", rename_all = "snake_case")]
pub enum ShortestPathOutcome {
    Reachable(Distance),
    Unreachable,
}

impl ShortestPathOutcome {
    pub fn distance(&self) -> Option<Distance> {
        match self {
            ShortestPathOutcome::Reachable(distance) => Some(*distance),
            ShortestPathOutcome::Unreachable => None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.distance().is_some()
    }
}

impl From<Option<Distance>> for ShortestPathOutcome {
    fn from(distance: Option<Distance>) -> Self {
        distance.map_or(ShortestPathOutcome::Unreachable, ShortestPathOutcome::Reachable)
    }
}

impl fmt::Display for ShortestPathOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShortestPathOutcome::Reachable(distance) => {
                write!(f, "Shortest path length: {}", distance)
            }
            ShortestPathOutcome::Unreachable => write!(f, "No path between the cities!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ShortestPathOutcome, ShortestPathRequest};
    use crate::graphs::graph_factory::GraphFactory;

    #[test]
    fn request_vertices_must_exist() {
        let graph = GraphFactory::from_file_text("3\n\n\n\n").unwrap();
        assert!(ShortestPathRequest::new(&graph, 1, 3).is_some());
        assert!(ShortestPathRequest::new(&graph, 2, 2).is_some());
        assert!(ShortestPathRequest::new(&graph, 0, 1).is_none());
        assert!(ShortestPathRequest::new(&graph, 1, 4).is_none());
    }

    #[test]
    fn outcome_lines() {
        assert_eq!(
            ShortestPathOutcome::Reachable(15).to_string(),
            "Shortest path length: 15"
        );
        assert_eq!(
            ShortestPathOutcome::Unreachable.to_string(),
            "No path between the cities!"
        );
    }

    #[test]
    fn outcome_json() {
        assert_eq!(
            serde_json::to_string(&ShortestPathOutcome::Reachable(7)).unwrap(),
            r#"{"outcome":"reachable","distance":7}"#
        );
        assert_eq!(
            serde_json::to_string(&ShortestPathOutcome::Unreachable).unwrap(),
            r#"{"outcome":"unreachable"}"#
        );
    }
}
