use tracing::trace;

use super::{
    path::{ShortestPathOutcome, ShortestPathRequest},
    PathFinding,
};
use crate::graphs::{Distance, Graph, Vertex};

/// Single source distances by repeated edge relaxation.
///
/// Runs exactly `number_of_vertices - 1` passes over all edges. Weights are
/// positive, so a shortest path has at most that many edges and there are no
/// negative cycles to detect. `distances[v - 1]` is `Distance::MAX` for
/// vertices not reachable from `source`.
pub fn bellman_ford_one_to_all(graph: &Graph, source: Vertex) -> Vec<Distance> {
    let mut distances = vec![Distance::MAX; graph.number_of_vertices() as usize];
    distances[source as usize - 1] = 0;

    for pass in 1..graph.number_of_vertices() {
        let mut relaxed = 0;
        for edge in graph.edges() {
            let distance_tail = distances[edge.tail() as usize - 1];
            if distance_tail == Distance::MAX {
                continue;
            }

            let alternative_distance_head = distance_tail + edge.weight();
            let distance_head = &mut distances[edge.head() as usize - 1];
            if alternative_distance_head < *distance_head {
                *distance_head = alternative_distance_head;
                relaxed += 1;
            }
        }
        trace!(pass, relaxed, "relaxation pass");
    }

    distances
}

pub fn bellman_ford_one_to_one(graph: &Graph, source: Vertex, target: Vertex) -> ShortestPathOutcome {
    let distance = bellman_ford_one_to_all(graph, source)[target as usize - 1];
    Some(distance)
        .filter(|&distance| distance != Distance::MAX)
        .into()
}

pub struct BellmanFord<'a> {
    graph: &'a Graph,
}

impl<'a> BellmanFord<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        BellmanFord { graph }
    }
}

impl<'a> PathFinding for BellmanFord<'a> {
    fn shortest_path_distance(&self, request: &ShortestPathRequest) -> ShortestPathOutcome {
        bellman_ford_one_to_one(self.graph, request.source(), request.target())
    }

    fn number_of_vertices(&self) -> u32 {
        self.graph.number_of_vertices()
    }
}
