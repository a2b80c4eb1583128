use std::{fs, path::Path};

use ahash::{HashSet, HashSetExt};
use itertools::Itertools;
use tracing::{debug, warn};

use super::{
    edge::{is_valid_weight, WeightedEdge},
    incidence_list::{IncidenceList, Rejection},
    Graph, Vertex, Weight, MAX_VERTEX_COUNT, MAX_WEIGHT, MIN_VERTEX_COUNT, MIN_WEIGHT,
};
use crate::error::{BuildError, Error, Result};

/// A console entry that was dropped while building an incidence list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RejectedEntry {
    pub vertex: Vertex,
    pub neighbor: Vertex,
    pub reason: Rejection,
}

#[derive(Clone)]
pub struct GraphFactory {}

impl GraphFactory {
    /// Builds an incidence list from raw per-vertex neighbor entries, where
    /// `neighbor_lists[i]` belongs to vertex `i + 1`.
    ///
    /// Self-loops, duplicates and out of range neighbors are skipped and
    /// returned alongside the list instead of failing the build.
    pub fn incidence_list_from_entries(
        vertex_count: u32,
        neighbor_lists: &[Vec<Vertex>],
    ) -> std::result::Result<(IncidenceList, Vec<RejectedEntry>), BuildError> {
        check_vertex_count(vertex_count)?;
        if neighbor_lists.len() > vertex_count as usize {
            warn!(
                vertex_count,
                lists = neighbor_lists.len(),
                "ignoring neighbor lists of unknown vertices"
            );
        }

        let mut incidence_list = IncidenceList::new(vertex_count);
        let mut rejected = Vec::new();
        for (vertex, neighbors) in (1..=vertex_count).zip(neighbor_lists) {
            for &neighbor in neighbors {
                if let Err(reason) = incidence_list.insert(vertex, neighbor) {
                    warn!(vertex, neighbor, %reason, "skipping neighbor");
                    rejected.push(RejectedEntry {
                        vertex,
                        neighbor,
                        reason,
                    });
                }
            }
        }

        Ok((incidence_list, rejected))
    }

    /// Assigns a weight to every incidence list entry. `weight_of` is asked
    /// once per `(tail, head)` pair, vertices ascending and each vertex's
    /// neighbors ascending, and the edges are stored in that order.
    pub fn from_incidence_list<F>(incidence_list: IncidenceList, mut weight_of: F) -> Result<Graph>
    where
        F: FnMut(Vertex, Vertex) -> Result<Weight>,
    {
        let mut edges = Vec::with_capacity(incidence_list.number_of_entries() as usize);
        for (tail, heads) in incidence_list.iter() {
            for &head in heads {
                let weight = weight_of(tail, head)?;
                let edge = WeightedEdge::new(tail, head, weight).ok_or_else(|| {
                    Error::InvalidInput(format!(
                        "weight {} of edge {} -> {} must be between {} and {}",
                        weight, tail, head, MIN_WEIGHT, MAX_WEIGHT
                    ))
                })?;
                edges.push(edge);
            }
        }

        debug!(
            vertices = incidence_list.number_of_vertices(),
            edges = edges.len(),
            "built graph from incidence list"
        );
        Ok(Graph::new(incidence_list, edges))
    }

    /// Console build: invalid entries are dropped, weights come from
    /// `weight_of`.
    pub fn from_console_entries<F>(
        vertex_count: u32,
        neighbor_lists: &[Vec<Vertex>],
        weight_of: F,
    ) -> Result<Graph>
    where
        F: FnMut(Vertex, Vertex) -> Result<Weight>,
    {
        let (incidence_list, _) = Self::incidence_list_from_entries(vertex_count, neighbor_lists)?;
        Self::from_incidence_list(incidence_list, weight_of)
    }

    pub fn from_file(path: &Path) -> std::result::Result<Graph, BuildError> {
        debug!(path = %path.display(), "reading graph file");
        let content = fs::read_to_string(path)?;
        Self::from_file_text(&content)
    }

    /// Builds a graph from the text file format. The whole text is validated
    /// first, so no graph is produced for a file with any error.
    pub fn from_file_text(content: &str) -> std::result::Result<Graph, BuildError> {
        let vertex_count = validate_file_text(content).map_err(|err| {
            warn!(%err, "graph file rejected");
            err
        })?;

        let mut incidence_list = IncidenceList::new(vertex_count);
        let mut edges = Vec::new();
        for (line_number, vertex, line) in vertex_lines(content) {
            for pair in parse_pairs(line, line_number)? {
                let (neighbor, weight) = pair?;
                if incidence_list.insert(vertex, neighbor).is_err() {
                    continue;
                }
                if let Some(edge) = WeightedEdge::new(vertex, neighbor, weight) {
                    edges.push(edge);
                }
            }
        }

        debug!(
            vertices = vertex_count,
            edges = edges.len(),
            "built graph from file"
        );
        Ok(Graph::new(incidence_list, edges))
    }
}

/// Checks the complete file text without building anything and returns the
/// number of vertices.
pub fn validate_file_text(content: &str) -> std::result::Result<u32, BuildError> {
    let first_line = content.lines().next().ok_or(BuildError::EmptyFile)?.trim();
    if first_line.is_empty() {
        return Err(BuildError::MissingVertexCount);
    }
    let vertex_count = parse_number(first_line, 1)?;
    check_vertex_count(vertex_count)?;

    for (line_number, vertex, line) in vertex_lines(content) {
        if vertex > vertex_count {
            return Err(BuildError::TooManyLines {
                expected: vertex_count,
            });
        }

        let mut neighbors = HashSet::new();
        for pair in parse_pairs(line, line_number)? {
            let (neighbor, weight) = pair?;
            if !(1..=vertex_count).contains(&neighbor) {
                return Err(BuildError::NeighborOutOfRange {
                    line: line_number,
                    neighbor,
                    vertex_count,
                });
            }
            if !is_valid_weight(weight) {
                return Err(BuildError::WeightOutOfRange {
                    line: line_number,
                    weight,
                });
            }
            if neighbor == vertex {
                return Err(BuildError::SelfLoop {
                    line: line_number,
                    vertex,
                });
            }
            if !neighbors.insert(neighbor) {
                return Err(BuildError::DuplicateNeighbor {
                    line: line_number,
                    neighbor,
                });
            }
        }
    }

    Ok(vertex_count)
}

/// Writes `graph` in the text file format, each vertex's edges in the order
/// they are stored.
pub fn to_file_text(graph: &Graph) -> String {
    let mut text = format!("{}\n", graph.number_of_vertices());
    for vertex in 1..=graph.number_of_vertices() {
        let line = graph
            .out_edges(vertex)
            .map(|edge| format!("{} {}", edge.head(), edge.weight()))
            .join(" ");
        text.push_str(&line);
        text.push('\n');
    }
    text
}

fn check_vertex_count(count: u32) -> std::result::Result<(), BuildError> {
    if !(MIN_VERTEX_COUNT..=MAX_VERTEX_COUNT).contains(&count) {
        return Err(BuildError::VertexCountOutOfRange { count });
    }
    Ok(())
}

/// Yields `(line number, vertex, trimmed line)` for every line after the
/// vertex count.
fn vertex_lines(content: &str) -> impl Iterator<Item = (usize, Vertex, &str)> + '_ {
    content
        .lines()
        .skip(1)
        .enumerate()
        .map(|(index, line)| (index + 2, index as Vertex + 1, line.trim()))
}

/// Splits a vertex line into `(neighbor, weight)` pairs. The token count is
/// checked up front, the numbers lazily pair by pair.
fn parse_pairs(
    line: &str,
    line_number: usize,
) -> std::result::Result<
    impl Iterator<Item = std::result::Result<(Vertex, Weight), BuildError>> + '_,
    BuildError,
> {
    let tokens = line.split_whitespace().count();
    if tokens % 2 != 0 {
        return Err(BuildError::OddTokenCount {
            line: line_number,
            tokens,
        });
    }

    Ok(line
        .split_whitespace()
        .tuples()
        .map(move |(neighbor, weight)| {
            check_leading_zero(neighbor, line_number)?;
            check_leading_zero(weight, line_number)?;
            Ok((
                parse_number(neighbor, line_number)?,
                parse_number(weight, line_number)?,
            ))
        }))
}

fn check_leading_zero(token: &str, line: usize) -> std::result::Result<(), BuildError> {
    if token.len() > 1 && token.starts_with('0') {
        return Err(BuildError::LeadingZero {
            line,
            token: token.to_string(),
        });
    }
    Ok(())
}

pub(crate) fn parse_number(token: &str, line: usize) -> std::result::Result<u32, BuildError> {
    check_leading_zero(token, line)?;
    let invalid = || BuildError::InvalidNumber {
        line,
        token: token.to_string(),
    };
    if token.is_empty() || !token.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(invalid());
    }
    token.parse().map_err(|_| invalid())
}
