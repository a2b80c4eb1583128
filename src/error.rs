use thiserror::Error;

use crate::graphs::{Vertex, Weight, MAX_VERTEX_COUNT, MAX_WEIGHT, MIN_VERTEX_COUNT, MIN_WEIGHT};

pub type Result<T> = std::result::Result<T, Error>;

/// Reasons a graph file is rejected. Line numbers are 1-based and count the
/// vertex count line, so vertex `v` is described on line `v + 1`.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("the file is empty")]
    EmptyFile,

    #[error("the first line must contain the number of vertices")]
    MissingVertexCount,

    #[error(
        "the number of vertices must be between {} and {}, got {count}",
        MIN_VERTEX_COUNT,
        MAX_VERTEX_COUNT
    )]
    VertexCountOutOfRange { count: u32 },

    #[error("line {line}: leading zeros are not allowed ({token})")]
    LeadingZero { line: usize, token: String },

    #[error("line {line}: invalid number format ({token})")]
    InvalidNumber { line: usize, token: String },

    #[error("line {line}: edges must be given as (vertex weight) pairs, found {tokens} tokens")]
    OddTokenCount { line: usize, tokens: usize },

    #[error("line {line}: vertex {neighbor} is out of range 1..={vertex_count}")]
    NeighborOutOfRange {
        line: usize,
        neighbor: Vertex,
        vertex_count: u32,
    },

    #[error("line {line}: vertex {vertex} refers to itself (self-loop)")]
    SelfLoop { line: usize, vertex: Vertex },

    #[error("line {line}: duplicate edge to vertex {neighbor}")]
    DuplicateNeighbor { line: usize, neighbor: Vertex },

    #[error(
        "line {line}: weight must be between {} and {}, got {weight}",
        MIN_WEIGHT,
        MAX_WEIGHT
    )]
    WeightOutOfRange { line: usize, weight: Weight },

    #[error("too many lines in the file, expected {expected} vertex definitions")]
    TooManyLines { expected: u32 },

    #[error("unable to read the file: {0}")]
    IOFailure(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Build(#[from] BuildError),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("input ended while reading {0}")]
    UnexpectedEndOfInput(&'static str),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
