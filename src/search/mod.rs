use self::path::{ShortestPathOutcome, ShortestPathRequest};

pub mod bellman_ford;
pub mod path;

pub trait PathFinding {
    fn shortest_path_distance(&self, request: &ShortestPathRequest) -> ShortestPathOutcome;

    fn number_of_vertices(&self) -> u32;
}
