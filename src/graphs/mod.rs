use self::{edge::WeightedEdge, incidence_list::IncidenceList};

pub mod edge;
pub mod graph_factory;
pub mod incidence_list;

/// Vertices are labeled `1..=number_of_vertices`.
pub type Vertex = u32;
pub type Weight = u32;
pub type Distance = u32;

pub const MIN_VERTEX_COUNT: u32 = 1;
pub const MAX_VERTEX_COUNT: u32 = 99;

pub const MIN_WEIGHT: Weight = 1;
pub const MAX_WEIGHT: Weight = 100;

/// A directed graph with positive edge weights.
///
/// Only `GraphFactory` builds graphs, so every graph upholds the invariants
/// of its incidence list: no self-loops and no duplicate neighbors. The edge
/// list holds exactly one weighted edge per incidence list entry.
#[derive(Clone, Debug)]
pub struct Graph {
    incidence_list: IncidenceList,
    edges: Vec<WeightedEdge>,
}

impl Graph {
    pub(crate) fn new(incidence_list: IncidenceList, edges: Vec<WeightedEdge>) -> Graph {
        Graph {
            incidence_list,
            edges,
        }
    }

    pub fn number_of_vertices(&self) -> u32 {
        self.incidence_list.number_of_vertices()
    }

    pub fn number_of_edges(&self) -> u32 {
        self.edges.len() as u32
    }

    pub fn contains_vertex(&self, vertex: Vertex) -> bool {
        (1..=self.number_of_vertices()).contains(&vertex)
    }

    pub fn incidence_list(&self) -> &IncidenceList {
        &self.incidence_list
    }

    /// All edges in the order they were added.
    pub fn edges(&self) -> &[WeightedEdge] {
        &self.edges
    }

    pub fn out_edges(&self, tail: Vertex) -> impl Iterator<Item = &WeightedEdge> + '_ {
        self.edges.iter().filter(move |edge| edge.tail() == tail)
    }
}
