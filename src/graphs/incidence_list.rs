use std::fmt;

use super::Vertex;

/// Why a neighbor was not added to a vertex's list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    SelfLoop,
    Duplicate,
    OutOfRange,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::SelfLoop => write!(f, "a vertex can not refer to itself (self-loop)"),
            Rejection::Duplicate => write!(f, "duplicate vertex"),
            Rejection::OutOfRange => write!(f, "vertex out of range"),
        }
    }
}

/// Maps each vertex `1..=number_of_vertices` to its outgoing neighbors.
///
/// Every neighbor list is kept sorted ascending and never contains the
/// vertex itself or the same neighbor twice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IncidenceList {
    // neighbors[v - 1] holds the neighbors of vertex v
    neighbors: Vec<Vec<Vertex>>,
}

impl IncidenceList {
    pub fn new(number_of_vertices: u32) -> IncidenceList {
        IncidenceList {
            neighbors: vec![Vec::new(); number_of_vertices as usize],
        }
    }

    pub fn number_of_vertices(&self) -> u32 {
        self.neighbors.len() as u32
    }

    pub fn number_of_entries(&self) -> u32 {
        self.neighbors.iter().map(|list| list.len() as u32).sum()
    }

    /// Neighbors of `vertex` in ascending order. Unknown vertices have none.
    pub fn neighbors(&self, vertex: Vertex) -> &[Vertex] {
        self.index(vertex)
            .and_then(|index| self.neighbors.get(index))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, vertex: Vertex, neighbor: Vertex) -> bool {
        self.neighbors(vertex).binary_search(&neighbor).is_ok()
    }

    /// Adds `neighbor` to the list of `vertex`, keeping the list sorted.
    pub fn insert(&mut self, vertex: Vertex, neighbor: Vertex) -> Result<(), Rejection> {
        let number_of_vertices = self.number_of_vertices();
        if !(1..=number_of_vertices).contains(&neighbor) {
            return Err(Rejection::OutOfRange);
        }
        if vertex == neighbor {
            return Err(Rejection::SelfLoop);
        }
        let index = self.index(vertex).ok_or(Rejection::OutOfRange)?;

        let list = &mut self.neighbors[index];
        match list.binary_search(&neighbor) {
            Ok(_) => Err(Rejection::Duplicate),
            Err(position) => {
                list.insert(position, neighbor);
                Ok(())
            }
        }
    }

    /// Iterates over `(vertex, neighbors)` with vertices ascending.
    pub fn iter(&self) -> impl Iterator<Item = (Vertex, &[Vertex])> + '_ {
        self.neighbors
            .iter()
            .enumerate()
            .map(|(index, list)| (index as Vertex + 1, list.as_slice()))
    }

    fn index(&self, vertex: Vertex) -> Option<usize> {
        if (1..=self.number_of_vertices()).contains(&vertex) {
            Some(vertex as usize - 1)
        } else {
            None
        }
    }
}

/// One line per vertex in the form `v: n1 n2 `.
impl fmt::Display for IncidenceList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, neighbors) in self.iter() {
            write!(f, "{}: ", vertex)?;
            for neighbor in neighbors {
                write!(f, "{} ", neighbor)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
