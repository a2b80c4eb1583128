use super::{Vertex, Weight, MAX_WEIGHT, MIN_WEIGHT};

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct WeightedEdge {
    tail: Vertex,
    head: Vertex,
    weight: Weight,
}

impl WeightedEdge {
    /// Returns `None` for self-loops and for weights outside
    /// `MIN_WEIGHT..=MAX_WEIGHT`.
    pub fn new(tail: Vertex, head: Vertex, weight: Weight) -> Option<WeightedEdge> {
        if tail == head || !is_valid_weight(weight) {
            return None;
        }

        Some(WeightedEdge { tail, head, weight })
    }

    pub fn tail(&self) -> Vertex {
        self.tail
    }

    pub fn head(&self) -> Vertex {
        self.head
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }
}

pub fn is_valid_weight(weight: Weight) -> bool {
    (MIN_WEIGHT..=MAX_WEIGHT).contains(&weight)
}
