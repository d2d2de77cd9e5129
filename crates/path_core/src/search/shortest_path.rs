use crate::constants::{Weight, INFINITY};

/// Result of a point to point query.
///
/// `nodes` lists the path from source to target, both inclusive. If the target
/// cannot be reached `nodes` is empty and `weight` is [`INFINITY`]. Use
/// [`ShortestPath::is_found`] to tell both cases apart, a found path whose
/// weight overflows `f64` also has weight [`INFINITY`].
#[derive(Debug, PartialEq, Clone)]
pub struct ShortestPath<Id = String> {
    pub nodes: Vec<Id>,
    pub weight: Weight,
}

impl<Id> ShortestPath<Id> {
    pub fn new(nodes: Vec<Id>, weight: Weight) -> Self {
        ShortestPath { nodes, weight }
    }

    pub fn unreachable() -> Self {
        ShortestPath {
            nodes: Vec::new(),
            weight: INFINITY,
        }
    }

    /// Returns `false` if the target was not reachable from the source
    pub fn is_found(&self) -> bool {
        !self.nodes.is_empty()
    }

    pub fn source(&self) -> Option<&Id> {
        self.nodes.first()
    }

    pub fn target(&self) -> Option<&Id> {
        self.nodes.last()
    }
}
