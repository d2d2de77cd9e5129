use crate::{
    constants::{Coord, Weight},
    graph::Node,
};

/// Euclidean distance between two points in the plane
pub fn euclidean_distance(a: &Coord, b: &Coord) -> Weight {
    let [x1, y1] = *a;
    let [x2, y2] = *b;
    (x2 - x1).hypot(y2 - y1)
}

/// Straight line distance between two nodes. Used as A* heuristic, which is
/// admissible as long as no edge is shorter than the distance between its
/// endpoints.
pub fn straight_line<Id>(src: &Node<Id>, dst: &Node<Id>) -> Weight {
    euclidean_distance(&src.coord, &dst.coord)
}
