//! Re-exports of the most commonly used items in `path_core`.
pub use crate::constants::{Coord, Weight, INFINITY};
pub use crate::error::GraphError;

pub use crate::search;
pub use crate::search::astar::AStar;
pub use crate::search::dijkstra::Dijkstra;
pub use crate::search::shortest_path::ShortestPath;

pub use crate::graph::Graph;
pub use crate::graph::Node;
pub use crate::util::math::{euclidean_distance, straight_line};
pub use crate::util::test_graphs::generate_sample_graph;
