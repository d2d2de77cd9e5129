//! Shortest paths on undirected graphs embedded in the plane.
//!
//! # Basic usage
//! ```
//! use path_core::prelude::*;
//!
//! // Create a new graph with string ids
//! let mut g: Graph = Graph::new();
//! g.add_node("A", [0.0, 0.0])?;
//! g.add_node("B", [3.0, 4.0])?;
//! g.add_node("C", [6.0, 0.0])?;
//!
//! // Weight derived from the coordinates (5.0) and an explicit weight
//! g.add_euclidean_edge("A", "B")?;
//! g.add_edge("B", "C", 2.0)?;
//!
//! // Run Dijkstra's algorithm
//! let sp = search::shortest_path(&g, "A", "C")?;
//!
//! assert_eq!(sp.nodes, vec!["A", "B", "C"]);
//! assert!((sp.weight - 7.0).abs() < 1e-9);
//! # Ok::<(), GraphError<String>>(())
//!```
//! [`Graph`]: crate::graph::Graph
pub mod constants;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod search;
pub mod statistics;
pub mod util;
