use crate::{error::GraphError, graph::Graph};

/// Five nodes in the plane, edges weighted by their euclidean length.
///
/// ```text
/// 4 |                 E
/// 3 |         D
/// 2 |     B
/// 1 |             C
/// 0 | A
///   +-------------------
///     0   1   2   3   4
/// ```
/// Edges: A-B, B-C, C-D, D-E, A-D
pub fn generate_sample_graph() -> Result<Graph, GraphError<String>> {
    let mut g: Graph = Graph::new();

    g.add_node("A", [0.0, 0.0])?;
    g.add_node("B", [1.0, 2.0])?;
    g.add_node("C", [3.0, 1.0])?;
    g.add_node("D", [2.0, 3.0])?;
    g.add_node("E", [4.0, 4.0])?;

    g.add_euclidean_edge("A", "B")?;
    g.add_euclidean_edge("B", "C")?;
    g.add_euclidean_edge("C", "D")?;
    g.add_euclidean_edge("D", "E")?;
    g.add_euclidean_edge("A", "D")?;

    Ok(g)
}

/// Eleven nodes with hand picked weights that do not follow the geometry.
pub fn generate_complex_graph() -> Result<Graph, GraphError<String>> {
    let mut graph: Graph = Graph::new();

    graph.add_node("A", [6.0, 2.0])?;
    graph.add_node("B", [3.0, 3.0])?;
    graph.add_node("C", [4.0, 6.0])?;
    graph.add_node("D", [2.0, 7.0])?;
    graph.add_node("E", [3.0, 10.0])?;
    graph.add_node("F", [2.0, 13.0])?;
    graph.add_node("G", [7.0, 15.0])?;
    graph.add_node("H", [5.0, 12.0])?;
    graph.add_node("I", [7.0, 11.0])?;
    graph.add_node("J", [5.0, 9.0])?;
    graph.add_node("K", [7.0, 7.0])?;

    graph.add_edge("A", "B", 3.0)?;
    graph.add_edge("A", "C", 5.0)?;
    graph.add_edge("A", "K", 3.0)?;

    graph.add_edge("B", "D", 5.0)?;
    graph.add_edge("B", "C", 3.0)?;

    graph.add_edge("C", "D", 2.0)?;
    graph.add_edge("C", "J", 2.0)?;

    graph.add_edge("D", "J", 4.0)?;
    graph.add_edge("D", "E", 7.0)?;

    graph.add_edge("E", "J", 3.0)?;
    graph.add_edge("E", "F", 6.0)?;

    graph.add_edge("F", "H", 2.0)?;
    graph.add_edge("F", "G", 4.0)?;

    graph.add_edge("G", "H", 3.0)?;
    graph.add_edge("G", "I", 5.0)?;

    graph.add_edge("H", "I", 3.0)?;
    graph.add_edge("H", "J", 2.0)?;

    graph.add_edge("I", "J", 4.0)?;
    graph.add_edge("I", "K", 6.0)?;

    graph.add_edge("J", "K", 3.0)?;

    Ok(graph)
}

/// Two separate paths `0 - 1 - 2` and `3 - 4 - 5` plus the isolated node `6`.
pub fn generate_disconnected_graph() -> Result<Graph<u32>, GraphError<u32>> {
    let mut g = Graph::<u32>::new();
    for i in 0..7u32 {
        g.add_node(i, [i as f64, 0.0])?;
    }

    g.add_edge(&0, &1, 1.0)?;
    g.add_edge(&1, &2, 1.0)?;
    g.add_edge(&3, &4, 3.0)?;
    g.add_edge(&4, &5, 1.0)?;

    Ok(g)
}
