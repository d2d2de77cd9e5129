use crate::constants::{Coord, Weight};
use crate::error::GraphError;
use crate::util::math::euclidean_distance;
use anyhow::Context;
use log::{debug, info};
use rustc_hash::FxHashMap;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{borrow::Borrow, fmt, hash::Hash, path::Path};

/// Types usable as node identifiers.
///
/// Implemented for everything that is cloneable, hashable and totally
/// ordered, e.g. `String`, `&'static str`, `u32` or `usize`.
pub trait NodeId: Clone + Eq + Ord + Hash + fmt::Debug {}

impl<T> NodeId for T where T: Clone + Eq + Ord + Hash + fmt::Debug {}

/// A node with planar coordinates and its adjacency list.
#[derive(Debug, Clone)]
pub struct Node<Id = String> {
    pub id: Id,
    pub coord: Coord,
    neighbors: FxHashMap<Id, Weight>,
}

impl<Id: NodeId> Node<Id> {
    pub fn new(id: Id, coord: Coord) -> Self {
        Node {
            id,
            coord,
            neighbors: FxHashMap::default(),
        }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.coord[0]
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.coord[1]
    }

    /// Neighbor id => edge weight
    pub fn neighbors(&self) -> &FxHashMap<Id, Weight> {
        &self.neighbors
    }

    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }
}

impl<Id: NodeId> PartialEq for Node<Id> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.coord == other.coord && self.neighbors == other.neighbors
    }
}

/// Row of a nodes .csv file
#[derive(Debug, Deserialize, Serialize)]
struct NodeRecord<Id> {
    id: Id,
    x: f64,
    y: f64,
}

/// Row of an edges .csv file. A missing weight is replaced by the euclidean
/// distance between both endpoints.
#[derive(Debug, Deserialize, Serialize)]
struct EdgeRecord<Id> {
    source: Id,
    target: Id,
    #[serde(default)]
    weight: Option<Weight>,
}

/// Undirected, weighted graph stored as adjacency lists.
///
/// Every edge is stored in the neighbor map of both endpoints with the same
/// weight. Nodes can only be inserted, never removed. Searches borrow the
/// graph immutably, so any number of them may run in parallel as long as
/// nobody holds a mutable reference.
#[derive(Debug, Clone)]
pub struct Graph<Id = String> {
    nodes: FxHashMap<Id, Node<Id>>,
    num_edges: usize,
}

impl<Id: NodeId> Graph<Id> {
    pub fn new() -> Self {
        Self {
            nodes: FxHashMap::default(),
            num_edges: 0,
        }
    }

    pub fn with_capacity(num_nodes: usize) -> Self {
        Self {
            nodes: FxHashMap::with_capacity_and_hasher(num_nodes, Default::default()),
            num_edges: 0,
        }
    }

    /// Adds a new node to the graph.
    ///
    /// Inserting an id twice is rejected with [`GraphError::DuplicateNode`],
    /// the existing node and its edges stay untouched.
    pub fn add_node(&mut self, id: impl Into<Id>, coord: Coord) -> Result<(), GraphError<Id>> {
        let id = id.into();
        if self.nodes.contains_key(&id) {
            return Err(GraphError::DuplicateNode(id));
        }

        self.nodes.insert(id.clone(), Node::new(id, coord));
        Ok(())
    }

    /// Adds an undirected edge between `a` and `b`.
    ///
    /// Both nodes must exist and the weight must be finite and non-negative.
    /// If the edge already exists its weight is overwritten on both sides.
    ///
    /// Returns the previous weight of the edge, if any.
    pub fn add_edge<Q>(
        &mut self,
        a: &Q,
        b: &Q,
        weight: Weight,
    ) -> Result<Option<Weight>, GraphError<Id>>
    where
        Id: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = Id> + ?Sized,
    {
        let a = self.try_node(a)?.id.clone();
        let b = self.try_node(b)?.id.clone();
        self.insert_edge(a, b, weight)
    }

    fn insert_edge(
        &mut self,
        a: Id,
        b: Id,
        weight: Weight,
    ) -> Result<Option<Weight>, GraphError<Id>> {
        if a == b {
            return Err(GraphError::SelfLoop(a));
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight {
                from: a,
                to: b,
                weight,
            });
        }

        let previous = self
            .nodes
            .get_mut(&a)
            .and_then(|node| node.neighbors.insert(b.clone(), weight));
        if let Some(node) = self.nodes.get_mut(&b) {
            node.neighbors.insert(a, weight);
        }

        if previous.is_none() {
            self.num_edges += 1;
        }
        Ok(previous)
    }

    /// Adds an edge weighted by the euclidean distance between the coordinates
    /// of `a` and `b`. Returns the computed weight.
    pub fn add_euclidean_edge<Q>(&mut self, a: &Q, b: &Q) -> Result<Weight, GraphError<Id>>
    where
        Id: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = Id> + ?Sized,
    {
        let weight = euclidean_distance(&self.try_node(a)?.coord, &self.try_node(b)?.coord);
        self.add_edge(a, b, weight)?;
        Ok(weight)
    }

    pub fn node<Q>(&self, id: &Q) -> Option<&Node<Id>>
    where
        Id: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.nodes.get(id)
    }

    /// Like [`Graph::node`] but fails with [`GraphError::UnknownNode`].
    pub fn try_node<Q>(&self, id: &Q) -> Result<&Node<Id>, GraphError<Id>>
    where
        Id: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = Id> + ?Sized,
    {
        self.nodes
            .get(id)
            .ok_or_else(|| GraphError::UnknownNode(id.to_owned()))
    }

    pub fn contains<Q>(&self, id: &Q) -> bool
    where
        Id: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.nodes.contains_key(id)
    }

    /// Returns the neighbors of `id` together with the weight of the
    /// connecting edge.
    pub fn neighbors_of<Q>(&self, id: &Q) -> Result<&FxHashMap<Id, Weight>, GraphError<Id>>
    where
        Id: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = Id> + ?Sized,
    {
        self.try_node(id).map(|node| &node.neighbors)
    }

    /// Returns an iterator over all nodes of the graph
    pub fn nodes(&self) -> impl Iterator<Item = &Node<Id>> {
        self.nodes.values()
    }

    /// Returns an iterator over all edges of the graph. Each undirected edge
    /// is reported once, with the smaller id first.
    pub fn edges(&self) -> impl Iterator<Item = (&Id, &Id, Weight)> {
        self.nodes.values().flat_map(|node| {
            node.neighbors
                .iter()
                .filter(move |(neighbor, _)| node.id < **neighbor)
                .map(move |(neighbor, weight)| (&node.id, neighbor, *weight))
        })
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    pub fn print_info(&self) {
        let max_degree = self.nodes().map(Node::degree).max().unwrap_or(0);
        println!(
            "Graph:\t#Nodes: {}, #Edges: {}, max degree: {}",
            self.num_nodes(),
            self.num_edges(),
            max_degree
        );
    }
}

impl<Id> Graph<Id>
where
    Id: NodeId + DeserializeOwned + Send + Sync + 'static,
{
    /// Reads a graph from two .csv files with the headers `id,x,y` and
    /// `source,target,weight`. The weight column is optional.
    pub fn from_csv(path_to_nodes: &Path, path_to_edges: &Path) -> anyhow::Result<Self> {
        info!("Reading graph from {:?} and {:?}", path_to_nodes, path_to_edges);

        let mut g = Self::new();

        let mut reader = csv::Reader::from_path(path_to_nodes)
            .with_context(|| format!("Could not open {:?}", path_to_nodes))?;
        for (i, result) in reader.deserialize().enumerate() {
            let NodeRecord { id, x, y }: NodeRecord<Id> = result.context("Failed to parse Node")?;
            // Line 1 is the header
            g.add_node(id, [x, y]).with_context(|| {
                format!("Invalid node in line {} of {:?}", i + 2, path_to_nodes)
            })?;
        }

        let mut reader = csv::Reader::from_path(path_to_edges)
            .with_context(|| format!("Could not open {:?}", path_to_edges))?;
        for (i, result) in reader.deserialize().enumerate() {
            let EdgeRecord {
                source,
                target,
                weight,
            }: EdgeRecord<Id> = result.context("Failed to parse Edge")?;

            let inserted = match weight {
                Some(weight) => g.add_edge(&source, &target, weight).map(|_| ()),
                None => g.add_euclidean_edge(&source, &target).map(|_| ()),
            };
            inserted.with_context(|| {
                format!(
                    "Invalid edge {:?} - {:?} in line {} of {:?}",
                    source,
                    target,
                    i + 2,
                    path_to_edges
                )
            })?;
        }

        info!(
            "Graph has {} nodes and {} edges",
            g.num_nodes(),
            g.num_edges()
        );
        Ok(g)
    }
}

impl<Id: NodeId + Serialize> Graph<Id> {
    /// Writes the graph in the format read by [`Graph::from_csv`]. Rows are
    /// sorted by id.
    pub fn export_csv(&self, path_to_nodes: &Path, path_to_edges: &Path) -> anyhow::Result<()> {
        let mut nodes: Vec<&Node<Id>> = self.nodes().collect();
        nodes.sort_unstable_by(|a, b| a.id.cmp(&b.id));

        let mut wtr = csv::Writer::from_path(path_to_nodes)
            .with_context(|| format!("Could not create {:?}", path_to_nodes))?;
        debug!("BEGIN writing nodes");
        for node in nodes {
            wtr.serialize(NodeRecord {
                id: &node.id,
                x: node.x(),
                y: node.y(),
            })?;
        }
        wtr.flush()?;
        debug!("FINISHED writing nodes");

        let mut edges: Vec<(&Id, &Id, Weight)> = self.edges().collect();
        edges.sort_unstable_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));

        let mut wtr = csv::Writer::from_path(path_to_edges)
            .with_context(|| format!("Could not create {:?}", path_to_edges))?;
        debug!("BEGIN writing edges");
        for (source, target, weight) in edges {
            wtr.serialize(EdgeRecord {
                source,
                target,
                weight: Some(weight),
            })?;
        }
        wtr.flush()?;
        debug!("FINISHED writing edges");
        Ok(())
    }
}

impl<Id: NodeId> Default for Graph<Id> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use crate::util::test_graphs::generate_sample_graph;

    use super::*;

    #[test]
    fn add_duplicate_node() {
        let mut g: Graph = Graph::new();
        g.add_node("A", [0.0, 0.0]).unwrap();
        g.add_node("B", [1.0, 1.0]).unwrap();
        g.add_edge("A", "B", 2.0).unwrap();

        assert_eq!(
            g.add_node("A", [5.0, 5.0]),
            Err(GraphError::DuplicateNode("A".to_string()))
        );

        // Original node is left untouched
        let a = g.node("A").unwrap();
        assert_eq!(a.coord, [0.0, 0.0]);
        assert_eq!(a.neighbors().get("B"), Some(&2.0));
        assert_eq!(g.num_nodes(), 2);
    }

    #[test]
    fn add_edge_is_symmetric() {
        let mut g: Graph = Graph::new();
        g.add_node("A", [0.0, 0.0]).unwrap();
        g.add_node("B", [1.0, 1.0]).unwrap();

        assert_eq!(g.add_edge("A", "B", 2.5), Ok(None));

        assert_eq!(g.neighbors_of("A").unwrap().get("B"), Some(&2.5));
        assert_eq!(g.neighbors_of("B").unwrap().get("A"), Some(&2.5));
        assert_eq!(g.num_edges(), 1);
    }

    #[test]
    fn add_duplicate_edges() {
        let mut g: Graph = Graph::new();
        g.add_node("A", [0.0, 0.0]).unwrap();
        g.add_node("B", [1.0, 1.0]).unwrap();

        g.add_edge("A", "B", 2.0).unwrap();
        // Re-adding from the other side overwrites, even with a larger weight
        assert_eq!(g.add_edge("B", "A", 7.0), Ok(Some(2.0)));

        assert_eq!(g.neighbors_of("A").unwrap().get("B"), Some(&7.0));
        assert_eq!(g.neighbors_of("B").unwrap().get("A"), Some(&7.0));
        assert_eq!(g.num_edges(), 1);
    }

    #[test]
    fn add_edge_unknown_node() {
        let mut g: Graph = Graph::new();
        g.add_node("A", [0.0, 0.0]).unwrap();

        assert_eq!(
            g.add_edge("A", "X", 1.0),
            Err(GraphError::UnknownNode("X".to_string()))
        );
        assert_eq!(
            g.add_edge("X", "A", 1.0),
            Err(GraphError::UnknownNode("X".to_string()))
        );
        assert!(g.neighbors_of("A").unwrap().is_empty());
    }

    #[test]
    fn add_edge_invalid_weight() {
        let mut g: Graph = Graph::new();
        g.add_node("A", [0.0, 0.0]).unwrap();
        g.add_node("B", [1.0, 1.0]).unwrap();

        assert_eq!(
            g.add_edge("A", "B", -1.0),
            Err(GraphError::InvalidWeight {
                from: "A".to_string(),
                to: "B".to_string(),
                weight: -1.0
            })
        );
        assert!(matches!(
            g.add_edge("A", "B", f64::NAN),
            Err(GraphError::InvalidWeight { .. })
        ));
        assert!(matches!(
            g.add_edge("A", "B", f64::INFINITY),
            Err(GraphError::InvalidWeight { .. })
        ));
        assert_eq!(g.add_edge("A", "B", 0.0), Ok(None));
        assert_eq!(g.num_edges(), 1);
    }

    #[test]
    fn add_self_loop() {
        let mut g = Graph::<u32>::new();
        g.add_node(0u32, [0.0, 0.0]).unwrap();

        assert_eq!(g.add_edge(&0, &0, 1.0), Err(GraphError::SelfLoop(0)));
        assert!(g.neighbors_of(&0).unwrap().is_empty());
    }

    #[test]
    fn neighbors_of_unknown_node() {
        let g = Graph::<u32>::new();
        assert_eq!(g.neighbors_of(&3), Err(GraphError::UnknownNode(3)));
    }

    #[test]
    fn euclidean_edge() {
        let mut g: Graph = Graph::new();
        g.add_node("A", [0.0, 0.0]).unwrap();
        g.add_node("B", [3.0, 4.0]).unwrap();

        let weight = g.add_euclidean_edge("A", "B").unwrap();

        assert_abs_diff_eq!(weight, 5.0);
        assert_eq!(g.neighbors_of("B").unwrap().get("A"), Some(&weight));
    }

    #[test]
    fn edges_reported_once() {
        let g = generate_sample_graph().unwrap();

        let mut edges: Vec<(&str, &str)> = g
            .edges()
            .map(|(a, b, _)| (a.as_str(), b.as_str()))
            .collect();
        edges.sort();

        assert_eq!(
            edges,
            vec![("A", "B"), ("A", "D"), ("B", "C"), ("C", "D"), ("D", "E")]
        );
        assert_eq!(g.num_edges(), 5);

        assert_eq!(g.node("A").unwrap().degree(), 2);
        assert_eq!(g.node("D").unwrap().degree(), 3);
        assert_eq!(g.node("E").unwrap().degree(), 1);
        let degree_sum: usize = g.nodes().map(Node::degree).sum();
        assert_eq!(degree_sum, 2 * g.num_edges());
    }

    #[test]
    fn read_from_csv() {
        let graph: Graph = Graph::from_csv(
            &Path::new(env!("CARGO_MANIFEST_DIR")).join("test_data/nodes.csv"),
            &Path::new(env!("CARGO_MANIFEST_DIR")).join("test_data/edges.csv"),
        )
        .unwrap();

        assert_eq!(graph.num_nodes(), 5);
        assert_eq!(graph.num_edges(), 5);
        assert_eq!(graph.node("C").unwrap().coord, [3.0, 1.0]);

        // Weight given explicitly
        assert_eq!(graph.neighbors_of("D").unwrap().get("E"), Some(&2.5));
        // Weight derived from the coordinates
        assert_abs_diff_eq!(
            graph.neighbors_of("A").unwrap()["D"],
            13f64.sqrt(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn read_from_csv_missing_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("test_data/does_not_exist.csv");
        assert!(Graph::<String>::from_csv(&path, &path).is_err());
    }

    #[test]
    fn read_from_csv_invalid_edge() {
        let nodes_path = Path::new(env!("CARGO_MANIFEST_DIR")).join("test_data/nodes.csv");
        let edges_path = Path::new(env!("CARGO_MANIFEST_DIR")).join("test_data/edges_unknown.csv");

        let err = Graph::<String>::from_csv(&nodes_path, &edges_path).unwrap_err();

        let message = format!("{:#}", err);
        assert!(message.contains("edges_unknown.csv"), "{}", message);
        assert!(message.contains("line 3"), "{}", message);
        assert_eq!(
            err.downcast_ref::<GraphError<String>>(),
            Some(&GraphError::UnknownNode("X".to_string()))
        );
    }

    #[test]
    fn export_and_read_csv() {
        let g = generate_sample_graph().unwrap();

        let dir = std::env::temp_dir();
        let nodes_path = dir.join(format!("path_core_nodes_{}.csv", std::process::id()));
        let edges_path = dir.join(format!("path_core_edges_{}.csv", std::process::id()));

        g.export_csv(&nodes_path, &edges_path).unwrap();
        let read: Graph = Graph::from_csv(&nodes_path, &edges_path).unwrap();

        let _ = std::fs::remove_file(&nodes_path);
        let _ = std::fs::remove_file(&edges_path);

        assert_eq!(read.num_nodes(), g.num_nodes());
        assert_eq!(read.num_edges(), g.num_edges());
        for node in g.nodes() {
            assert_eq!(read.node(&node.id), Some(node));
        }
    }
}
