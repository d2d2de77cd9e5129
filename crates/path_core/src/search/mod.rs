use std::{borrow::Borrow, hash::Hash};

use rustc_hash::FxHashMap;

use crate::{
    constants::Weight,
    error::GraphError,
    graph::{Graph, NodeId},
};

use self::{dijkstra::Dijkstra, shortest_path::ShortestPath};

pub mod astar;
pub mod dijkstra;
pub mod shortest_path;

/// Finds the shortest path between `source` and `target` with Dijkstra's
/// algorithm.
///
/// Fails if one of the nodes is not part of `graph`. An unreachable target is
/// reported as [`ShortestPath::unreachable`].
pub fn shortest_path<Id, Q>(
    graph: &Graph<Id>,
    source: &Q,
    target: &Q,
) -> Result<ShortestPath<Id>, GraphError<Id>>
where
    Id: NodeId + Borrow<Q>,
    Q: Hash + Eq + ToOwned<Owned = Id> + ?Sized,
{
    Dijkstra::new(graph).search(source, target)
}

/// Walks the predecessors stored in `node_data` back from `target`.
///
/// A node is only present in `node_data` once it has been reached, so a
/// missing target means there is no path.
pub(crate) fn reconstruct_path<Id: Clone + Hash + Eq>(
    target: &Id,
    node_data: &FxHashMap<&Id, (Weight, Option<&Id>)>,
) -> ShortestPath<Id> {
    let Some(&(weight, mut previous)) = node_data.get(target) else {
        return ShortestPath::unreachable();
    };

    let mut path = vec![target.clone()];
    while let Some(node) = previous {
        path.push(node.clone());
        previous = node_data.get(node).and_then(|(_, prev)| *prev);
    }
    path.reverse();

    ShortestPath::new(path, weight)
}

#[cfg(test)]
pub(crate) fn assert_path<Id: NodeId>(
    expected_path: Vec<Id>,
    expected_weight: Weight,
    path: Result<ShortestPath<Id>, GraphError<Id>>,
) {
    let path = path.expect("search failed");
    assert_eq!(expected_path, path.nodes);
    approx::assert_abs_diff_eq!(expected_weight, path.weight, epsilon = 1e-9);
}

#[cfg(test)]
pub(crate) fn assert_no_path<Id: NodeId>(path: Result<ShortestPath<Id>, GraphError<Id>>) {
    assert_eq!(Ok(ShortestPath::unreachable()), path);
}
