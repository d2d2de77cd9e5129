//! Implementation of the A* search algorithm.
use std::{borrow::Borrow, collections::BinaryHeap, hash::Hash};

use log::{debug, info};
use rustc_hash::FxHashMap;

use crate::{
    constants::{Weight, INFINITY},
    error::GraphError,
    graph::{Graph, Node, NodeId},
    statistics::SearchStats,
};

use super::shortest_path::ShortestPath;

#[derive(Debug)]
struct Candidate<'a, Id> {
    node: &'a Id,
    real_weight: Weight,
    tentative_weight: Weight,
}

impl<'a, Id> Candidate<'a, Id> {
    fn new(node: &'a Id, real_weight: Weight, estimated_weight: Weight) -> Self {
        Self {
            node,
            real_weight,
            tentative_weight: estimated_weight,
        }
    }
}

impl<Id> PartialOrd for Candidate<'_, Id> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<Id> PartialEq for Candidate<'_, Id> {
    fn eq(&self, other: &Self) -> bool {
        other.tentative_weight == self.tentative_weight
    }
}

impl<Id> Eq for Candidate<'_, Id> {}

impl<Id> Ord for Candidate<'_, Id> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .tentative_weight
            .partial_cmp(&self.tentative_weight)
            .unwrap_or(std::cmp::Ordering::Equal)
    }
}

pub struct AStar<'a, Id = String> {
    pub stats: SearchStats,
    g: &'a Graph<Id>,
}

impl<'a, Id: NodeId> AStar<'a, Id> {
    pub fn new(g: &'a Graph<Id>) -> Self {
        AStar {
            g,
            stats: SearchStats::default(),
        }
    }

    /// Goal directed search guided by `heuristic(node, target)`.
    ///
    /// The result is optimal if the heuristic never overestimates the remaining
    /// distance, e.g. [`straight_line`](crate::util::math::straight_line) on
    /// graphs whose edges are at least as long as the distance between their
    /// endpoints.
    pub fn search<Q>(
        &mut self,
        source: &Q,
        target: &Q,
        heuristic: impl Fn(&Node<Id>, &Node<Id>) -> Weight,
    ) -> Result<ShortestPath<Id>, GraphError<Id>>
    where
        Id: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = Id> + ?Sized,
    {
        let g = self.g;
        let source_node = g.try_node(source)?;
        let target_node = g.try_node(target)?;
        self.run(source_node, target_node, heuristic)
    }

    fn run(
        &mut self,
        source_node: &'a Node<Id>,
        target_node: &'a Node<Id>,
        heuristic: impl Fn(&Node<Id>, &Node<Id>) -> Weight,
    ) -> Result<ShortestPath<Id>, GraphError<Id>> {
        let g = self.g;
        let (source, target) = (&source_node.id, &target_node.id);

        debug!("BEGIN ASTAR SEARCH from {:?} to {:?}", source, target);
        self.stats.init();
        if source == target {
            self.stats.nodes_settled += 1;
            self.stats.finish();
            return Ok(ShortestPath::new(vec![source.clone()], 0.0));
        }

        let mut node_data: FxHashMap<&Id, (Weight, Option<&Id>)> = FxHashMap::default();
        node_data.insert(source, (0.0, None));

        let mut queue = BinaryHeap::new();
        queue.push(Candidate::new(
            source,
            0.0,
            heuristic(source_node, target_node),
        ));

        while let Some(Candidate {
            tentative_weight: _,
            real_weight,
            node,
        }) = queue.pop()
        {
            if real_weight > node_data.get(node).map_or(INFINITY, |(w, _)| *w) {
                continue;
            }

            self.stats.nodes_settled += 1;

            if node == target {
                break;
            }

            for (neighbor, edge_weight) in g.neighbors_of(node)? {
                let real_weight = real_weight + edge_weight;

                let improves = match node_data.get(neighbor) {
                    Some((distance, _)) => real_weight < *distance,
                    None => true,
                };
                if improves {
                    let tentative_weight =
                        real_weight + heuristic(g.try_node(neighbor)?, target_node);

                    node_data.insert(neighbor, (real_weight, Some(node)));
                    queue.push(Candidate::new(neighbor, real_weight, tentative_weight));
                }
            }
        }

        self.stats.finish();

        let sp = super::reconstruct_path(target, &node_data);
        if sp.is_found() {
            debug!("Path found: {:?}", sp);
            info!("{}, weight: {}", self.stats, sp.weight);
        } else {
            info!("No path found: {}", self.stats);
        }

        Ok(sp)
    }
}
