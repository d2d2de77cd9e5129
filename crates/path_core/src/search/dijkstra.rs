use std::borrow::Borrow;
use std::collections::BinaryHeap;
use std::hash::Hash;

use crate::constants::{Weight, INFINITY};
use crate::error::GraphError;
use crate::graph::*;
use crate::search::shortest_path::ShortestPath;
use crate::statistics::SearchStats;
use log::{debug, info};
use rustc_hash::FxHashMap;

/// Frontier entry. The heap may hold several entries for the same node, only
/// the one matching the best known distance is processed.
#[derive(Debug)]
pub(crate) struct Candidate<'a, Id> {
    pub(crate) node: &'a Id,
    pub(crate) weight: Weight,
}

impl<'a, Id> Candidate<'a, Id> {
    pub(crate) fn new(node: &'a Id, weight: Weight) -> Self {
        Self { node, weight }
    }
}

impl<Id> PartialOrd for Candidate<'_, Id> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<Id> PartialEq for Candidate<'_, Id> {
    fn eq(&self, other: &Self) -> bool {
        other.weight == self.weight
    }
}

impl<Id> Eq for Candidate<'_, Id> {}

impl<Id> Ord for Candidate<'_, Id> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed, so the smallest weight is at the top of the max heap
        other
            .weight
            .partial_cmp(&self.weight)
            .unwrap_or(std::cmp::Ordering::Equal)
    }
}

pub struct Dijkstra<'a, Id = String> {
    pub stats: SearchStats,
    g: &'a Graph<Id>,
}

impl<'a, Id: NodeId> Dijkstra<'a, Id> {
    pub fn new(graph: &'a Graph<Id>) -> Self {
        Dijkstra {
            g: graph,
            stats: SearchStats::default(),
        }
    }

    /// Point to point query from `source` to `target`.
    ///
    /// The search stops as soon as `target` is settled.
    pub fn search<Q>(
        &mut self,
        source: &Q,
        target: &Q,
    ) -> Result<ShortestPath<Id>, GraphError<Id>>
    where
        Id: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = Id> + ?Sized,
    {
        let g = self.g;
        let source = &g.try_node(source)?.id;
        let target = &g.try_node(target)?.id;
        self.run(source, target)
    }

    fn run(
        &mut self,
        source: &'a Id,
        target: &'a Id,
    ) -> Result<ShortestPath<Id>, GraphError<Id>> {
        let g = self.g;

        debug!("BEGIN DIJKSTRA SEARCH from {:?} to {:?}", source, target);
        self.stats.init();

        if source == target {
            self.stats.nodes_settled += 1;
            self.stats.finish();
            return Ok(ShortestPath::new(vec![source.clone()], 0.0));
        }

        // Nodes without an entry have not been reached yet. A reached node may
        // still have distance INFINITY if the path weight overflowed.
        let mut node_data: FxHashMap<&Id, (Weight, Option<&Id>)> = FxHashMap::default();
        node_data.insert(source, (0.0, None));

        let mut queue = BinaryHeap::new();
        queue.push(Candidate::new(source, 0.0));

        while let Some(Candidate { node, weight }) = queue.pop() {
            if weight > node_data.get(node).map_or(INFINITY, |(w, _)| *w) {
                // Stale entry
                continue;
            }

            self.stats.nodes_settled += 1;

            if node == target {
                break;
            }

            for (neighbor, edge_weight) in g.neighbors_of(node)? {
                let new_distance = weight + edge_weight;
                let improves = match node_data.get(neighbor) {
                    Some((distance, _)) => new_distance < *distance,
                    None => true,
                };
                if improves {
                    node_data.insert(neighbor, (new_distance, Some(node)));
                    queue.push(Candidate::new(neighbor, new_distance));
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
