use std::fmt::Debug;

use thiserror::Error;

use crate::constants::Weight;

/// Errors raised by graph construction and search queries.
///
/// An unreachable target is not an error, see
/// [`ShortestPath::unreachable`](crate::search::shortest_path::ShortestPath::unreachable).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError<Id: Debug> {
    #[error("Node {0:?} does not exist")]
    UnknownNode(Id),
    #[error("Node {0:?} already exists")]
    DuplicateNode(Id),
    #[error("Invalid weight {weight} for edge {from:?} <=> {to:?}")]
    InvalidWeight { from: Id, to: Id, weight: Weight },
    #[error("Self loop on node {0:?} is not allowed")]
    SelfLoop(Id),
}
