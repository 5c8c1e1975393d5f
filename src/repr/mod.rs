/*!
# Graph Representations

Weighted undirected graphs are stored as an adjacency array of `(neighbor, weight)` pairs
next to a flat edge list in insertion order. The edge list is what Kruskal sorts, the
adjacency array is what Prim expands; both views are kept in sync while edges are added
and the graph is never shrunk.
*/

use thiserror::Error;

use crate::{ops::*, *};

mod weighted;

pub use weighted::*;

/// Errors raised while constructing a graph
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The requested number of nodes is negative or does not fit into [`NumNodes`]
    #[error("invalid argument: cannot create a graph with {0} nodes")]
    InvalidArgument(i64),
}
