/*!
`mstbench` computes **minimum spanning trees** of weighted undirected graphs with the two
classical engines, Prim's and Kruskal's algorithm, and reports their cost, operation count
and running time side by side for benchmarking.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
Weights are `i64`; zero and negative weights are allowed.
For **edges**, we use the struct `WeightedEdge { u, v, w }`, which is undirected:
`(u, v, w)` and `(v, u, w)` denote the same edge.

A [`WeightedGraph`](crate::repr::WeightedGraph) stores every edge once in an edge list (in
insertion order) and twice in an adjacency array. Parallel edges and self-loops are kept.
Graphs are never modified by the engines.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, basic graph operations and the graph representation,
- [`algo`] includes the engines (`graph.kruskal()`, `graph.prim()`), the [`DisjointSet`](crate::algo::DisjointSet) and the [`MstResult`](crate::algo::MstResult),
- [`gens`] includes random generators for spanning trees and connected weighted graphs,
- [`io`] includes readers for Json graph sets and writers for Json/Csv reports and Dot renderings.

In most use-cases, `use mstbench::{prelude::*, algo::*};` suffices for your needs.

```
use mstbench::{prelude::*, algo::*};

let graph = WeightedGraph::from_weighted_edges(4, [(0, 1, 1), (2, 3, 2)]);

// Disconnected graphs are not an error: both engines return fewer than `n - 1` edges
assert!(graph.kruskal().number_of_edges() < 3);
assert!(graph.prim().number_of_edges() < 3);
```
*/

pub mod algo;
pub mod edge;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;

/// `mstbench::prelude` includes definitions for nodes and edges, all basic graph operation traits
/// as well as the graph representation.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*};
}

pub use edge::*;
pub use node::*;
