/*!
# MST Algorithms

This module provides the **minimum spanning tree engines** together with the structures they
are built on. Everything is re-exported at the top level of this module, so you can simply do:
```rust
use mstbench::algo::*;
```
and call `graph.kruskal()` / `graph.prim()` on any weighted graph.

- [`DisjointSet`]: union-find with union by rank and path compression,
- [`Kruskal`]: sorts the edges and greedily merges components,
- [`Prim`]: grows a tree from node `0` using a binary-heap frontier,
- [`OperationMeter`]: per-run operation counter and wall-clock timer,
- [`MstResult`]: selected edges, total cost, operation count and elapsed time of a run.
*/

mod kruskal;
mod meter;
mod mst;
mod prim;
mod union_find;

use crate::prelude::*;

pub use kruskal::*;
pub use meter::*;
pub use mst::*;
pub use prim::*;
pub use union_find::*;
