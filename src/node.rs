/*!
# Node Representation

We choose `Node = u32` as almost all benchmark graphs have less than `2^32` nodes.
Nodes carry no data of their own: a node is identified by its position `0..n` in the graph.
*/

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// Edge weights are plain signed integers; zero and negative weights are allowed.
/// Sums of weights (the cost of a tree) use the same type and wrap around on overflow.
pub type Weight = i64;
