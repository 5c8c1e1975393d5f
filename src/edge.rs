use std::fmt::{Debug, Display};

use serde::{Deserialize, Serialize};

use crate::{Node, Weight};

/// An unweighted edge defined by its two endpoints.
/// Used by the generators, which only decide the topology of a graph.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Attaches a weight to the edge
    pub fn with_weight(self, w: Weight) -> WeightedEdge {
        WeightedEdge::new(self.0, self.1, w)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

/// An undirected edge `{u, v}` with integer weight `w`.
///
/// `(u, v, w)` and `(v, u, w)` denote the same edge; the endpoints are kept in the order
/// they were given so that results can be reported exactly as they were found.
/// Serializes as `{"u": .., "v": .., "w": ..}`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeightedEdge {
    pub u: Node,
    pub v: Node,
    pub w: Weight,
}

impl WeightedEdge {
    pub const fn new(u: Node, v: Node, w: Weight) -> Self {
        Self { u, v, w }
    }

    /// Drops the weight
    pub fn edge(&self) -> Edge {
        Edge(self.u, self.v)
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.u == self.v
    }

    /// Returns the same edge with endpoints ordered ascendingly.
    /// Two undirected edges are equal iff their normalized forms are equal.
    pub fn normalized(&self) -> Self {
        Self::new(self.u.min(self.v), self.u.max(self.v), self.w)
    }
}

impl Display for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{};{})", self.u, self.v, self.w)
    }
}

impl Debug for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl From<(Node, Node, Weight)> for WeightedEdge {
    fn from(value: (Node, Node, Weight)) -> Self {
        WeightedEdge::new(value.0, value.1, value.2)
    }
}

impl From<&(Node, Node, Weight)> for WeightedEdge {
    fn from(value: &(Node, Node, Weight)) -> Self {
        WeightedEdge::new(value.0, value.1, value.2)
    }
}

impl From<&WeightedEdge> for WeightedEdge {
    fn from(value: &WeightedEdge) -> Self {
        *value
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn normalized_keeps_weight() {
        let e = WeightedEdge::new(5, 2, -3);
        assert_eq!(e.normalized(), WeightedEdge::new(2, 5, -3));
        assert_eq!(e.normalized(), WeightedEdge::new(2, 5, -3).normalized());
        assert!(!e.is_loop());
        assert!(WeightedEdge::new(1, 1, 0).is_loop());
    }

    #[test]
    fn serializes_as_uvw() {
        let json = serde_json::to_string(&WeightedEdge::new(0, 3, 4)).unwrap();
        assert_eq!(json, r#"{"u":0,"v":3,"w":4}"#);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{:?}", Edge(1, 2)), "(1,2)");
        assert_eq!(format!("{}", Edge(3, 1).with_weight(7)), "(3,1;7)");
    }
}
