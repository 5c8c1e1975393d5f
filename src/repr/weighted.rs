use super::*;

/// An undirected, weighted multigraph on the nodes `0..n`.
///
/// Every edge is stored once in `edges` (in insertion order) and mirrored into the
/// neighborhoods of both endpoints. A self-loop `(u, u, w)` therefore appears twice in
/// the neighborhood of `u`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WeightedGraph {
    nbs: Vec<Vec<(Node, Weight)>>,
    edges: Vec<WeightedEdge>,
}

impl WeightedGraph {
    /// Creates a graph with `n` isolated nodes from an untrusted node count.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidArgument`] if `n` is negative or too large for [`NumNodes`].
    ///
    /// # Example
    /// ```
    /// use mstbench::prelude::*;
    ///
    /// assert!(WeightedGraph::try_new(-1).is_err());
    /// assert_eq!(WeightedGraph::try_new(4).unwrap().number_of_nodes(), 4);
    /// ```
    pub fn try_new(n: i64) -> Result<Self, GraphError> {
        let n = NumNodes::try_from(n).map_err(|_| GraphError::InvalidArgument(n))?;
        Ok(Self::new(n))
    }

    /// Returns the edge list in insertion order
    pub fn edge_list(&self) -> &[WeightedEdge] {
        &self.edges
    }
}

impl GraphNodeOrder for WeightedGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl GraphEdgeOrder for WeightedGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }
}

impl WeightedAdjacencyList for WeightedGraph {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.nbs[u as usize].iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].len() as NumNodes
    }

    fn edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.edges.iter().copied()
    }
}

impl GraphNew for WeightedGraph {
    fn new(n: NumNodes) -> Self {
        Self {
            nbs: vec![Vec::new(); n as usize],
            edges: Vec::new(),
        }
    }
}

impl GraphEdgeEditing for WeightedGraph {
    fn add_edge(&mut self, u: Node, v: Node, w: Weight) {
        self.nbs[u as usize].push((v, w));
        self.nbs[v as usize].push((u, w));
        self.edges.push(WeightedEdge::new(u, v, w));
    }
}
