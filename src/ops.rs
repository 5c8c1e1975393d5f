use std::ops::Range;

use itertools::Itertools;

use crate::*;

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns a range of vertices.
    /// In contrast to self.vertices(), the range does not borrow self and hence may be
    /// used where additional mutable references of self are needed
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Getters for weighted neighborhoods & edges of an undirected graph
pub trait WeightedAdjacencyList: GraphNodeOrder + GraphEdgeOrder + Sized {
    /// Returns an iterator over `(neighbor, weight)` pairs of a given vertex.
    /// Every incident edge appears once, parallel edges appear multiple times and a
    /// self-loop appears twice.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_;

    /// Returns the number of incident edge-endpoints of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over all edges in insertion order.
    fn edges(&self) -> impl Iterator<Item = WeightedEdge> + '_;

    /// Returns the edges sorted by weight ascending; equal weights keep insertion order.
    fn edges_by_weight(&self) -> Vec<WeightedEdge> {
        let mut edges = self.edges().collect_vec();
        // `sort_by_key` is stable
        edges.sort_by_key(|e| e.w);
        edges
    }

    /// Returns the sum of all edge weights (wrapping on overflow)
    fn total_weight(&self) -> Weight {
        self.edges().map(|e| e.w).fold(0, Weight::wrapping_add)
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.vertices().map(|u| self.degree_of(u)).max().unwrap_or(0)
    }
}

/// Trait for creating a new graph
pub trait GraphNew {
    /// Creates an empty graph with n singleton nodes
    fn new(n: NumNodes) -> Self;
}

/// Trait for adding weighted edges to a graph
pub trait GraphEdgeEditing: GraphNew {
    /// Adds the undirected edge `{u, v}` with weight `w`.
    /// Parallel edges and self-loops are kept as they are.
    /// ** Panics if `u >= n || v >= n` **
    fn add_edge(&mut self, u: Node, v: Node, w: Weight);

    /// Adds all edges in the collection
    fn add_edges<I, E>(&mut self, edges: I)
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge>,
    {
        for WeightedEdge { u, v, w } in edges.into_iter().map(|e| e.into()) {
            self.add_edge(u, v, w);
        }
    }
}

/// Provides functions to create graphs from scratch
pub trait GraphFromScratch {
    /// Create a graph from a number of nodes and an iterator over edges
    fn from_weighted_edges<I, E>(n: NumNodes, edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge>;
}

impl<G: GraphEdgeEditing> GraphFromScratch for G {
    fn from_weighted_edges<I, E>(n: NumNodes, edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge>,
    {
        let mut graph = Self::new(n);
        graph.add_edges(edges);
        graph
    }
}
