/*!
# Minimum Spanning Trees

Both engines are available as methods on every [`WeightedAdjacencyList`] via the
[`MinimumSpanningTree`] trait and return an [`MstResult`].

On a disconnected graph the engines do **not** fail:
- Kruskal returns a minimum spanning *forest* of the whole graph,
- Prim returns a minimum spanning tree of the component containing node `0`.

In both cases fewer than `n - 1` edges are returned, which [`MstResult::is_spanning_tree_of`]
detects.

# Example

```rust
use mstbench::{prelude::*, algo::*};

let graph = WeightedGraph::from_weighted_edges(
    4,
    [(0, 1, 1), (1, 2, 2), (2, 3, 3), (0, 3, 4), (0, 2, 5)],
);

let kruskal = graph.kruskal();
let prim = graph.prim();

assert_eq!(kruskal.total_cost(), 6);
assert_eq!(prim.total_cost(), 6);
assert!(kruskal.is_spanning_tree_of(&graph));
```
*/

use std::{fmt::Display, str::FromStr};

use serde::Serialize;

use super::*;

/// The MST engines available
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MstAlgorithm {
    Prim,
    Kruskal,
}

impl MstAlgorithm {
    /// All engines in the order they are reported
    pub const ALL: [MstAlgorithm; 2] = [MstAlgorithm::Prim, MstAlgorithm::Kruskal];

    /// Runs the engine on `graph`
    pub fn run<G: WeightedAdjacencyList>(&self, graph: &G) -> MstResult {
        match self {
            MstAlgorithm::Prim => Prim::new(graph).run(),
            MstAlgorithm::Kruskal => Kruskal::new(graph).run(),
        }
    }
}

impl Display for MstAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format!("{self:?}").to_lowercase())
    }
}

impl FromStr for MstAlgorithm {
    type Err = std::io::Error;

    fn from_str(s: &str) -> std::io::Result<Self> {
        match s.to_lowercase().as_str() {
            "prim" => Ok(MstAlgorithm::Prim),
            "kruskal" => Ok(MstAlgorithm::Kruskal),
            _ => Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Unknown MstAlgorithm: {s}"),
            )),
        }
    }
}

/// Outcome of one engine run on one graph.
///
/// `operations` counts engine-specific work units (edge considerations for Kruskal,
/// frontier extractions for Prim) and is only comparable between runs of the same engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MstResult {
    #[serde(skip)]
    pub(super) algorithm: MstAlgorithm,
    #[serde(rename = "mst_edges")]
    pub(super) edges: Vec<WeightedEdge>,
    pub(super) total_cost: Weight,
    #[serde(rename = "operations_count")]
    pub(super) operations: u64,
    #[serde(rename = "execution_time_ms")]
    pub(super) time_ms: f64,
}

impl MstResult {
    /// The engine that produced this result
    pub fn algorithm(&self) -> MstAlgorithm {
        self.algorithm
    }

    /// Selected edges in the order they were selected
    pub fn edges(&self) -> &[WeightedEdge] {
        &self.edges
    }

    /// Number of selected edges
    pub fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }

    /// Sum of the weights of all selected edges
    pub fn total_cost(&self) -> Weight {
        self.total_cost
    }

    /// Engine-specific work counter
    pub fn operations(&self) -> u64 {
        self.operations
    }

    /// Wall-clock duration of the run in milliseconds
    pub fn time_ms(&self) -> f64 {
        self.time_ms
    }

    /// Returns *true* if the selected edges contain no cycle
    pub fn is_forest(&self, n: NumNodes) -> bool {
        let mut sets = DisjointSet::new(n);
        self.edges.iter().all(|e| sets.union(e.u, e.v))
    }

    /// Returns *true* if the selected edges form a spanning tree of `graph`,
    /// ie. `n - 1` edges without a cycle. Always *false* for disconnected graphs.
    pub fn is_spanning_tree_of<G: GraphNodeOrder>(&self, graph: &G) -> bool {
        let n = graph.number_of_nodes();
        n > 0 && self.number_of_edges() == n - 1 && self.is_forest(n)
    }
}

/// Minimum spanning tree engines implemented on graphs
pub trait MinimumSpanningTree: WeightedAdjacencyList {
    /// Computes a minimum spanning forest with Kruskal's algorithm
    fn kruskal(&self) -> MstResult {
        Kruskal::new(self).run()
    }

    /// Computes a minimum spanning tree of the component of node `0` with Prim's algorithm
    fn prim(&self) -> MstResult {
        Prim::new(self).run()
    }

    /// Runs both engines, Prim first
    fn compare_engines(&self) -> [MstResult; 2] {
        MstAlgorithm::ALL.map(|algo| algo.run(self))
    }
}

impl<G: WeightedAdjacencyList> MinimumSpanningTree for G {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn algorithm_names() {
        for algo in MstAlgorithm::ALL {
            assert_eq!(algo.to_string().parse::<MstAlgorithm>().unwrap(), algo);
        }
        assert_eq!("PRIM".parse::<MstAlgorithm>().unwrap(), MstAlgorithm::Prim);
        assert!("boruvka".parse::<MstAlgorithm>().is_err());
    }

    #[test]
    fn forest_checks() {
        let graph = WeightedGraph::from_weighted_edges(3, [(0, 1, 1), (1, 2, 1), (2, 0, 1)]);
        let mut res = graph.kruskal();
        assert!(res.is_forest(3));
        assert!(res.is_spanning_tree_of(&graph));

        res.edges.push(WeightedEdge::new(2, 0, 1));
        assert!(!res.is_forest(3));
        assert!(!res.is_spanning_tree_of(&graph));
    }

    #[test]
    fn compare_engines_order() {
        let graph = WeightedGraph::from_weighted_edges(2, [(0, 1, 9)]);
        let [prim, kruskal] = graph.compare_engines();
        assert_eq!(prim.algorithm(), MstAlgorithm::Prim);
        assert_eq!(kruskal.algorithm(), MstAlgorithm::Kruskal);
        assert_eq!(prim.total_cost(), kruskal.total_cost());
    }

    #[test]
    fn serializes_report_fields() {
        let graph = WeightedGraph::from_weighted_edges(2, [(0, 1, 9)]);
        let json = serde_json::to_value(graph.kruskal()).unwrap();

        assert_eq!(json["total_cost"], 9);
        assert_eq!(json["operations_count"], 1);
        assert_eq!(json["mst_edges"][0]["w"], 9);
        assert!(json["execution_time_ms"].as_f64().unwrap() >= 0.0);
        assert!(json.get("algorithm").is_none());
    }
}
