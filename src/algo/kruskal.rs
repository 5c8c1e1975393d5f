use tracing::debug;

use super::*;

/// Kruskal's algorithm.
///
/// Scans the edges by ascending weight (equal weights in insertion order) and keeps every
/// edge that joins two different components of a [`DisjointSet`]. Every edge is
/// considered, even after `n - 1` edges have been selected, and each consideration counts
/// as one operation.
///
/// Runs in `O(m log m)`, dominated by sorting.
pub struct Kruskal<'a, G> {
    graph: &'a G,
}

impl<'a, G> Kruskal<'a, G>
where
    G: WeightedAdjacencyList,
{
    pub fn new(graph: &'a G) -> Self {
        Self { graph }
    }

    /// Computes a minimum spanning forest of the graph
    pub fn run(self) -> MstResult {
        let mut meter = OperationMeter::start();

        let edges = self.graph.edges_by_weight();
        let mut components = DisjointSet::new(self.graph.number_of_nodes());
        let mut selected = Vec::with_capacity(self.graph.len().saturating_sub(1));

        for edge in edges {
            meter.tick();
            if components.union(edge.u, edge.v) {
                selected.push(edge);
            }
        }

        let result = meter.finish(MstAlgorithm::Kruskal, selected);
        debug!(
            edges = result.number_of_edges(),
            cost = result.total_cost(),
            ops = result.operations(),
            time_ms = result.time_ms(),
            "kruskal finished"
        );
        result
    }
}
