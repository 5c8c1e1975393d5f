use serde::Serialize;
use tracing::info;

use super::*;
use crate::algo::*;

/// Size of an input graph as reported next to the results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InputStats {
    pub vertices: NumNodes,
    pub edges: NumEdges,
}

/// Results of both engines on one graph.
///
/// Serializes as
/// `{"graph_id", "input_stats": {"vertices", "edges"}, "prim": {..}, "kruskal": {..}}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphReport {
    pub graph_id: i64,
    pub input_stats: InputStats,
    pub prim: MstResult,
    pub kruskal: MstResult,
}

impl GraphReport {
    /// Runs both engines on the graph and collects their results
    pub fn benchmark(labelled: &LabelledGraph) -> Self {
        let graph = &labelled.graph;
        info!(
            id = labelled.id,
            vertices = graph.number_of_nodes(),
            edges = graph.number_of_edges(),
            "processing graph"
        );

        Self {
            graph_id: labelled.id,
            input_stats: InputStats {
                vertices: graph.number_of_nodes(),
                edges: graph.number_of_edges(),
            },
            prim: graph.prim(),
            kruskal: graph.kruskal(),
        }
    }

    /// Returns *true* if both engines found trees of equal cost
    pub fn costs_agree(&self) -> bool {
        self.prim.total_cost() == self.kruskal.total_cost()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn benchmark_runs_both_engines() {
        let labelled = LabelledGraph {
            id: 3,
            graph: WeightedGraph::from_weighted_edges(
                4,
                [(0, 1, 1), (1, 2, 2), (2, 3, 3), (0, 3, 4), (0, 2, 5)],
            ),
        };

        let report = GraphReport::benchmark(&labelled);
        assert_eq!(report.graph_id, 3);
        assert_eq!(
            report.input_stats,
            InputStats {
                vertices: 4,
                edges: 5
            }
        );
        assert_eq!(report.prim.algorithm(), MstAlgorithm::Prim);
        assert_eq!(report.kruskal.algorithm(), MstAlgorithm::Kruskal);
        assert!(report.costs_agree());
        assert_eq!(report.kruskal.operations(), 5);
    }

    #[test]
    fn json_layout() {
        let labelled = LabelledGraph {
            id: 1,
            graph: WeightedGraph::from_weighted_edges(2, [(1, 0, 8)]),
        };
        let reports = [GraphReport::benchmark(&labelled)];

        let mut buffer = Vec::new();
        JsonReportWriter::new()
            .try_write_reports(&reports, &mut buffer)
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

        let record = &json["results"][0];
        assert_eq!(record["graph_id"], 1);
        assert_eq!(record["input_stats"]["vertices"], 2);
        assert_eq!(record["input_stats"]["edges"], 1);
        assert_eq!(record["prim"]["total_cost"], 8);
        assert_eq!(record["prim"]["mst_edges"][0]["u"], 0);
        assert_eq!(record["kruskal"]["mst_edges"][0]["u"], 1);
        assert_eq!(record["kruskal"]["operations_count"], 1);
    }
}
