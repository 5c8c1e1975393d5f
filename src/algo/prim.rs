use std::{cmp::Reverse, collections::BinaryHeap};

use tracing::debug;

use super::*;

/// Prim's algorithm with a lazy binary-heap frontier.
///
/// Grows a tree from node `0`. The frontier holds candidate edges `(source, target, weight)`
/// leaving the tree; an entry whose target has been reached in the meantime stays in the
/// heap and is discarded when it is extracted. Every extraction, including discarded ones,
/// counts as one operation.
///
/// Only the component containing node `0` is spanned. An empty graph yields an empty result.
/// All working memory is allocated by [`Prim::run`] while the clock is running.
///
/// Runs in `O(m log m)`.
pub struct Prim<'a, G> {
    graph: &'a G,
}

/// Candidate edge in the frontier.
/// Ordered by weight first; equal weights are extracted in the order they were pushed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct FrontierEntry {
    weight: Weight,
    seq: u64,
    target: Node,
    source: Node,
}

/// Visited nodes and the min-heap of edges leaving them
struct Frontier {
    visited: Vec<bool>,
    heap: BinaryHeap<Reverse<FrontierEntry>>,
    pushed: u64,
}

impl Frontier {
    fn new(n: usize) -> Self {
        Self {
            visited: vec![false; n],
            heap: BinaryHeap::new(),
            pushed: 0,
        }
    }

    /// Marks `u` as part of the tree and pushes its edges to unvisited neighbors
    fn visit<G: WeightedAdjacencyList>(&mut self, graph: &G, u: Node) {
        self.visited[u as usize] = true;

        for (v, weight) in graph.neighbors_of(u) {
            if self.visited[v as usize] {
                continue;
            }

            self.heap.push(Reverse(FrontierEntry {
                weight,
                seq: self.pushed,
                target: v,
                source: u,
            }));
            self.pushed += 1;
        }
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }

    fn is_visited(&self, u: Node) -> bool {
        self.visited[u as usize]
    }
}

impl<'a, G> Prim<'a, G>
where
    G: WeightedAdjacencyList,
{
    pub fn new(graph: &'a G) -> Self {
        Self { graph }
    }

    /// Computes a minimum spanning tree of the component containing node `0`
    pub fn run(self) -> MstResult {
        let mut meter = OperationMeter::start();
        let mut frontier = Frontier::new(self.graph.len());
        let mut selected = Vec::with_capacity(self.graph.len().saturating_sub(1));

        if !self.graph.is_empty() {
            frontier.visit(self.graph, 0);

            while let Some(entry) = frontier.pop() {
                meter.tick();
                if frontier.is_visited(entry.target) {
                    continue;
                }

                selected.push(WeightedEdge::new(entry.source, entry.target, entry.weight));
                frontier.visit(self.graph, entry.target);
            }
        }

        let result = meter.finish(MstAlgorithm::Prim, selected);
        debug!(
            edges = result.number_of_edges(),
            cost = result.total_cost(),
            ops = result.operations(),
            time_ms = result.time_ms(),
            "prim finished"
        );
        result
    }
}
