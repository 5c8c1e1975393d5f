use std::time::Instant;

use super::*;

/// Per-run instrumentation of an MST engine.
///
/// A meter is created when an engine starts, counts the engine's work units and is
/// consumed by [`OperationMeter::finish`] to stamp the elapsed wall-clock time onto the
/// result. Each run owns its meter; nothing is accumulated across runs.
#[derive(Debug)]
pub struct OperationMeter {
    started: Instant,
    operations: u64,
}

impl Default for OperationMeter {
    fn default() -> Self {
        Self::start()
    }
}

impl OperationMeter {
    /// Starts the clock with zero operations counted
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
            operations: 0,
        }
    }

    /// Counts one unit of work
    #[inline]
    pub fn tick(&mut self) {
        self.operations += 1;
    }

    /// Returns the number of operations counted so far
    pub fn operations(&self) -> u64 {
        self.operations
    }

    /// Stops the clock and assembles the result of the run
    pub fn finish(self, algorithm: MstAlgorithm, edges: Vec<WeightedEdge>) -> MstResult {
        let time_ms = self.started.elapsed().as_secs_f64() * 1000.0;
        let total_cost = edges.iter().map(|e| e.w).fold(0, Weight::wrapping_add);

        MstResult {
            algorithm,
            edges,
            total_cost,
            operations: self.operations,
            time_ms,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn counts_and_sums() {
        let mut meter = OperationMeter::start();
        for _ in 0..5 {
            meter.tick();
        }
        assert_eq!(meter.operations(), 5);

        let res = meter.finish(
            MstAlgorithm::Kruskal,
            vec![WeightedEdge::new(0, 1, 3), WeightedEdge::new(1, 2, -1)],
        );
        assert_eq!(res.operations(), 5);
        assert_eq!(res.total_cost(), 2);
        assert!(res.time_ms() >= 0.0);
    }

    #[test]
    fn cost_wraps_on_overflow() {
        let graph = WeightedGraph::from_weighted_edges(3, [(0, 1, Weight::MAX), (1, 2, 1)]);
        assert_eq!(graph.kruskal().total_cost(), Weight::MIN);
        assert_eq!(graph.prim().total_cost(), Weight::MIN);
    }
}
