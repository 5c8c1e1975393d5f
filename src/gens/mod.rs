/*!
# Graph Generators

Random graphs to feed the MST engines when benchmarking or testing.

Generators are configured with a builder-style interface before drawing from a random
number generator:

1. Create a generator instance (e.g., `RandomWeightedGraph::new()`).
2. Set parameters (e.g., `.nodes(n).extra_edges(m).weights(1..=100)`).
3. Generate via `generate(rng)` / `stream(rng)`.

Supported models:
- [`RandomSpanningTree`]: a uniformly-walked random tree on `n` nodes (exactly `n - 1` edges),
- [`RandomWeightedGraph`]: a connected weighted graph made of a random spanning tree plus
  additional uniformly random edges.
*/

use rand::Rng;

use crate::prelude::*;

mod tree;
mod weighted;

pub use tree::*;
pub use weighted::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen: Sized {
    /// Sets the number of nodes in the graph generator.
    fn set_nodes(&mut self, n: NumNodes);

    /// Sets the number of nodes in the graph generator.
    fn nodes(mut self, n: NumNodes) -> Self {
        self.set_nodes(n);
        self
    }
}

/// Trait for configured random edge generators.
pub trait GraphGenerator {
    /// The generated item (an [`Edge`] or a [`WeightedEdge`])
    type Item;

    /// Creates a lazy iterator over generated edges.
    fn stream<'a, R>(&'a self, rng: &'a mut R) -> impl Iterator<Item = Self::Item> + 'a
    where
        R: Rng;

    /// Generates a list of random edges.
    fn generate<R>(&self, rng: &mut R) -> Vec<Self::Item>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }
}
