use std::ops::RangeInclusive;

use rand_distr::{Distribution, Uniform};

use super::*;

/// Generator for connected weighted graphs.
///
/// The topology is a [`RandomSpanningTree`] on `n` nodes followed by `extra_edges` uniformly
/// random non-loop edges (parallel edges may occur). Every edge draws its weight uniformly
/// from `weights` (default `1..=100`).
///
/// # Example
/// ```
/// use mstbench::{prelude::*, gens::*};
///
/// let mut rng = rand::rng();
/// let graph: WeightedGraph = RandomWeightedGraph::new()
///     .nodes(10)
///     .extra_edges(15)
///     .weights(-5..=5)
///     .build(&mut rng);
///
/// assert_eq!(graph.number_of_nodes(), 10);
/// assert_eq!(graph.number_of_edges(), 9 + 15);
/// ```
#[derive(Debug, Clone)]
pub struct RandomWeightedGraph {
    n: NumNodes,
    extra_edges: NumEdges,
    weights: RangeInclusive<Weight>,
}

impl Default for RandomWeightedGraph {
    fn default() -> Self {
        Self {
            n: 0,
            extra_edges: 0,
            weights: 1..=100,
        }
    }
}

impl RandomWeightedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of edges added on top of the spanning tree
    pub fn extra_edges(mut self, m: NumEdges) -> Self {
        self.extra_edges = m;
        self
    }

    /// Sets the (inclusive) range weights are drawn from.
    ///
    /// # Panics
    /// Panics on generation if the range is empty.
    pub fn weights(mut self, weights: RangeInclusive<Weight>) -> Self {
        self.weights = weights;
        self
    }

    /// Generates the edges and collects them into a graph
    pub fn build<R, G>(&self, rng: &mut R) -> G
    where
        R: Rng,
        G: GraphFromScratch,
    {
        G::from_weighted_edges(self.n, self.generate(rng))
    }
}

impl NumNodesGen for RandomWeightedGraph {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl GraphGenerator for RandomWeightedGraph {
    type Item = WeightedEdge;

    fn stream<'a, R>(&'a self, rng: &'a mut R) -> impl Iterator<Item = WeightedEdge> + 'a
    where
        R: Rng,
    {
        let weight_gen =
            Uniform::new_inclusive(*self.weights.start(), *self.weights.end()).unwrap();

        // the tree is drawn first so the extra edges can reuse the random number generator
        let mut tree = if self.n > 0 {
            RandomSpanningTree::new().nodes(self.n).generate(rng)
        } else {
            Vec::new()
        };

        let extra = if self.n > 1 { self.extra_edges } else { 0 };
        for _ in 0..extra {
            let u = rng.random_range(0..self.n);
            let mut v = rng.random_range(0..self.n - 1);
            if v >= u {
                v += 1;
            }
            tree.push(Edge(u, v));
        }

        tree.into_iter()
            .map(move |e| e.with_weight(weight_gen.sample(rng)))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algo::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn connected_and_in_range() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for n in [1 as NumNodes, 2, 10, 50] {
            for extra in [0, n, 3 * n] {
                let graph: WeightedGraph = RandomWeightedGraph::new()
                    .nodes(n)
                    .extra_edges(extra)
                    .weights(-10..=10)
                    .build(rng);

                let expected = if n > 1 { n - 1 + extra } else { 0 };
                assert_eq!(graph.number_of_edges(), expected);
                assert!(graph.edges().all(|e| (-10..=10).contains(&e.w) && !e.is_loop()));

                let mut sets = DisjointSet::new(n);
                graph.edges().for_each(|e| {
                    sets.union(e.u, e.v);
                });
                assert_eq!(sets.number_of_sets(), 1);
            }
        }
    }

    #[test]
    fn empty_graph() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);
        let graph: WeightedGraph = RandomWeightedGraph::new().extra_edges(5).build(rng);
        assert!(graph.is_empty());
        assert!(graph.is_singleton());
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let generator = RandomWeightedGraph::new().nodes(20).extra_edges(30);
        let a = generator.generate(&mut Pcg64Mcg::seed_from_u64(11));
        let b = generator.generate(&mut Pcg64Mcg::seed_from_u64(11));
        assert_eq!(a, b);
    }
}
