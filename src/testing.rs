use itertools::Itertools;

use crate::{algo::*, prelude::*};

/// Exhaustively searches all `(n - 1)`-subsets of the edges for a spanning tree of minimum cost.
/// Only feasible for tiny graphs; returns `None` for disconnected graphs.
pub(crate) fn brute_force_mst_cost(graph: &WeightedGraph) -> Option<Weight> {
    let n = graph.number_of_nodes();
    if n <= 1 {
        return Some(0);
    }

    graph
        .edges()
        .combinations(n as usize - 1)
        .filter(|edges| {
            let mut sets = DisjointSet::new(n);
            edges.iter().all(|e| sets.union(e.u, e.v))
        })
        .map(|edges| edges.iter().map(|e| e.w).sum::<Weight>())
        .min()
}

/// Every MST engine must satisfy the same properties; `$method` is the method of
/// [`MinimumSpanningTree`] running the engine under test. Invoke it from within `crate::algo`,
/// whose glob import also brings the graph types into scope.
macro_rules! test_mst_engine {
    ($env:ident, $method:ident) => {
        #[cfg(test)]
        mod $env {
            use crate::{algo::*, gens::*, testing::brute_force_mst_cost};
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            fn small_connected() -> WeightedGraph {
                WeightedGraph::from_weighted_edges(
                    4,
                    [(0, 1, 1), (1, 2, 2), (2, 3, 3), (0, 3, 4), (0, 2, 5)],
                )
            }

            fn disconnected() -> WeightedGraph {
                WeightedGraph::from_weighted_edges(4, [(0, 1, 1), (2, 3, 2)])
            }

            #[test]
            fn scenario_connected() {
                let graph = small_connected();
                let res = graph.$method();

                assert_eq!(res.total_cost(), 6);
                assert_eq!(res.number_of_edges(), 3);
                assert_eq!(
                    res.edges().iter().map(|e| e.normalized()).sorted_by_key(|e| e.w).collect_vec(),
                    vec![
                        WeightedEdge::new(0, 1, 1),
                        WeightedEdge::new(1, 2, 2),
                        WeightedEdge::new(2, 3, 3)
                    ]
                );
                assert!(res.is_spanning_tree_of(&graph));
            }

            #[test]
            fn scenario_disconnected() {
                let graph = disconnected();
                let res = graph.$method();

                assert!(res.number_of_edges() < graph.number_of_nodes() - 1);
                assert!(res.is_forest(graph.number_of_nodes()));
                assert!(!res.is_spanning_tree_of(&graph));
            }

            #[test]
            fn metrics_non_negative() {
                let res = small_connected().$method();
                assert!(res.time_ms() >= 0.0);
                assert!(res.operations() >= res.number_of_edges() as u64);
            }

            #[test]
            fn reproducible() {
                let rng = &mut Pcg64Mcg::seed_from_u64(5);
                for _ in 0..10 {
                    let graph: WeightedGraph = RandomWeightedGraph::new()
                        .nodes(40)
                        .extra_edges(80)
                        .weights(1..=5)
                        .build(rng);

                    let a = graph.$method();
                    let b = graph.$method();
                    assert_eq!(a.total_cost(), b.total_cost());
                    assert_eq!(a.edges(), b.edges());
                    assert_eq!(a.operations(), b.operations());
                }
            }

            #[test]
            fn optimal_on_tiny_graphs() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);
                for n in 1..=6 {
                    for _ in 0..20 {
                        let extra = rng.random_range(0..=4);
                        let graph: WeightedGraph = RandomWeightedGraph::new()
                            .nodes(n)
                            .extra_edges(extra)
                            .weights(-3..=3)
                            .build(rng);

                        let res = graph.$method();
                        assert!(res.is_spanning_tree_of(&graph) || n == 1);
                        assert_eq!(Some(res.total_cost()), brute_force_mst_cost(&graph));
                    }
                }
            }

            #[test]
            fn agrees_with_other_engines() {
                let rng = &mut Pcg64Mcg::seed_from_u64(4);
                for n in [10 as NumNodes, 50, 200] {
                    for extra in [0, n, 5 * n] {
                        let graph: WeightedGraph = RandomWeightedGraph::new()
                            .nodes(n)
                            .extra_edges(extra)
                            .weights(-20..=20)
                            .build(rng);

                        let res = graph.$method();
                        assert!(res.is_spanning_tree_of(&graph));
                        for other in MstAlgorithm::ALL {
                            assert_eq!(res.total_cost(), other.run(&graph).total_cost());
                        }
                    }
                }
            }

            #[test]
            fn isolated_nodes_break_spanning() {
                let rng = &mut Pcg64Mcg::seed_from_u64(6);
                let tree: WeightedGraph = RandomWeightedGraph::new().nodes(20).extra_edges(10).build(rng);

                // same edges, two isolated nodes appended
                let graph = WeightedGraph::from_weighted_edges(22, tree.edges());

                let res = graph.$method();
                assert_eq!(res.number_of_edges(), 19);
                assert_eq!(res.total_cost(), tree.$method().total_cost());
                assert!(!res.is_spanning_tree_of(&graph));
            }

            #[test]
            fn loops_and_parallel_edges() {
                let graph = WeightedGraph::from_weighted_edges(
                    3,
                    [(0, 0, -10), (0, 1, 4), (1, 0, 2), (1, 1, -1), (2, 1, 3), (1, 2, 3)],
                );

                let res = graph.$method();
                assert_eq!(res.total_cost(), 5);
                assert!(res.edges().iter().all(|e| !e.is_loop()));
                assert!(res.is_spanning_tree_of(&graph));
            }
        }
    };
}

pub(crate) use test_mst_engine;
