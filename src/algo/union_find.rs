/*!
# Disjoint Sets

A union-find structure over the nodes `0..n` with **union by rank** and **path compression**.
Used by Kruskal's algorithm to detect whether an edge would close a cycle.

# Example

```rust
use mstbench::algo::DisjointSet;

let mut sets = DisjointSet::new(4);
assert!(sets.union(0, 1));
assert!(sets.union(2, 3));
assert!(!sets.union(1, 0));

assert_eq!(sets.number_of_sets(), 2);
assert!(sets.same_set(0, 1));
assert!(!sets.same_set(1, 2));
```
*/

use super::*;

/// Partition of `0..n` into disjoint sets.
///
/// Initially every node is a singleton and its own root with rank `0`.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<Node>,
    rank: Vec<u8>,
    num_sets: NumNodes,
}

impl DisjointSet {
    /// Creates `n` singleton sets
    pub fn new(n: NumNodes) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n as usize],
            num_sets: n,
        }
    }

    /// Returns the number of elements
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns *true* if the structure holds no elements
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint sets
    pub fn number_of_sets(&self) -> NumNodes {
        self.num_sets
    }

    /// Returns the representative of the set containing `x`.
    ///
    /// Every node visited on the way is re-pointed directly to the root afterwards.
    /// ** Panics if `x >= n` **
    pub fn find(&mut self, x: Node) -> Node {
        let mut root = x;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        let mut u = x;
        while u != root {
            let next = self.parent[u as usize];
            self.parent[u as usize] = root;
            u = next;
        }

        root
    }

    /// Merges the sets of `a` and `b`.
    ///
    /// Returns *false* (and changes nothing) if both already share a set. Otherwise the
    /// root of lower rank is attached below the other one; on equal ranks the root of `b`
    /// goes below the root of `a`, whose rank is incremented.
    /// ** Panics if `a >= n || b >= n` **
    pub fn union(&mut self, a: Node, b: Node) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }

        let (rank_a, rank_b) = (self.rank[ra as usize], self.rank[rb as usize]);
        if rank_a < rank_b {
            self.parent[ra as usize] = rb;
        } else {
            self.parent[rb as usize] = ra;
            if rank_a == rank_b {
                self.rank[ra as usize] += 1;
            }
        }

        self.num_sets -= 1;
        true
    }

    /// Returns *true* if `a` and `b` are in the same set
    /// ** Panics if `a >= n || b >= n` **
    pub fn same_set(&mut self, a: Node, b: Node) -> bool {
        self.find(a) == self.find(b)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn singletons() {
        let mut sets = DisjointSet::new(10);
        assert_eq!(sets.len(), 10);
        assert_eq!(sets.number_of_sets(), 10);
        for u in 0..10 {
            assert_eq!(sets.find(u), u);
        }
        assert!(DisjointSet::new(0).is_empty());
    }

    #[test]
    fn union_reports_cycles() {
        let mut sets = DisjointSet::new(5);
        assert!(sets.union(0, 1));
        assert!(sets.union(1, 2));
        assert!(!sets.union(0, 2));
        assert!(!sets.union(2, 2));
        assert!(sets.union(3, 4));
        assert!(sets.union(4, 0));
        assert_eq!(sets.number_of_sets(), 1);
        assert!(!sets.union(3, 1));
    }

    #[test]
    fn tie_attaches_second_root() {
        let mut sets = DisjointSet::new(4);
        sets.union(0, 1);
        assert_eq!(sets.find(1), 0);

        // rank(0) = 1 > rank(2) = 0
        sets.union(2, 0);
        assert_eq!(sets.find(2), 0);
    }

    #[test]
    fn find_compresses_paths() {
        let mut sets = DisjointSet::new(8);
        // build two rank-2 trees and merge them into a rank-3 tree
        for (a, b) in [(0, 1), (2, 3), (0, 2), (4, 5), (6, 7), (4, 6), (0, 4)] {
            assert!(sets.union(a, b));
        }

        let root = sets.find(0);
        for u in 0..8 {
            assert_eq!(sets.find(u), root);
            assert_eq!(sets.parent[u as usize], root);
        }
    }

    #[test]
    fn matches_naive_labelling() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [10 as NumNodes, 50, 200] {
            let mut sets = DisjointSet::new(n);
            let mut labels = (0..n).collect_vec();

            for _ in 0..(2 * n) {
                let a = rng.random_range(0..n);
                let b = rng.random_range(0..n);

                let (la, lb) = (labels[a as usize], labels[b as usize]);
                assert_eq!(sets.same_set(a, b), la == lb);
                assert_eq!(sets.union(a, b), la != lb);

                labels.iter_mut().filter(|l| **l == lb).for_each(|l| *l = la);
                assert_eq!(
                    sets.number_of_sets() as usize,
                    labels.iter().unique().count()
                );
            }
        }
    }

    #[test]
    #[should_panic]
    fn find_out_of_range() {
        DisjointSet::new(3).find(3);
    }
}
