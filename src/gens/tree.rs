/*!
# Random Spanning Trees

Generates a random tree on `n` nodes by loop-avoiding random walks: a walk starts at a node
not yet attached to the tree and jumps to uniformly random nodes (never revisiting a node on
the current walk) until it hits the tree. The walk is then attached edge by edge.

# Examples

```
use mstbench::gens::*;

let mut rng = rand::rng();
let edges = RandomSpanningTree::new().nodes(5).root(0).generate(&mut rng);

assert_eq!(edges.len(), 4); // Always n-1 edges
```
*/

use rand_distr::{Distribution, Uniform};

use super::*;

/// Generator for a random spanning tree rooted at `root` (default: `0`).
#[derive(Debug, Copy, Clone, Default)]
pub struct RandomSpanningTree {
    n: NumNodes,
    root: Node,
}

impl RandomSpanningTree {
    /// Creates a new generator with `n = 0` and `root = 0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root node of the tree.
    ///
    /// # Panics
    /// Panics if `root >= n` when used in generation.
    pub fn root(mut self, root: Node) -> Self {
        self.root = root;
        self
    }
}

impl NumNodesGen for RandomSpanningTree {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl GraphGenerator for RandomSpanningTree {
    type Item = Edge;

    fn stream<'a, R>(&'a self, rng: &'a mut R) -> impl Iterator<Item = Edge> + 'a
    where
        R: Rng,
    {
        TreeWalk::new(self.n, self.root, rng)
    }
}

/// Iterator over the edges of a random spanning tree; yields exactly `n - 1` edges.
///
/// Edges are produced one walk at a time. A walk starts at a node outside the tree, keeps
/// jumping to uniformly random nodes it has not visited yet and stops as soon as it lands on
/// a tree node. The walk `s0 -> s1 -> .. -> sk` then joins the tree as the edges
/// `(sk, sk-1), .., (s1, s0)`, so every prefix of the output is a tree containing the root
/// and the first endpoint of each edge is already attached.
///
/// # Panics
/// Panics if `root >= n`.
pub struct TreeWalk<'a, R>
where
    R: Rng,
{
    rng: &'a mut R,
    sampler: Uniform<Node>,
    /// Nodes of the tree, including those of the current walk
    in_tree: Vec<bool>,
    on_walk: Vec<bool>,
    walk: Vec<Node>,
    /// Edges of the current walk not yet yielded
    pending: usize,
    /// Nodes neither in the tree nor on a walk
    missing: NumNodes,
}

impl<'a, R> TreeWalk<'a, R>
where
    R: Rng,
{
    pub fn new(n: NumNodes, root: Node, rng: &'a mut R) -> Self {
        assert!(root < n);

        let mut in_tree = vec![false; n as usize];
        in_tree[root as usize] = true;

        Self {
            rng,
            // `0 < n` as `root < n`
            sampler: Uniform::new(0, n).unwrap(),
            in_tree,
            on_walk: vec![false; n as usize],
            walk: Vec::new(),
            pending: 0,
            missing: n - 1,
        }
    }

    /// Replaces the finished walk by a new one ending in the tree
    fn next_walk(&mut self) {
        for &u in &self.walk {
            self.on_walk[u as usize] = false;
        }
        self.walk.clear();

        loop {
            let u = self.sampler.sample(self.rng);
            if self.on_walk[u as usize] || (self.walk.is_empty() && self.in_tree[u as usize]) {
                continue;
            }

            self.on_walk[u as usize] = true;
            self.walk.push(u);

            if self.in_tree[u as usize] {
                break;
            }
            self.in_tree[u as usize] = true;
            self.missing -= 1;
        }

        self.pending = self.walk.len() - 1;
    }
}

impl<'a, R> Iterator for TreeWalk<'a, R>
where
    R: Rng,
{
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pending == 0 {
            if self.missing == 0 {
                return None;
            }
            self.next_walk();
        }

        let i = self.pending;
        self.pending -= 1;
        Some(Edge(self.walk[i], self.walk[i - 1]))
    }
}
