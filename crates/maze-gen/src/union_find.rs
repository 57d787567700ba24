//! Union-find (disjoint set union) over dense cell indices.
//!
//! The generator processes candidate edges in weight order and merges the
//! components on either side of every wall it removes; this structure
//! tracks which cells are already joined by carved passages.

use std::cmp::Ordering;

/// A mergeable partition of `0..n` with path compression and union by rank.
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    /// `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// Number of elements in the partition.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// True for a partition of zero elements.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Representative of the set containing `node`.
    ///
    /// Every node visited on the way up is re-pointed at the root.
    pub fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    /// Merge the sets containing `left` and `right`.
    ///
    /// The root with the smaller rank is attached below the other. On a rank
    /// tie the root of `left` becomes the parent and gains one rank. Returns
    /// `false` when both were already in the same set.
    pub fn union(&mut self, left: usize, right: usize) -> bool {
        let (a, b) = (self.find(left), self.find(right));
        if a == b {
            return false;
        }
        let (parent, child) = match self.rank[a].cmp(&self.rank[b]) {
            Ordering::Less => (b, a),
            Ordering::Greater => (a, b),
            Ordering::Equal => {
                self.rank[a] += 1;
                (a, b)
            }
        };
        self.parent[child] = parent;
        true
    }

    /// Whether `a` and `b` share a set.
    pub fn same(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }
}
