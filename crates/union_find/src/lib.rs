use algebra::{Error, Result};

mod weighted;

pub use weighted::WeightedUnionFind;

/// Disjoint-set structure over `n` elements with union by rank and full
/// path compression; `find`/`union`/`connected` run in amortized
/// near-constant time.
///
/// Merge outcomes are deterministic: the smaller-rank root is relinked
/// under the larger, and on a rank tie the root of `x`'s class becomes the
/// parent and its rank increments.
#[derive(Clone, Debug)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u32>,
    size: Vec<usize>,
    classes: usize,
}

impl UnionFind {
    /// `n` singleton classes, each element its own representative.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            size: vec![1; n],
            classes: n,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    fn check(&self, index: usize) -> Result<()> {
        if index < self.parent.len() {
            Ok(())
        } else {
            Err(Error::OutOfRange {
                index,
                len: self.parent.len(),
            })
        }
    }

    /// Representative of `x`'s class.
    pub fn find(&mut self, x: usize) -> Result<usize> {
        self.check(x)?;
        Ok(self.find_root(x))
    }

    fn find_root(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Second pass: relink everything on the path directly to the root.
        let mut cur = x;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    /// Merge the classes of `x` and `y`.
    ///
    /// Returns `false` when they already share a class; that call is a
    /// legitimate no-op, not an error.
    pub fn union(&mut self, x: usize, y: usize) -> Result<bool> {
        self.check(x)?;
        self.check(y)?;
        let root_x = self.find_root(x);
        let root_y = self.find_root(y);
        if root_x == root_y {
            return Ok(false);
        }
        let (winner, loser) = if self.rank[root_x] < self.rank[root_y] {
            (root_y, root_x)
        } else {
            (root_x, root_y)
        };
        self.parent[loser] = winner;
        self.size[winner] += self.size[loser];
        if self.rank[winner] == self.rank[loser] {
            self.rank[winner] += 1;
        }
        self.classes -= 1;
        Ok(true)
    }

    pub fn connected(&mut self, x: usize, y: usize) -> Result<bool> {
        self.check(x)?;
        self.check(y)?;
        Ok(self.find_root(x) == self.find_root(y))
    }

    /// Number of elements in `x`'s class.
    pub fn class_size(&mut self, x: usize) -> Result<usize> {
        self.check(x)?;
        let root = self.find_root(x);
        Ok(self.size[root])
    }

    /// Number of distinct classes; O(1).
    pub fn class_count(&self) -> usize {
        self.classes
    }
}
