use algebra::{Error, Result};

/// Union-find that additionally tracks an `i64` potential per element, so
/// any two connected elements have a known difference.
///
/// `union(x, y, w)` records the relation `value[y] - value[x] = w`. The
/// stored potential of an element is relative to its current parent; path
/// compression accumulates potentials so that after a find each visited
/// element holds its offset from the representative directly. Arithmetic
/// wraps.
#[derive(Clone, Debug)]
pub struct WeightedUnionFind {
    parent: Vec<usize>,
    potential: Vec<i64>,
}

impl WeightedUnionFind {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            potential: vec![0; n],
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
        Ok(self.find_root(x).0)
    }

    /// Returns the root and `value[x] - value[root]`, compressing the path.
    fn find_root(&mut self, x: usize) -> (usize, i64) {
        let mut root = x;
        let mut offset = 0_i64;
        while self.parent[root] != root {
            offset = offset.wrapping_add(self.potential[root]);
            root = self.parent[root];
        }

        // Relink every visited node to the root, keeping `potential` as the
        // offset from the root.
        let mut cur = x;
        let mut remaining = offset;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            let step = self.potential[cur];
            self.parent[cur] = root;
            self.potential[cur] = remaining;
            remaining = remaining.wrapping_sub(step);
            cur = next;
        }

        (root, offset)
    }

    /// Merge the classes of `x` and `y` under the relation
    /// `value[y] - value[x] = weight`.
    ///
    /// Returns `false` (without re-weighting) when already connected.
    pub fn union(&mut self, x: usize, y: usize, weight: i64) -> Result<bool> {
        self.check(x)?;
        self.check(y)?;
        let (root_x, dx) = self.find_root(x);
        let (root_y, dy) = self.find_root(y);
        if root_x == root_y {
            return Ok(false);
        }
        // value[root_y] - value[root_x] = dx + weight - dy
        self.parent[root_y] = root_x;
        self.potential[root_y] = dx.wrapping_add(weight).wrapping_sub(dy);
        Ok(true)
    }

    /// `Some(value[y] - value[x])` when connected, `None` otherwise.
    pub fn difference(&mut self, x: usize, y: usize) -> Result<Option<i64>> {
        self.check(x)?;
        self.check(y)?;
        let (root_x, dx) = self.find_root(x);
        let (root_y, dy) = self.find_root(y);
        if root_x != root_y {
            return Ok(None);
        }
        Ok(Some(dy.wrapping_sub(dx)))
    }
}
