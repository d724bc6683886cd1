use algebra::{Error, Monoid, Result};

mod range_update;

pub use range_update::RangeUpdateFenwick;

/// Binary indexed tree over a monoid `M`, **1-indexed**: positions run over
/// `[1, n]`. Slot `i` of the backing array owns the aggregate of the block
/// of `i & (-i)` positions ending at `i`.
///
/// `update` composes deltas into covering slots in block order, so the
/// combine must be commutative for the stored aggregates to be meaningful.
/// `range_query` additionally needs the inverse capability
/// ([`Monoid::invert`]) and reports `Unsupported` without it.
#[derive(Clone, Debug)]
pub struct FenwickTree<M: Monoid> {
    tree: Vec<M::Value>,
    len: usize,
}

impl<M: Monoid> FenwickTree<M> {
    /// Every position starts at the identity.
    pub fn new(len: usize) -> Self {
        Self {
            tree: vec![M::unit(); len + 1],
            len,
        }
    }

    /// O(n) bulk build: each slot pushes its block aggregate into the next
    /// covering slot (`i + (i & -i)`).
    pub fn from_values(values: &[M::Value]) -> Self {
        let len = values.len();
        let mut tree = Vec::with_capacity(len + 1);
        tree.push(M::unit());
        tree.extend_from_slice(values);
        for i in 1..=len {
            let parent = i + (i & i.wrapping_neg());
            if parent <= len {
                tree[parent] = M::combine(&tree[parent], &tree[i]);
            }
        }
        Self { tree, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Compose `delta` into position `index`; `O(log n)`.
    pub fn update(&mut self, index: usize, delta: M::Value) -> Result<()> {
        if index == 0 || index > self.len {
            return Err(Error::OutOfRange {
                index,
                len: self.len,
            });
        }
        let mut i = index;
        while i <= self.len {
            self.tree[i] = M::combine(&self.tree[i], &delta);
            i += i & i.wrapping_neg();
        }
        Ok(())
    }

    /// Fold of positions `[1, index]`; `O(log n)`.
    ///
    /// `index == 0` is the empty prefix and returns the identity.
    pub fn prefix_query(&self, index: usize) -> Result<M::Value> {
        if index > self.len {
            return Err(Error::OutOfRange {
                index,
                len: self.len,
            });
        }
        let mut acc = M::unit();
        let mut i = index;
        while i > 0 {
            acc = M::combine(&self.tree[i], &acc);
            i -= i & i.wrapping_neg();
        }
        Ok(acc)
    }

    /// Fold of positions `[l, r]`, derived as
    /// `combine(invert(prefix(l - 1)), prefix(r))`; `O(log n)`.
    pub fn range_query(&self, l: usize, r: usize) -> Result<M::Value> {
        if l > r {
            return Err(Error::InvalidRange { start: l, end: r });
        }
        if l == 0 {
            return Err(Error::OutOfRange {
                index: l,
                len: self.len,
            });
        }
        if r > self.len {
            return Err(Error::OutOfRange {
                index: r,
                len: self.len,
            });
        }
        let below = self.prefix_query(l - 1)?;
        let upto = self.prefix_query(r)?;
        let inverted = M::invert(&below)
            .ok_or(Error::Unsupported("range query needs an invertible combine"))?;
        Ok(M::combine(&inverted, &upto))
    }

    /// Single position `index`; `O(log n)`.
    pub fn get(&self, index: usize) -> Result<M::Value> {
        self.range_query(index, index)
    }
}
