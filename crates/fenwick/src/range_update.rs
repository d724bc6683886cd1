use algebra::{Error, Monoid, Result};

use crate::FenwickTree;

/// Range-update/point-query companion to [`FenwickTree`], via the
/// difference-array transform: a range update composes `delta` at `l` and
/// `invert(delta)` at `r + 1`, and a point query is a prefix fold.
///
/// This is a separate type so the two usage modes cannot be mixed on one
/// instance. Every range update needs the inverse capability, so the
/// combine must be an (abelian) group operation; `Unsupported` is reported
/// otherwise.
#[derive(Clone, Debug)]
pub struct RangeUpdateFenwick<M: Monoid> {
    diff: FenwickTree<M>,
}

impl<M: Monoid> RangeUpdateFenwick<M> {
    /// Every position starts at the identity.
    pub fn new(len: usize) -> Self {
        Self {
            diff: FenwickTree::new(len),
        }
    }

    pub fn len(&self) -> usize {
        self.diff.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diff.is_empty()
    }

    /// Compose `delta` into every position of `[l, r]`; `O(log n)`.
    pub fn range_update(&mut self, l: usize, r: usize, delta: M::Value) -> Result<()> {
        if l > r {
            return Err(Error::InvalidRange { start: l, end: r });
        }
        if l == 0 || r > self.diff.len() {
            let index = if l == 0 { l } else { r };
            return Err(Error::OutOfRange {
                index,
                len: self.diff.len(),
            });
        }
        // Checked up front even when `r == n`, so the call either fully
        // applies or leaves the structure untouched.
        let inverted = M::invert(&delta)
            .ok_or(Error::Unsupported("range update needs an invertible combine"))?;
        self.diff.update(l, delta)?;
        if r < self.diff.len() {
            self.diff.update(r + 1, inverted)?;
        }
        Ok(())
    }

    /// Current value at `index`; `O(log n)`.
    pub fn point_query(&self, index: usize) -> Result<M::Value> {
        if index == 0 || index > self.diff.len() {
            return Err(Error::OutOfRange {
                index,
                len: self.diff.len(),
            });
        }
        self.diff.prefix_query(index)
    }
}
