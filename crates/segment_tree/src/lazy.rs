use algebra::{Error, LazyMonoid, Result};

/// Range-update/range-query segment tree with deferred bulk updates,
/// **0-indexed** with closed ranges, over a lazy monoid `P`.
///
/// Nodes live in a flat arena of `4 * n` slots with children of `i` at
/// `2i + 1` and `2i + 2`. A node's aggregate always reflects its own
/// pending action; its children are stale until the action is pushed down,
/// which happens on demand before any descent.
#[derive(Clone, Debug)]
pub struct LazySegmentTree<P: LazyMonoid> {
    len: usize,
    tree: Vec<P::Value>,
    pending: Vec<P::Act>,
    has_pending: Vec<bool>,
}

impl<P: LazyMonoid> LazySegmentTree<P> {
    /// Every leaf starts at the identity.
    pub fn new(len: usize) -> Self {
        let slots = if len == 0 { 0 } else { 4 * len };
        Self {
            len,
            tree: vec![P::unit(); slots],
            pending: vec![P::act_unit(); slots],
            has_pending: vec![false; slots],
        }
    }

    /// Bottom-up O(n) build.
    pub fn from_values(values: &[P::Value]) -> Self {
        let mut this = Self::new(values.len());
        if !values.is_empty() {
            this.build(values, 0, 0, values.len() - 1);
        }
        this
    }

    fn build(&mut self, values: &[P::Value], node: usize, start: usize, end: usize) {
        if start == end {
            self.tree[node] = values[start];
            return;
        }
        let mid = start + (end - start) / 2;
        self.build(values, 2 * node + 1, start, mid);
        self.build(values, 2 * node + 2, mid + 1, end);
        self.tree[node] = P::combine(&self.tree[2 * node + 1], &self.tree[2 * node + 2]);
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Fold its action into `node`, which spans `len` leaves: the aggregate
    /// reflects the action immediately, the children only after push-down.
    fn apply_action(&mut self, node: usize, act: &P::Act, len: usize) {
        self.tree[node] = P::act_apply(&self.tree[node], act, len);
        self.pending[node] = P::act_compose(act, &self.pending[node]);
        self.has_pending[node] = true;
    }

    fn push_down(&mut self, node: usize, start: usize, end: usize) {
        if !self.has_pending[node] {
            return;
        }
        if start != end {
            let act = self.pending[node];
            let mid = start + (end - start) / 2;
            self.apply_action(2 * node + 1, &act, mid - start + 1);
            self.apply_action(2 * node + 2, &act, end - mid);
        }
        self.pending[node] = P::act_unit();
        self.has_pending[node] = false;
    }

    /// Fold of `[l, r]`; `O(log n)`. Every query on an empty tree returns
    /// the identity.
    pub fn query(&mut self, l: usize, r: usize) -> Result<P::Value> {
        if l > r {
            return Err(Error::InvalidRange { start: l, end: r });
        }
        if self.len == 0 {
            return Ok(P::unit());
        }
        if r >= self.len {
            return Err(Error::OutOfRange {
                index: r,
                len: self.len,
            });
        }
        Ok(self.query_node(0, 0, self.len - 1, l, r))
    }

    fn query_node(&mut self, node: usize, start: usize, end: usize, l: usize, r: usize) -> P::Value {
        if r < start || end < l {
            return P::unit();
        }
        if l <= start && end <= r {
            return self.tree[node];
        }
        self.push_down(node, start, end);
        let mid = start + (end - start) / 2;
        let left = self.query_node(2 * node + 1, start, mid, l, r);
        let right = self.query_node(2 * node + 2, mid + 1, end, l, r);
        P::combine(&left, &right)
    }

    /// Apply `act` to every position of `[l, r]`; `O(log n)`. Accepted as a
    /// no-op on an empty tree.
    pub fn update(&mut self, l: usize, r: usize, act: P::Act) -> Result<()> {
        if l > r {
            return Err(Error::InvalidRange { start: l, end: r });
        }
        if self.len == 0 {
            return Ok(());
        }
        if r >= self.len {
            return Err(Error::OutOfRange {
                index: r,
                len: self.len,
            });
        }
        self.update_node(0, 0, self.len - 1, l, r, &act);
        Ok(())
    }

    fn update_node(&mut self, node: usize, start: usize, end: usize, l: usize, r: usize, act: &P::Act) {
        if r < start || end < l {
            return;
        }
        if l <= start && end <= r {
            self.apply_action(node, act, end - start + 1);
            return;
        }
        self.push_down(node, start, end);
        let mid = start + (end - start) / 2;
        self.update_node(2 * node + 1, start, mid, l, r, act);
        self.update_node(2 * node + 2, mid + 1, end, l, r, act);
        debug_assert!(!self.has_pending[node]);
        self.tree[node] = P::combine(&self.tree[2 * node + 1], &self.tree[2 * node + 2]);
    }
}
