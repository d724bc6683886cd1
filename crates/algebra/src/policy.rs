//! Concrete policies over `i64`.
//!
//! Each policy is an uninhabited marker type; arithmetic wraps so random
//! stress inputs cannot abort a build with overflow checks enabled.

use crate::monoid::{LazyMonoid, Monoid};

/// Wrapping sum; invertible.
#[derive(Clone, Copy, Debug)]
pub enum I64Sum {}

impl Monoid for I64Sum {
    type Value = i64;

    #[inline(always)]
    fn unit() -> Self::Value {
        0
    }

    #[inline(always)]
    fn combine(a: &Self::Value, b: &Self::Value) -> Self::Value {
        a.wrapping_add(*b)
    }

    #[inline(always)]
    fn invert(value: &Self::Value) -> Option<Self::Value> {
        Some(value.wrapping_neg())
    }
}

/// Minimum; the identity is `i64::MAX`.
#[derive(Clone, Copy, Debug)]
pub enum I64Min {}

impl Monoid for I64Min {
    type Value = i64;

    #[inline(always)]
    fn unit() -> Self::Value {
        i64::MAX
    }

    #[inline(always)]
    fn combine(a: &Self::Value, b: &Self::Value) -> Self::Value {
        *a.min(b)
    }
}

/// Maximum; the identity is `i64::MIN`.
#[derive(Clone, Copy, Debug)]
pub enum I64Max {}

impl Monoid for I64Max {
    type Value = i64;

    #[inline(always)]
    fn unit() -> Self::Value {
        i64::MIN
    }

    #[inline(always)]
    fn combine(a: &Self::Value, b: &Self::Value) -> Self::Value {
        *a.max(b)
    }
}

/// Sum aggregate with range-add actions.
#[derive(Clone, Copy, Debug)]
pub enum SumAdd {}

impl Monoid for SumAdd {
    type Value = i64;

    #[inline(always)]
    fn unit() -> Self::Value {
        0
    }

    #[inline(always)]
    fn combine(a: &Self::Value, b: &Self::Value) -> Self::Value {
        a.wrapping_add(*b)
    }

    #[inline(always)]
    fn invert(value: &Self::Value) -> Option<Self::Value> {
        Some(value.wrapping_neg())
    }
}

impl LazyMonoid for SumAdd {
    type Act = i64;

    #[inline(always)]
    fn act_unit() -> Self::Act {
        0
    }

    #[inline(always)]
    fn act_compose(new: &Self::Act, old: &Self::Act) -> Self::Act {
        new.wrapping_add(*old)
    }

    #[inline(always)]
    fn act_apply(agg: &Self::Value, act: &Self::Act, len: usize) -> Self::Value {
        agg.wrapping_add(act.wrapping_mul(len as i64))
    }
}

/// Sum aggregate with range-assignment actions; the newest assignment wins.
#[derive(Clone, Copy, Debug)]
pub enum SumAssign {}

impl Monoid for SumAssign {
    type Value = i64;

    #[inline(always)]
    fn unit() -> Self::Value {
        0
    }

    #[inline(always)]
    fn combine(a: &Self::Value, b: &Self::Value) -> Self::Value {
        a.wrapping_add(*b)
    }

    #[inline(always)]
    fn invert(value: &Self::Value) -> Option<Self::Value> {
        Some(value.wrapping_neg())
    }
}

impl LazyMonoid for SumAssign {
    type Act = Option<i64>;

    #[inline(always)]
    fn act_unit() -> Self::Act {
        None
    }

    #[inline(always)]
    fn act_compose(new: &Self::Act, old: &Self::Act) -> Self::Act {
        new.or(*old)
    }

    #[inline(always)]
    fn act_apply(agg: &Self::Value, act: &Self::Act, len: usize) -> Self::Value {
        match act {
            Some(value) => value.wrapping_mul(len as i64),
            None => *agg,
        }
    }
}

/// Min aggregate with range-add actions; the apply is length-independent.
#[derive(Clone, Copy, Debug)]
pub enum MinAdd {}

impl Monoid for MinAdd {
    type Value = i64;

    #[inline(always)]
    fn unit() -> Self::Value {
        i64::MAX
    }

    #[inline(always)]
    fn combine(a: &Self::Value, b: &Self::Value) -> Self::Value {
        *a.min(b)
    }
}

impl LazyMonoid for MinAdd {
    type Act = i64;

    #[inline(always)]
    fn act_unit() -> Self::Act {
        0
    }

    #[inline(always)]
    fn act_compose(new: &Self::Act, old: &Self::Act) -> Self::Act {
        new.wrapping_add(*old)
    }

    #[inline(always)]
    fn act_apply(agg: &Self::Value, act: &Self::Act, _len: usize) -> Self::Value {
        // The aggregate of an empty span must stay the identity.
        if *agg == i64::MAX {
            *agg
        } else {
            agg.wrapping_add(*act)
        }
    }
}
