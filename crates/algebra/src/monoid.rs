//! Combinable-operation traits shared by the indexed structures.

use std::fmt::Debug;

/// An associative combine with an identity element.
///
/// Implementations must satisfy, for all `a`, `b`, `c`:
/// - `combine(combine(a, b), c) == combine(a, combine(b, c))`
/// - `combine(unit(), a) == a` and `combine(a, unit()) == a`
///
/// The laws are documented preconditions. They are property-tested for the
/// policies shipped in this crate and never checked at runtime for
/// caller-supplied implementations.
pub trait Monoid {
    type Value: Copy + Debug;

    /// The identity element.
    fn unit() -> Self::Value;

    fn combine(a: &Self::Value, b: &Self::Value) -> Self::Value;

    /// Inverse of `value` under `combine`, when the operation has one.
    ///
    /// A policy returning `Some(w)` must satisfy `combine(value, w) ==
    /// unit()`. The default is `None`; operations that derive range
    /// aggregates from prefix aggregates report `Unsupported` in that case.
    #[inline]
    fn invert(value: &Self::Value) -> Option<Self::Value> {
        let _ = value;
        None
    }
}

/// A monoid with a deferred bulk-update action.
///
/// `act_compose(new, old)` must behave so that applying the composite once
/// equals applying `old` first and `new` second. `act_apply` must distribute
/// over `combine` in the length-weighted sense:
/// `act_apply(combine(a, b), act, la + lb)
///   == combine(act_apply(a, act, la), act_apply(b, act, lb))`.
pub trait LazyMonoid: Monoid {
    type Act: Copy + Debug;

    /// The action that changes nothing.
    fn act_unit() -> Self::Act;

    /// Compose `new` after `old`.
    fn act_compose(new: &Self::Act, old: &Self::Act) -> Self::Act;

    /// Apply `act` to an aggregate covering `len` leaves.
    fn act_apply(agg: &Self::Value, act: &Self::Act, len: usize) -> Self::Value;
}
