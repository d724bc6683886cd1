mod iterative;
mod lazy;

pub use iterative::SegmentTree;
pub use lazy::LazySegmentTree;

#[cfg(test)]
mod tests {
    use super::*;
    use algebra::{Error, I64Max, I64Min, I64Sum, MinAdd, Monoid, SumAdd, SumAssign};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn lazy_range_add_shifts_the_covered_sum() {
        let mut st = LazySegmentTree::<SumAdd>::from_values(&[1, 3, 5, 7, 9, 11]);
        assert_eq!(st.query(1, 3).unwrap(), 15);
        st.update(2, 2, 2).unwrap();
        assert_eq!(st.query(1, 3).unwrap(), 17);
        assert_eq!(st.query(0, 5).unwrap(), 38);
    }

    #[test]
    fn lazy_full_range_equals_leaf_fold() {
        let values = [4_i64, -2, 0, 13, -7, 5, 5, 1];
        let mut st = LazySegmentTree::<SumAdd>::from_values(&values);
        assert_eq!(st.query(0, values.len() - 1).unwrap(), values.iter().sum::<i64>());

        st.update(1, 6, -3).unwrap();
        let expected = values.iter().sum::<i64>() - 3 * 6;
        assert_eq!(st.query(0, values.len() - 1).unwrap(), expected);
    }

    #[test]
    fn lazy_assignment_overwrites_previous_updates() {
        let mut st = LazySegmentTree::<SumAssign>::from_values(&[1, 2, 3, 4, 5]);
        st.update(0, 4, Some(10)).unwrap();
        assert_eq!(st.query(0, 4).unwrap(), 50);
        st.update(1, 2, Some(0)).unwrap();
        assert_eq!(st.query(0, 4).unwrap(), 30);
        assert_eq!(st.query(1, 2).unwrap(), 0);
    }

    #[test]
    fn lazy_min_tracks_range_adds() {
        let mut st = LazySegmentTree::<MinAdd>::from_values(&[5, 1, 4, 1, 3]);
        assert_eq!(st.query(0, 4).unwrap(), 1);
        st.update(1, 3, 10).unwrap();
        assert_eq!(st.query(0, 4).unwrap(), 3);
        assert_eq!(st.query(1, 3).unwrap(), 11);
    }

    #[test]
    fn lazy_bounds_and_empty_tree() {
        let mut st = LazySegmentTree::<SumAdd>::from_values(&[1, 2, 3]);
        assert_eq!(st.query(2, 1), Err(Error::InvalidRange { start: 2, end: 1 }));
        assert_eq!(st.query(0, 3), Err(Error::OutOfRange { index: 3, len: 3 }));
        assert_eq!(st.update(1, 3, 5), Err(Error::OutOfRange { index: 3, len: 3 }));
        // The rejected update left the aggregates alone.
        assert_eq!(st.query(0, 2).unwrap(), 6);

        let mut empty = LazySegmentTree::<SumAdd>::new(0);
        assert!(empty.is_empty());
        assert_eq!(empty.query(0, 0).unwrap(), 0);
        assert_eq!(empty.query(0, 100).unwrap(), 0);
        empty.update(0, 3, 9).unwrap();
        assert_eq!(empty.query(0, 3).unwrap(), 0);
        assert_eq!(empty.query(4, 3), Err(Error::InvalidRange { start: 4, end: 3 }));
    }

    #[test]
    fn lazy_single_leaf_tree() {
        let mut st = LazySegmentTree::<SumAdd>::from_values(&[42]);
        assert_eq!(st.query(0, 0).unwrap(), 42);
        st.update(0, 0, -2).unwrap();
        assert_eq!(st.query(0, 0).unwrap(), 40);
        assert_eq!(st.query(0, 1), Err(Error::OutOfRange { index: 1, len: 1 }));
    }

    #[test]
    fn lazy_random_add_ops_match_bruteforce() {
        let mut rng = StdRng::seed_from_u64(0x5E61_2026_u64);

        for n in [1_usize, 2, 3, 8, 61, 256] {
            let mut reference = (0..n)
                .map(|_| rng.random_range(-1_000_i64..=1_000))
                .collect::<Vec<_>>();
            let mut st = LazySegmentTree::<SumAdd>::from_values(&reference);

            for it in 0..3_000 {
                let l = rng.random_range(0..n);
                let r = rng.random_range(l..n);
                if rng.random_bool(0.5) {
                    let delta = rng.random_range(-50_i64..=50);
                    st.update(l, r, delta).unwrap();
                    for slot in &mut reference[l..=r] {
                        *slot += delta;
                    }
                } else {
                    let expected: i64 = reference[l..=r].iter().sum();
                    assert_eq!(st.query(l, r).unwrap(), expected, "it={it} n={n} query({l},{r})");
                }
            }
        }
    }

    #[test]
    fn lazy_random_assign_ops_match_bruteforce() {
        let mut rng = StdRng::seed_from_u64(0x5E62_2026_u64);

        for n in [1_usize, 5, 37, 200] {
            let mut reference = (0..n)
                .map(|_| rng.random_range(-1_000_i64..=1_000))
                .collect::<Vec<_>>();
            let mut st = LazySegmentTree::<SumAssign>::from_values(&reference);

            for it in 0..3_000 {
                let l = rng.random_range(0..n);
                let r = rng.random_range(l..n);
                if rng.random_bool(0.5) {
                    let value = rng.random_range(-1_000_i64..=1_000);
                    st.update(l, r, Some(value)).unwrap();
                    for slot in &mut reference[l..=r] {
                        *slot = value;
                    }
                } else {
                    let expected: i64 = reference[l..=r].iter().sum();
                    assert_eq!(st.query(l, r).unwrap(), expected, "it={it} n={n} query({l},{r})");
                }
            }
        }
    }

    #[test]
    fn lazy_random_min_add_ops_match_bruteforce() {
        let mut rng = StdRng::seed_from_u64(0x5E63_2026_u64);

        for n in [1_usize, 6, 50, 130] {
            let mut reference = (0..n)
                .map(|_| rng.random_range(-1_000_i64..=1_000))
                .collect::<Vec<_>>();
            let mut st = LazySegmentTree::<MinAdd>::from_values(&reference);

            for it in 0..3_000 {
                let l = rng.random_range(0..n);
                let r = rng.random_range(l..n);
                if rng.random_bool(0.5) {
                    let delta = rng.random_range(-50_i64..=50);
                    st.update(l, r, delta).unwrap();
                    for slot in &mut reference[l..=r] {
                        *slot += delta;
                    }
                } else {
                    let expected = reference[l..=r].iter().copied().min().unwrap();
                    assert_eq!(st.query(l, r).unwrap(), expected, "it={it} n={n} query({l},{r})");
                }
            }
        }
    }

    #[test]
    fn iterative_point_sets_reshape_sums() {
        let mut st = SegmentTree::<I64Sum>::from_values(&[1, 3, 5, 7, 9, 11]);
        assert_eq!(st.query(0, 2).unwrap(), 9);
        st.set(1, 10).unwrap();
        assert_eq!(st.query(0, 2).unwrap(), 16);
        assert_eq!(st.get(1).unwrap(), 10);
        assert_eq!(st.query(0, 5).unwrap(), 43);
    }

    #[test]
    fn iterative_min_and_max_agree_on_known_values() {
        let values = [5_i64, 1, 4, 1, 3];
        let min = SegmentTree::<I64Min>::from_values(&values);
        let max = SegmentTree::<I64Max>::from_values(&values);
        assert_eq!(min.query(0, 4).unwrap(), 1);
        assert_eq!(max.query(0, 4).unwrap(), 5);
        assert_eq!(min.query(2, 4).unwrap(), 1);
        assert_eq!(max.query(2, 3).unwrap(), 4);
    }

    #[test]
    fn iterative_bounds_and_empty_tree() {
        let mut st = SegmentTree::<I64Sum>::from_values(&[1, 2, 3]);
        assert_eq!(st.query(2, 1), Err(Error::InvalidRange { start: 2, end: 1 }));
        assert_eq!(st.query(1, 3), Err(Error::OutOfRange { index: 3, len: 3 }));
        assert_eq!(st.set(3, 0), Err(Error::OutOfRange { index: 3, len: 3 }));
        assert_eq!(st.get(3), Err(Error::OutOfRange { index: 3, len: 3 }));
        assert_eq!(st.query(0, 2).unwrap(), 6);

        let empty = SegmentTree::<I64Sum>::new(0);
        assert!(empty.is_empty());
        assert_eq!(empty.query(0, 9).unwrap(), 0);
    }

    #[test]
    fn iterative_fresh_tree_folds_identities() {
        let st = SegmentTree::<I64Min>::new(5);
        assert_eq!(st.query(0, 4).unwrap(), i64::MAX);
        assert_eq!(st.get(3).unwrap(), i64::MAX);
    }

    #[test]
    fn iterative_random_ops_match_bruteforce() {
        let mut rng = StdRng::seed_from_u64(0x5E64_2026_u64);

        for n in [1_usize, 2, 9, 100, 250] {
            let mut reference = (0..n)
                .map(|_| rng.random_range(-1_000_i64..=1_000))
                .collect::<Vec<_>>();
            let mut st = SegmentTree::<I64Sum>::from_values(&reference);

            for it in 0..3_000 {
                if rng.random_bool(0.5) {
                    let i = rng.random_range(0..n);
                    let value = rng.random_range(-1_000_i64..=1_000);
                    st.set(i, value).unwrap();
                    reference[i] = value;
                } else {
                    let l = rng.random_range(0..n);
                    let r = rng.random_range(l..n);
                    let expected: i64 = reference[l..=r].iter().sum();
                    assert_eq!(st.query(l, r).unwrap(), expected, "it={it} n={n} query({l},{r})");
                }
            }
        }
    }

    // Once every pending action is flushed by a full-range query, interior
    // aggregates must equal the fold of their leaves.
    #[test]
    fn lazy_flush_then_requery_is_stable() {
        let mut rng = StdRng::seed_from_u64(0x5E65_2026_u64);
        let n = 64_usize;
        let mut st = LazySegmentTree::<SumAdd>::new(n);
        let mut reference = vec![0_i64; n];

        for _ in 0..500 {
            let l = rng.random_range(0..n);
            let r = rng.random_range(l..n);
            let delta = rng.random_range(-9_i64..=9);
            st.update(l, r, delta).unwrap();
            for slot in &mut reference[l..=r] {
                *slot += delta;
            }
        }

        let full = st.query(0, n - 1).unwrap();
        assert_eq!(full, reference.iter().sum::<i64>());
        for l in 0..n {
            assert_eq!(st.query(l, l).unwrap(), reference[l]);
        }
        assert_eq!(st.query(0, n - 1).unwrap(), full);
    }

    #[test]
    fn unit_leaves_build_to_unit_aggregates() {
        let mut st = LazySegmentTree::<SumAdd>::new(7);
        assert_eq!(st.query(0, 6).unwrap(), SumAdd::unit());
        st.update(3, 5, 4).unwrap();
        assert_eq!(st.query(0, 6).unwrap(), 12);
    }
}
