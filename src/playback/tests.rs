use super::*;

fn is_permutation(order: &[usize], n: usize) -> bool {
    let mut sorted = order.to_vec();
    sorted.sort_unstable();
    sorted == (0..n).collect::<Vec<_>>()
}

#[test]
fn linear_order_is_identity() {
    let mut o = PlaybackOrder::seeded(1);
    for n in [0, 1, 2, 17] {
        assert_eq!(o.rebuild(n, false), (0..n).collect::<Vec<_>>());
    }
}

#[test]
fn shuffled_order_is_always_a_permutation() {
    let mut o = PlaybackOrder::new();
    for n in 0..40 {
        let order = o.rebuild(n, true);
        assert_eq!(order.len(), n);
        assert!(is_permutation(&order, n), "n={n}: {order:?}");
    }
}

#[test]
fn seeded_orders_are_reproducible() {
    let a = PlaybackOrder::seeded(42).rebuild(30, true);
    let b = PlaybackOrder::seeded(42).rebuild(30, true);
    assert_eq!(a, b);
}

#[test]
fn shuffle_swaps_from_the_last_index_down() {
    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};

    let mut rng = StdRng::seed_from_u64(9);
    let mut expected: Vec<usize> = (0..12).collect();
    for i in (1..12).rev() {
        let j = rng.random_range(0..=i);
        expected.swap(i, j);
    }

    assert_eq!(PlaybackOrder::seeded(9).rebuild(12, true), expected);
}

#[test]
fn shuffle_positions_are_roughly_uniform() {
    const N: usize = 5;
    const TRIALS: usize = 20_000;

    let mut o = PlaybackOrder::seeded(7);
    let mut counts = [[0usize; N]; N];
    for _ in 0..TRIALS {
        for (pos, &idx) in o.rebuild(N, true).iter().enumerate() {
            counts[idx][pos] += 1;
        }
    }

    // Expected 4000 per cell; allow a generous 10% band.
    let expected = TRIALS / N;
    for (idx, row) in counts.iter().enumerate() {
        for (pos, &c) in row.iter().enumerate() {
            assert!(
                c.abs_diff(expected) < expected / 10,
                "index {idx} at position {pos}: {c}"
            );
        }
    }
}

#[test]
fn toggling_shuffle_twice_yields_valid_orders_each_time() {
    let mut o = PlaybackOrder::seeded(3);
    let shuffled = o.rebuild(10, true);
    let linear = o.rebuild(10, false);
    let reshuffled = o.rebuild(10, true);

    assert!(is_permutation(&shuffled, 10));
    assert_eq!(linear, (0..10).collect::<Vec<_>>());
    assert!(is_permutation(&reshuffled, 10));
}

#[test]
fn next_and_previous_wrap_at_both_ends() {
    let order = vec![2, 0, 3, 1];
    assert_eq!(next_in(&order, 2), Some(0));
    assert_eq!(next_in(&order, 1), Some(2));
    assert_eq!(previous_in(&order, 2), Some(1));
    assert_eq!(previous_in(&order, 3), Some(0));
}

#[test]
fn navigation_handles_empty_and_unknown_positions() {
    assert_eq!(next_in(&[], 0), None);
    assert_eq!(previous_in(&[], 0), None);

    let order = vec![4, 5, 6];
    assert_eq!(next_in(&order, 99), Some(4));
    assert_eq!(previous_in(&order, 99), Some(6));

    let single = vec![0];
    assert_eq!(next_in(&single, 0), Some(0));
    assert_eq!(previous_in(&single, 0), Some(0));
}
