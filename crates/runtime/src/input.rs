//! Input array generation for each [`InputKind`].

use rand::Rng;
use rand::seq::SliceRandom;
use sortquiz_core::InputKind;

/// Builds an array of `size` elements shaped by `kind`.
///
/// Values are positive multiples of 10 except for [`InputKind::Random`],
/// which draws distinct values from `1..=10 * size`.
pub fn generate_input<R: Rng + ?Sized>(kind: InputKind, size: usize, rng: &mut R) -> Vec<i32> {
    let size_i32 = i32::try_from(size).unwrap_or(i32::MAX / 10);
    match kind {
        InputKind::Random => {
            let mut pool: Vec<i32> = (1..=size_i32 * 10).collect();
            pool.shuffle(rng);
            pool.truncate(size);
            pool
        }
        InputKind::Reversed => (1..=size_i32).rev().map(|value| value * 10).collect(),
        InputKind::NearlySorted => {
            let mut array: Vec<i32> = (1..=size_i32).map(|value| value * 10).collect();
            if size > 1 {
                for _ in 0..size / 4 {
                    let (a, b) = (rng.gen_range(0..size), rng.gen_range(0..size));
                    array.swap(a, b);
                }
            }
            array
        }
        InputKind::Duplicates => {
            let distinct = ((size_i32 + 1) / 2).max(1);
            let mut array: Vec<i32> = (0..size)
                .map(|_| rng.gen_range(1..=distinct) * 10)
                .collect();
            array.shuffle(rng);
            array
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::BTreeSet;

    #[test]
    fn random_values_are_distinct_and_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let array = generate_input(InputKind::Random, 8, &mut rng);

        assert_eq!(array.len(), 8);
        let distinct: BTreeSet<_> = array.iter().collect();
        assert_eq!(distinct.len(), 8);
        assert!(array.iter().all(|&v| (1..=80).contains(&v)));
    }

    #[test]
    fn reversed_is_descending_multiples_of_ten() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            generate_input(InputKind::Reversed, 5, &mut rng),
            vec![50, 40, 30, 20, 10]
        );
    }

    #[test]
    fn nearly_sorted_is_a_permutation_of_the_ladder() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut array = generate_input(InputKind::NearlySorted, 12, &mut rng);
        array.sort();
        assert_eq!(array, (1..=12).map(|v| v * 10).collect::<Vec<_>>());
    }

    #[test]
    fn duplicates_draw_from_half_as_many_values() {
        let mut rng = StdRng::seed_from_u64(3);
        let array = generate_input(InputKind::Duplicates, 16, &mut rng);

        assert_eq!(array.len(), 16);
        let distinct: BTreeSet<_> = array.iter().collect();
        assert!(distinct.len() <= 8);
        assert!(array.iter().all(|&v| v % 10 == 0 && (10..=80).contains(&v)));
    }

    #[test]
    fn same_seed_same_array() {
        let a = generate_input(InputKind::Random, 16, &mut StdRng::seed_from_u64(99));
        let b = generate_input(InputKind::Random, 16, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn zero_size_is_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        for kind in [
            InputKind::Random,
            InputKind::Reversed,
            InputKind::NearlySorted,
            InputKind::Duplicates,
        ] {
            assert!(generate_input(kind, 0, &mut rng).is_empty());
        }
    }
}
