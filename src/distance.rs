use crate::merchant::Located;

/// Total travel distance from every record to `median`.
///
/// `u128` holds the sum of any number of `i64` gaps that fits in memory.
pub fn sum_of_distances<T: Located>(data: &[T], median: i64) -> u128 {
    data.iter()
        .map(|element| element.location().abs_diff(median) as u128)
        .sum()
}

#[cfg(test)]
mod test {
    use super::sum_of_distances;
    use crate::median::{
        median_rank, quick_select, quick_sort,
        test_utils::{random_merchants, scenario},
    };
    use crate::merchant::Merchant;

    #[test]
    fn test_sum_of_distances_scenario() {
        let data = scenario();
        assert_eq!(sum_of_distances(&data, 3), 7);
        assert_eq!(sum_of_distances(&data, 0), 14);
        assert_eq!(sum_of_distances(&Vec::<Merchant>::new(), 3), 0);
    }

    #[test]
    fn test_sum_of_distances_all_equal() {
        let data = vec![Merchant::new("x", 7); 5];
        assert_eq!(sum_of_distances(&data, 7), 0);
    }

    #[test]
    fn test_sum_of_distances_extremes() {
        let data = vec![Merchant::new("lo", i64::MIN), Merchant::new("hi", i64::MAX)];
        assert_eq!(sum_of_distances(&data, i64::MIN), u64::MAX as u128);
        assert_eq!(sum_of_distances(&data, 0), u64::MAX as u128);
        assert_eq!(sum_of_distances(&data, i64::MAX), u64::MAX as u128);
    }

    #[test]
    fn test_median_minimizes_distance() {
        for seed in 0..40 {
            let data = random_merchants(seed, 1 + (seed * 5) as usize, 50);
            let k = median_rank(data.len());

            let slow = quick_sort(data.iter().collect())[k].location;
            let fast = quick_select(data.iter().collect(), k).unwrap().location;
            assert_eq!(slow, fast);

            let best = sum_of_distances(&data, fast);
            assert_eq!(best, sum_of_distances(&data, fast));
            for other in data.iter() {
                assert!(best <= sum_of_distances(&data, other.location));
            }
        }
    }
}
