use crate::merchant::Located;

use super::partition;

enum Task<T> {
    Sort(Vec<T>),
    Emit(Vec<T>),
}

/// Sorts `data` by location with a three way quick sort.
///
/// The pivot is always the first element's location, so already sorted or
/// reverse sorted input degrades to O(n^2). This is the baseline the
/// randomized [`super::quick_select`] is measured against, keep it that way.
///
/// Equivalent to `quick_sort(less) ++ equal ++ quick_sort(greater)`, driven by
/// an explicit stack so deep partitions do not grow the call stack.
pub fn quick_sort<T: Located>(data: Vec<T>) -> Vec<T> {
    let mut sorted = Vec::with_capacity(data.len());
    let mut tasks = vec![Task::Sort(data)];
    let mut rounds = 0_usize;

    while let Some(task) = tasks.pop() {
        match task {
            Task::Emit(equal) => sorted.extend(equal),
            Task::Sort(data) => {
                let pivot = match data.first() {
                    Some(first) => first.location(),
                    None => continue,
                };
                rounds += 1;
                let (less, equal, greater) = partition(data, pivot);

                // LIFO: less, then equal, then greater
                tasks.push(Task::Sort(greater));
                tasks.push(Task::Emit(equal));
                tasks.push(Task::Sort(less));
            }
        }
    }

    tracing::trace!("quick_sort: {} elements, {} partition rounds", sorted.len(), rounds);
    sorted
}

#[cfg(test)]
mod test {
    use super::quick_sort;
    use crate::median::{
        median_rank,
        test_utils::{random_merchants, scenario, sorted_locations},
    };
    use crate::merchant::Merchant;

    #[test]
    fn test_quick_sort_scenario() {
        let data = scenario();
        let sorted = quick_sort(data.iter().collect());
        let locations = sorted.iter().map(|m| m.location).collect::<Vec<_>>();
        assert_eq!(locations, vec![1, 1, 3, 4, 5]);

        let optimal = sorted[median_rank(sorted.len())];
        assert_eq!(optimal, &Merchant::new("A", 3));

        // duplicates keep input order
        assert_eq!(sorted[0].name, "B");
        assert_eq!(sorted[1].name, "D");
    }

    #[test]
    fn test_quick_sort_empty() {
        assert!(quick_sort(Vec::<Merchant>::new()).is_empty());
    }

    #[test]
    fn test_quick_sort_all_equal() {
        let data = (0..5)
            .map(|i| Merchant::new(format!("m{i}"), 7))
            .collect::<Vec<_>>();
        assert_eq!(quick_sort(data.clone()), data);
    }

    #[test]
    fn test_quick_sort_random() {
        for seed in 0..50 {
            let data = random_merchants(seed, (seed * 13) as usize, 20);
            let sorted = quick_sort(data.clone());
            assert_eq!(sorted.len(), data.len());
            assert!(sorted.windows(2).all(|w| w[0].location <= w[1].location));
            assert_eq!(sorted_locations(&sorted), sorted_locations(&data));

            let mut expected = data.clone();
            expected.sort_by_key(|m| m.location);
            assert_eq!(sorted, expected, "not stable for seed {seed}");
        }
    }

    #[test]
    fn test_quick_sort_adversarial_depth() {
        let n = 10_000;
        let ascending = (0..n)
            .map(|i| Merchant::new(format!("m{i}"), i as i64))
            .collect::<Vec<_>>();
        let sorted = quick_sort(ascending.iter().collect());
        assert!(sorted.iter().zip(ascending.iter()).all(|(a, b)| *a == b));

        let descending = ascending.iter().rev().collect::<Vec<_>>();
        let sorted = quick_sort(descending);
        assert!(sorted.iter().zip(ascending.iter()).all(|(a, b)| *a == b));
    }
}
