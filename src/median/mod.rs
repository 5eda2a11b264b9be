//! Three-way partition based median search.
//!
//! Two strategies share the same partition step but differ in pivot choice:
//! [`quick_sort`] always pivots on the first element and sorts everything,
//! [`quick_select`] draws a random pivot every round and only keeps the
//! bucket that holds the requested rank.

pub mod partition;
pub mod quick_select;
pub mod quick_sort;

pub use partition::partition;
pub use quick_select::{quick_select, quick_select_with};
pub use quick_sort::quick_sort;

/// Lower median convention: for even `n` this is the upper of the middle pair.
pub fn median_rank(n: usize) -> usize {
    n / 2
}


#[cfg(test)]
mod test {
    use super::median_rank;

    #[test]
    fn test_median_rank() {
        assert_eq!(median_rank(0), 0);
        assert_eq!(median_rank(1), 0);
        assert_eq!(median_rank(4), 2);
        assert_eq!(median_rank(5), 2);
    }
}
