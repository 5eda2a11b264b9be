use rand::{self, Rng};

use crate::merchant::Located;

use super::partition;

/// Returns the element that would sit at rank `k` if `data` were sorted by
/// location, without sorting it.
///
/// `None` only for empty `data`. Panics when `data` is non-empty and `k` is
/// out of `0..data.len()`.
#[allow(unused)]
pub fn quick_select<T: Located>(data: Vec<T>, k: usize) -> Option<T> {
    quick_select_with(data, k, &mut rand::rng())
}

/// [`quick_select`] with an explicit source for the pivot draws.
///
/// Every round picks the pivot uniformly from the bucket still in play, then
/// keeps only the bucket that contains rank `k` and drops the other two.
/// Among records sharing the target location, the first one in input order
/// wins.
pub fn quick_select_with<T, R>(mut data: Vec<T>, mut k: usize, rng: &mut R) -> Option<T>
where
    T: Located,
    R: Rng,
{
    if data.is_empty() {
        return None;
    }
    assert!(
        k < data.len(),
        "rank {} out of bounds for {} elements",
        k,
        data.len()
    );

    let mut rounds = 0_usize;
    loop {
        rounds += 1;
        let pivot = data[rng.random_range(0..data.len())].location();
        let (less, equal, greater) = partition(data, pivot);

        let m = less.len();
        let count = equal.len();

        if k < m {
            data = less;
        } else if k < m + count {
            tracing::trace!("quick_select: rank found after {} rounds", rounds);
            return equal.into_iter().next();
        } else {
            k -= m + count;
            data = greater;
        }
    }
}
