use crate::merchant::Located;

/// Three way partition of `data` around `pivot`.
///
/// Returns `(less, equal, greater)`. Elements are moved, not copied, and keep
/// their input order inside each bucket.
pub fn partition<T: Located>(data: Vec<T>, pivot: i64) -> (Vec<T>, Vec<T>, Vec<T>) {
    let mut less = vec![];
    let mut equal = vec![];
    let mut greater = vec![];

    for element in data {
        let location = element.location();
        if location < pivot {
            less.push(element);
        } else if location > pivot {
            greater.push(element);
        } else {
            equal.push(element);
        }
    }

    (less, equal, greater)
}
