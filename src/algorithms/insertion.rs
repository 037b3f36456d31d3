//! Insertion sort: shift each element left past every predecessor that
//! belongs after it.

use crate::order::SortOrder;

/// O(n^2), stable, close to linear on nearly-sorted input.
pub fn sort<T: Ord>(v: &mut [T], order: SortOrder) {
    for i in 1..v.len() {
        let mut j = i;
        // Strictly-before only: equal elements never move past each other.
        while j > 0 && order.is_before(&v[j], &v[j - 1]) {
            v.swap(j, j - 1);
            j -= 1;
        }
    }
}
