//! Bubble sort: repeated adjacent-pair scan-and-swap over a shrinking window.

use crate::order::SortOrder;

/// O(n^2), stable.
pub fn sort<T: Ord>(v: &mut [T], order: SortOrder) {
    let len = v.len();

    for i in 0..len {
        // Everything past `len - 1 - i` already bubbled into final position.
        for j in 0..len - 1 - i {
            if order.is_before(&v[j + 1], &v[j]) {
                v.swap(j, j + 1);
            }
        }
    }
}
