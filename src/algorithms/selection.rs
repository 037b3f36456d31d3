//! Selection sort: swap the extremal remaining element into each position.

use crate::order::SortOrder;

/// O(n^2), not stable, at most n - 1 swaps.
pub fn sort<T: Ord>(v: &mut [T], order: SortOrder) {
    let len = v.len();

    for i in 0..len.saturating_sub(1) {
        let mut extremal = i;
        for j in (i + 1)..len {
            if order.is_before(&v[j], &v[extremal]) {
                extremal = j;
            }
        }

        v.swap(i, extremal);
    }
}
