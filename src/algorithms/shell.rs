//! Shell sort: gapped insertion sort over the halving gap sequence
//! `n/2, n/4, ..., 1`.

use crate::order::SortOrder;

/// Not stable. Any terminating gap sequence ending in 1 would do; halving is
/// what the textbook version uses.
pub fn sort<T: Ord>(v: &mut [T], order: SortOrder) {
    let len = v.len();

    let mut gap = len / 2;
    while gap > 0 {
        for i in gap..len {
            let mut j = i;
            while j >= gap && order.is_before(&v[j], &v[j - gap]) {
                v.swap(j, j - gap);
                j -= gap;
            }
        }

        gap /= 2;
    }
}
