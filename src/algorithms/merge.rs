//! Merge sort: recursive midpoint split with a predicate-driven interleave.
//!
//! Never truly in place. Every recursion level allocates its halves and the
//! merged result, O(n log n) temporary storage over the whole call. The
//! entry point writes the final vector back into the caller's slice so the
//! dispatch surface stays uniform with the in-place algorithms.

use crate::order::SortOrder;

/// O(n log n), stable.
pub fn sort<T: Ord + Clone>(v: &mut [T], order: SortOrder) {
    let mut is_before = |a: &T, b: &T| order.is_before(a, b);

    let sorted = merge_sort(v.to_vec(), &mut is_before);
    for (slot, val) in v.iter_mut().zip(sorted) {
        *slot = val;
    }
}

fn merge_sort<T, F>(mut v: Vec<T>, is_before: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    if v.len() <= 1 {
        return v;
    }

    let right = v.split_off(v.len() / 2);
    let left = merge_sort(v, is_before);
    let right = merge_sort(right, is_before);

    merge(left, right, is_before)
}

fn merge<T, F>(left: Vec<T>, right: Vec<T>, is_before: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => {
                // Ties take from the left half to keep the sort stable.
                if is_before(r, l) {
                    merged.extend(right.next());
                } else {
                    merged.extend(left.next());
                }
            }
            // One half ran dry, the other's tail is already sorted.
            _ => {
                merged.extend(left);
                merged.extend(right);
                return merged;
            }
        }
    }
}
