//! Recursive quicksort with Lomuto partitioning around the last element.
//!
//! The fixed pivot choice keeps the textbook O(n^2) worst case on
//! already-sorted input. Recursion only ever descends into the smaller
//! partition while the loop continues with the larger one, so the stack
//! depth stays logarithmic even then.

use crate::order::SortOrder;

pub fn sort<T: Ord>(v: &mut [T], order: SortOrder) {
    let mut is_before = |a: &T, b: &T| order.is_before(a, b);
    quicksort(v, &mut is_before);
}

fn quicksort<T, F>(mut v: &mut [T], is_before: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        if v.len() < 2 {
            return;
        }

        // The pivot sits at `pivot_pos` afterwards and is already final.
        let pivot_pos = partition(v, is_before);

        if pivot_pos < v.len() / 2 {
            quicksort(&mut v[..pivot_pos], is_before);
            v = &mut v[pivot_pos + 1..];
        } else {
            quicksort(&mut v[pivot_pos + 1..], is_before);
            v = &mut v[..pivot_pos];
        }
    }
}

/// Lomuto partition: everything not strictly after the pivot ends up on the
/// left, then the pivot lands between the two regions. Returns the pivot
/// position.
fn partition<T, F>(v: &mut [T], is_before: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let high = v.len() - 1;
    let mut store = 0;

    for i in 0..high {
        if !is_before(&v[high], &v[i]) {
            v.swap(store, i);
            store += 1;
        }
    }

    v.swap(store, high);
    store
}
