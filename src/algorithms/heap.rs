//! Heap sort: build a binary heap over the slice, then repeatedly swap the
//! root behind the shrinking heap prefix and re-heapify.
//!
//! Ascending order uses a max-heap so each extraction appends the largest
//! remaining element; descending is structurally symmetric through the
//! shared predicate.

use crate::order::SortOrder;

/// O(n log n), not stable.
pub fn sort<T: Ord>(v: &mut [T], order: SortOrder) {
    let len = v.len();

    // Leaves are trivial heaps, sift down every interior node.
    for node in (0..len / 2).rev() {
        sift_down(v, len, node, order);
    }

    for end in (1..len).rev() {
        v.swap(0, end);
        sift_down(v, end, 0, order);
    }
}

/// Classic sift-down over children `2i + 1` and `2i + 2`, restricted to the
/// heap prefix `v[..len]`.
fn sift_down<T: Ord>(v: &mut [T], len: usize, mut node: usize, order: SortOrder) {
    loop {
        let left = 2 * node + 1;
        let right = 2 * node + 2;

        // The root must hold the element that belongs last, so a child wins
        // whenever the current top would sort before it.
        let mut top = node;
        if left < len && order.is_before(&v[top], &v[left]) {
            top = left;
        }
        if right < len && order.is_before(&v[top], &v[right]) {
            top = right;
        }

        if top == node {
            return;
        }

        v.swap(node, top);
        node = top;
    }
}
