//! Nine classic in-memory sorting algorithms behind a single dispatch entry
//! point.
//!
//! Every algorithm lives in its own module under [`algorithms`] and is
//! selected through a [`SortAlgorithm`] tag, either via the [`Sorter`]
//! configuration value or the [`sort`] / [`sorted`] convenience functions.
//! Comparison direction is handled in exactly one place,
//! [`SortOrder::is_before`], so ascending and descending behavior cannot
//! drift apart between algorithms.
//!
//! ```
//! use sortkit::{sort, SortAlgorithm, SortOrder};
//!
//! let mut vals = vec![23, 42, 1, 88, 9, 7, 34, 11, 5];
//! sort(&mut vals, SortAlgorithm::Quick, SortOrder::Ascending)?;
//! assert_eq!(vals, [1, 5, 7, 9, 11, 23, 34, 42, 88]);
//! # Ok::<(), sortkit::SortError>(())
//! ```

pub mod algorithms;
mod dispatch;
mod element;
mod error;
mod order;
pub mod patterns;

pub use dispatch::{SortAlgorithm, SortMode, Sorter};
pub use element::Sortable;
pub use error::SortError;
pub use order::SortOrder;

/// Sorts `sequence` in place with the requested algorithm and order.
pub fn sort<T: Sortable>(
    sequence: &mut [T],
    algorithm: SortAlgorithm,
    order: SortOrder,
) -> Result<(), SortError> {
    Sorter::new(algorithm).order(order).sort_in_place(sequence)
}

/// Returns a sorted copy of `sequence`, leaving the input untouched.
pub fn sorted<T: Sortable>(
    sequence: &[T],
    algorithm: SortAlgorithm,
    order: SortOrder,
) -> Result<Vec<T>, SortError> {
    Sorter::new(algorithm).order(order).sort_copy(sequence)
}
