//! One module per algorithm.
//!
//! Every routine takes the slice to sort plus the requested
//! [`SortOrder`](crate::SortOrder) and routes all order handling through
//! [`SortOrder::is_before`](crate::SortOrder::is_before), so the direction
//! logic is not duplicated per algorithm. Empty and singleton slices are
//! no-ops everywhere. Only [`radix`] can fail; the rest sort any `Ord`
//! elements.

pub mod bubble;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod radix;
pub mod selection;
pub mod shell;
