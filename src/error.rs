use thiserror::Error;

use crate::dispatch::SortAlgorithm;

/// Errors surfaced by the dispatch layer.
///
/// A failed call never leaves a partially sorted sequence behind; every
/// variant is raised before the first element moves.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// The requested algorithm tag has no implementation.
    #[error("sort algorithm {0:?} has no implementation")]
    UnsupportedAlgorithm(SortAlgorithm),

    /// Radix sort was requested for an element type without an integer key.
    #[error("element type {0} has no radix key")]
    UnsupportedElementType(&'static str),

    /// Radix sort was requested for a sequence containing negative values.
    #[error("radix sort requires non-negative keys")]
    ValueOutOfRange,
}
