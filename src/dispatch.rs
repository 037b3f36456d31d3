//! Algorithm selection and the destructive / copy-producing entry points.

use std::borrow::Cow;

use crate::algorithms::{bubble, heap, insertion, merge, quick, radix, selection, shell};
use crate::element::Sortable;
use crate::error::SortError;
use crate::order::SortOrder;

/// Tag selecting the dispatch target.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SortAlgorithm {
    Bubble,
    Quick,
    Merge,
    Selection,
    Insertion,
    Heap,
    Shell,
    Radix,
    /// Reserved tag without an implementation. Dispatching it fails with
    /// [`SortError::UnsupportedAlgorithm`] rather than silently doing
    /// nothing.
    Bucket,
}

impl SortAlgorithm {
    /// Every tag, in dispatch-table order.
    pub const ALL: [SortAlgorithm; 9] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Quick,
        SortAlgorithm::Merge,
        SortAlgorithm::Selection,
        SortAlgorithm::Insertion,
        SortAlgorithm::Heap,
        SortAlgorithm::Shell,
        SortAlgorithm::Radix,
        SortAlgorithm::Bucket,
    ];

    /// Whether the implementation keeps equal elements in input order.
    pub fn is_stable(self) -> bool {
        matches!(
            self,
            SortAlgorithm::Bubble
                | SortAlgorithm::Merge
                | SortAlgorithm::Insertion
                | SortAlgorithm::Radix
        )
    }
}

/// Whether the caller's sequence is mutated or left untouched.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum SortMode {
    /// Destructive: the caller's sequence is sorted directly.
    #[default]
    InPlace,
    /// Non-destructive: the input stays as-is and a sorted copy is produced.
    NonInPlace,
}

type SortFn<T> = fn(&mut [T], SortOrder) -> Result<(), SortError>;

/// Strategy lookup keyed by algorithm tag. Adding an algorithm means adding
/// a row; tags without a row (currently only `Bucket`) are unsupported.
fn lookup<T: Sortable>(algorithm: SortAlgorithm) -> Result<SortFn<T>, SortError> {
    let table: [(SortAlgorithm, SortFn<T>); 8] = [
        (SortAlgorithm::Bubble, |v, order| {
            bubble::sort(v, order);
            Ok(())
        }),
        (SortAlgorithm::Quick, |v, order| {
            quick::sort(v, order);
            Ok(())
        }),
        (SortAlgorithm::Merge, |v, order| {
            merge::sort(v, order);
            Ok(())
        }),
        (SortAlgorithm::Selection, |v, order| {
            selection::sort(v, order);
            Ok(())
        }),
        (SortAlgorithm::Insertion, |v, order| {
            insertion::sort(v, order);
            Ok(())
        }),
        (SortAlgorithm::Heap, |v, order| {
            heap::sort(v, order);
            Ok(())
        }),
        (SortAlgorithm::Shell, |v, order| {
            shell::sort(v, order);
            Ok(())
        }),
        (SortAlgorithm::Radix, radix::sort),
    ];

    table
        .into_iter()
        .find(|(tag, _)| *tag == algorithm)
        .map(|(_, sort_fn)| sort_fn)
        .ok_or(SortError::UnsupportedAlgorithm(algorithm))
}

/// Algorithm and order configuration for the dispatch entry points.
///
/// ```
/// use sortkit::{SortAlgorithm, SortOrder, Sorter};
///
/// let sorter = Sorter::new(SortAlgorithm::Merge).order(SortOrder::Descending);
///
/// let input = vec![3, 1, 2];
/// let output = sorter.sort_copy(&input)?;
/// assert_eq!(input, [3, 1, 2]);
/// assert_eq!(output, [3, 2, 1]);
/// # Ok::<(), sortkit::SortError>(())
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Sorter {
    algorithm: SortAlgorithm,
    order: SortOrder,
}

impl Sorter {
    /// Configuration for `algorithm`, ordering ascending until overridden.
    pub fn new(algorithm: SortAlgorithm) -> Self {
        Self {
            algorithm,
            order: SortOrder::Ascending,
        }
    }

    pub fn order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    /// Destructive entry: sorts the caller's slice directly.
    ///
    /// On error the slice is left exactly as it was.
    pub fn sort_in_place<T: Sortable>(&self, sequence: &mut [T]) -> Result<(), SortError> {
        lookup::<T>(self.algorithm)?(sequence, self.order)
    }

    /// Non-destructive entry: the input stays untouched, the sorted copy is
    /// returned.
    pub fn sort_copy<T: Sortable>(&self, sequence: &[T]) -> Result<Vec<T>, SortError> {
        let mut copy = sequence.to_vec();
        self.sort_in_place(&mut copy)?;
        Ok(copy)
    }

    /// Non-destructive entry with a caller-supplied output buffer. The
    /// buffer is overwritten with a copy of `sequence` and then sorted;
    /// previous contents and spare capacity are reused.
    pub fn sort_into<T: Sortable>(
        &self,
        sequence: &[T],
        output: &mut Vec<T>,
    ) -> Result<(), SortError> {
        output.clear();
        output.extend_from_slice(sequence);
        self.sort_in_place(output)
    }

    /// Mode-driven entry mirroring the single-call contract: `InPlace`
    /// sorts the caller's slice and returns a borrow of it, `NonInPlace`
    /// leaves it untouched and returns an owned sorted copy.
    pub fn sort<'a, T: Sortable>(
        &self,
        sequence: &'a mut [T],
        mode: SortMode,
    ) -> Result<Cow<'a, [T]>, SortError> {
        match mode {
            SortMode::InPlace => {
                self.sort_in_place(sequence)?;
                Ok(Cow::Borrowed(sequence))
            }
            SortMode::NonInPlace => Ok(Cow::Owned(self.sort_copy(sequence)?)),
        }
    }
}
