//! LSD radix sort over base-10 digits, one stable counting pass per digit.
//!
//! Restricted to element types with a non-negative integer key, see
//! [`Sortable::RADIX_KEYED`]. Each digit pass is stable, which is what makes
//! the whole sort stable and correct across passes.

use std::any::type_name;

use crate::element::Sortable;
use crate::error::SortError;
use crate::order::SortOrder;

const RADIX: usize = 10;

pub fn sort<T: Sortable>(v: &mut [T], order: SortOrder) -> Result<(), SortError> {
    if !T::RADIX_KEYED {
        return Err(SortError::UnsupportedElementType(type_name::<T>()));
    }

    // Validate every key up front; a failed call must not leave the slice
    // partially reordered.
    let keys = v
        .iter()
        .map(|val| val.radix_key().ok_or(SortError::ValueOutOfRange))
        .collect::<Result<Vec<u64>, _>>()?;

    let Some(&max) = keys.iter().max() else {
        return Ok(());
    };

    let mut keyed: Vec<(u64, T)> = keys.into_iter().zip(v.iter().cloned()).collect();

    let mut exp = 1u64;
    while max / exp > 0 {
        keyed = counting_pass(keyed, exp, order);

        exp = match exp.checked_mul(10) {
            Some(next) => next,
            // `max` has a digit in the topmost u64 decimal position.
            None => break,
        };
    }

    for (slot, (_, val)) in v.iter_mut().zip(keyed) {
        *slot = val;
    }

    Ok(())
}

/// One stable counting-sort pass keyed by the decimal digit at `exp`.
fn counting_pass<T>(input: Vec<(u64, T)>, exp: u64, order: SortOrder) -> Vec<(u64, T)> {
    let digit = |key: u64| ((key / exp) % RADIX as u64) as usize;

    let mut counts = [0usize; RADIX];
    for (key, _) in &input {
        counts[digit(*key)] += 1;
    }

    // Cumulative counts become final positions: ascending runs the prefix
    // sum forward, descending reverses it so high digits land first.
    match order {
        SortOrder::Ascending => {
            for i in 1..RADIX {
                counts[i] += counts[i - 1];
            }
        }
        SortOrder::Descending => {
            for i in (0..RADIX - 1).rev() {
                counts[i] += counts[i + 1];
            }
        }
    }

    let mut output: Vec<Option<(u64, T)>> = (0..input.len()).map(|_| None).collect();

    // Scan in reverse while decrementing the running counts; equal digits
    // keep their relative order, the property the next pass relies on.
    for entry in input.into_iter().rev() {
        let d = digit(entry.0);
        counts[d] -= 1;
        output[counts[d]] = Some(entry);
    }

    output.into_iter().flatten().collect()
}
