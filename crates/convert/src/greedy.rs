//! Greedy decomposition: largest denomination first.

use denom_core::{Decomposition, DenominationCount, DenominationSet, ExactDecimal};
use rust_decimal::Decimal;

use crate::error::{ConvertError, ConvertResult};

/// Decomposes `amount` taking as many of each denomination as fit, largest
/// first. Whatever is left after the smallest denomination is the remainder.
///
/// O(number of denominations). The result is minimal only for canonical sets.
/// Counts and the running remainder come from integer division on `i128`
/// mantissas, so nothing is rounded even when `count x magnitude` itself has
/// more digits than a `Decimal` holds.
///
/// # Errors
///
/// Returns [`ConvertError::PrecisionExceeded`] if putting the amount and a
/// magnitude on one scale overflows 128 bits.
pub(crate) fn decompose(amount: Decimal, set: &DenominationSet) -> ConvertResult<Decomposition> {
    let mut remaining = ExactDecimal::from(amount);
    let mut entries = Vec::with_capacity(set.len());

    for denomination in set.descending() {
        let (count, rest) = remaining
            .checked_div_rem(ExactDecimal::from(denomination.magnitude()))
            .ok_or(ConvertError::PrecisionExceeded)?;
        if count > 0 {
            entries.push(DenominationCount::new(denomination.clone(), count));
            remaining = rest;
        }
    }

    let remainder = remaining
        .to_decimal()
        .ok_or(ConvertError::PrecisionExceeded)?;
    Ok(Decomposition::new(amount, entries, remainder)?)
}
