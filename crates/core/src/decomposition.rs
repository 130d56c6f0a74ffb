//! Decompositions: counts of each denomination plus an unrepresented remainder.

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::denomination::Denomination;
use crate::error::{DomainError, DomainResult};
use crate::exact::ExactDecimal;

/// How many units of one denomination a decomposition uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DenominationCount {
    /// The denomination.
    pub denomination: Denomination,
    /// Number of units, always greater than zero inside a [`Decomposition`].
    pub count: u128,
}

impl DenominationCount {
    /// Creates a new count entry.
    #[must_use]
    pub const fn new(denomination: Denomination, count: u128) -> Self {
        Self {
            denomination,
            count,
        }
    }

    /// `count x magnitude`, exactly.
    ///
    /// Returns `None` if the exact product does not fit in a `Decimal`.
    #[must_use]
    pub fn value(&self) -> Option<Decimal> {
        self.exact_value()?.to_decimal()
    }

    fn exact_value(&self) -> Option<ExactDecimal> {
        ExactDecimal::from(self.denomination.magnitude()).checked_mul_count(self.count)
    }
}

/// Breakdown of an amount into denomination counts plus a remainder.
///
/// Invariant: `sum(count x magnitude) + remainder == amount`, exactly, with
/// `remainder >= 0` and at most one entry per denomination. A non-zero
/// remainder is value the denomination set could not express; it is a
/// result, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decomposition {
    amount: Decimal,
    entries: Vec<DenominationCount>,
    remainder: Decimal,
}

impl Decomposition {
    /// Creates a decomposition after checking the exactness invariant.
    ///
    /// Zero-count entries are dropped, entries for the same denomination are
    /// merged by summing their counts, and the rest are ordered by descending
    /// magnitude. The sum is checked without rounding.
    ///
    /// # Errors
    ///
    /// - [`DomainError::NegativeRemainder`] if `remainder < 0`
    /// - [`DomainError::DuplicateMagnitude`] / [`DomainError::DuplicateIdentity`]
    ///   if two different denominations share a magnitude or an identity
    /// - [`DomainError::InconsistentDecomposition`] if counts and remainder do
    ///   not reconstitute `amount` exactly
    /// - [`DomainError::ExactValueOverflow`] if the exact sum does not fit in
    ///   128 bits, or a mismatching sum does not fit in a `Decimal`
    pub fn new(
        amount: Decimal,
        entries: impl IntoIterator<Item = DenominationCount>,
        remainder: Decimal,
    ) -> DomainResult<Self> {
        if remainder < Decimal::ZERO {
            return Err(DomainError::NegativeRemainder { remainder });
        }

        let overflow = DomainError::ExactValueOverflow { amount };
        let entries = merge_entries(entries, &overflow)?;

        let reconstituted = entries
            .iter()
            .try_fold(ExactDecimal::from(remainder), |acc, e| {
                acc.checked_add(e.exact_value()?)
            })
            .ok_or(overflow.clone())?;

        if reconstituted != ExactDecimal::from(amount) {
            return Err(DomainError::InconsistentDecomposition {
                amount,
                reconstituted: reconstituted.to_decimal().ok_or(overflow)?,
            });
        }

        Ok(Self {
            amount,
            entries,
            remainder,
        })
    }

    /// A decomposition where nothing could be represented.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NegativeRemainder`] if `amount < 0`.
    pub fn unrepresented(amount: Decimal) -> DomainResult<Self> {
        Self::new(amount, Vec::new(), amount)
    }

    /// The amount this decomposition represents.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// Non-zero counts in descending magnitude order, one per denomination.
    #[must_use]
    pub fn entries(&self) -> &[DenominationCount] {
        &self.entries
    }

    /// The portion of the amount the set could not express.
    #[must_use]
    pub const fn remainder(&self) -> Decimal {
        self.remainder
    }

    /// True if the remainder is zero.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.remainder.is_zero()
    }

    /// Total number of units across all denominations.
    #[must_use]
    pub fn total_count(&self) -> u128 {
        self.entries
            .iter()
            .fold(0u128, |acc, e| acc.saturating_add(e.count))
    }

    /// `sum(count x magnitude)`, i.e. the amount minus the remainder.
    ///
    /// `None` when that difference needs more than 28 significant digits,
    /// e.g. `9 x 1.0000000000000000000000000001`.
    #[must_use]
    pub fn represented_value(&self) -> Option<Decimal> {
        ExactDecimal::from(self.amount)
            .checked_sub(ExactDecimal::from(self.remainder))?
            .to_decimal()
    }

    /// `sum(count x magnitude) + remainder`.
    ///
    /// Checked exactly at construction, so this is always [`Self::amount`].
    #[must_use]
    pub const fn reconstitute(&self) -> Decimal {
        self.amount
    }

    /// Count used for the denomination labelled `identity`, zero if absent.
    #[must_use]
    pub fn count_of(&self, identity: &str) -> u128 {
        self.entries
            .iter()
            .find(|e| e.denomination.identity() == identity)
            .map_or(0, |e| e.count)
    }
}

/// Drops zero counts, merges entries for the same denomination and orders the
/// rest by descending magnitude.
fn merge_entries(
    entries: impl IntoIterator<Item = DenominationCount>,
    overflow: &DomainError,
) -> DomainResult<Vec<DenominationCount>> {
    let mut sorted: Vec<DenominationCount> =
        entries.into_iter().filter(|e| e.count > 0).collect();
    sorted.sort_by(|a, b| {
        b.denomination
            .magnitude()
            .cmp(&a.denomination.magnitude())
    });

    let mut merged: Vec<DenominationCount> = Vec::with_capacity(sorted.len());
    let mut identities = HashSet::new();
    for entry in sorted {
        if let Some(last) = merged.last_mut()
            && last.denomination.magnitude() == entry.denomination.magnitude()
        {
            if last.denomination != entry.denomination {
                return Err(DomainError::DuplicateMagnitude {
                    magnitude: entry.denomination.magnitude(),
                });
            }
            last.count = last
                .count
                .checked_add(entry.count)
                .ok_or_else(|| overflow.clone())?;
            continue;
        }

        if !identities.insert(entry.denomination.identity().to_owned()) {
            return Err(DomainError::DuplicateIdentity {
                identity: entry.denomination.identity().to_owned(),
            });
        }
        merged.push(entry);
    }

    Ok(merged)
}
