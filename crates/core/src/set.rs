//! Denomination sets: the units available for decomposing an amount.

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::denomination::Denomination;
use crate::error::{DomainError, DomainResult};

/// A non-empty collection of denominations, unique by magnitude and identity.
///
/// Denominations are held in descending magnitude order. The set has no
/// mutation API, so one instance can be shared read-only across any number
/// of concurrent decomposition requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Denomination>", into = "Vec<Denomination>")]
pub struct DenominationSet {
    denominations: Vec<Denomination>,
}

impl DenominationSet {
    /// Creates a set from a collection of denominations.
    ///
    /// Magnitudes are compared numerically, so `1.0` and `1.00` collide.
    ///
    /// # Errors
    ///
    /// - [`DomainError::EmptySet`] if the collection is empty
    /// - [`DomainError::DuplicateMagnitude`] if two entries share a magnitude
    /// - [`DomainError::DuplicateIdentity`] if two entries share an identity
    pub fn new(denominations: impl IntoIterator<Item = Denomination>) -> DomainResult<Self> {
        let mut denominations: Vec<Denomination> = denominations.into_iter().collect();
        if denominations.is_empty() {
            return Err(DomainError::EmptySet);
        }

        denominations.sort_by(|a, b| b.magnitude().cmp(&a.magnitude()));

        // Sorted, so equal magnitudes are adjacent
        for pair in denominations.windows(2) {
            if pair[0].magnitude() == pair[1].magnitude() {
                return Err(DomainError::DuplicateMagnitude {
                    magnitude: pair[1].magnitude(),
                });
            }
        }

        let mut seen = HashSet::with_capacity(denominations.len());
        for denomination in &denominations {
            if !seen.insert(denomination.identity()) {
                return Err(DomainError::DuplicateIdentity {
                    identity: denomination.identity().to_string(),
                });
            }
        }

        Ok(Self { denominations })
    }

    /// Creates a set from `(magnitude, identity)` pairs.
    ///
    /// Each pair is validated as a [`Denomination`] before the set invariants
    /// are checked.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use denom_core::DenominationSet;
    ///
    /// let coins = DenominationSet::from_pairs([
    ///     (dec!(0.01), "penny"),
    ///     (dec!(0.25), "quarter"),
    ///     (dec!(0.05), "nickel"),
    /// ])
    /// .unwrap();
    /// assert_eq!(coins.largest().identity(), "quarter");
    /// assert_eq!(coins.smallest().identity(), "penny");
    /// ```
    pub fn from_pairs<I, S>(pairs: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = (Decimal, S)>,
        S: Into<String>,
    {
        let denominations = pairs
            .into_iter()
            .map(|(magnitude, identity)| Denomination::new(magnitude, identity))
            .collect::<DomainResult<Vec<_>>>()?;
        Self::new(denominations)
    }

    /// Denominations in descending magnitude order.
    #[must_use]
    pub fn descending(&self) -> &[Denomination] {
        &self.denominations
    }

    /// Iterates denominations in descending magnitude order.
    pub fn iter(&self) -> std::slice::Iter<'_, Denomination> {
        self.denominations.iter()
    }

    /// The denomination with the largest magnitude.
    #[must_use]
    pub fn largest(&self) -> &Denomination {
        // Non-empty by construction
        &self.denominations[0]
    }

    /// The denomination with the smallest magnitude.
    #[must_use]
    pub fn smallest(&self) -> &Denomination {
        &self.denominations[self.denominations.len() - 1]
    }

    /// Number of denominations in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.denominations.len()
    }

    /// Always false; sets are non-empty by construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.denominations.is_empty()
    }

    /// Looks up a denomination by identity.
    #[must_use]
    pub fn get(&self, identity: &str) -> Option<&Denomination> {
        self.denominations.iter().find(|d| d.identity() == identity)
    }
}

impl TryFrom<Vec<Denomination>> for DenominationSet {
    type Error = DomainError;

    fn try_from(denominations: Vec<Denomination>) -> DomainResult<Self> {
        Self::new(denominations)
    }
}

impl From<DenominationSet> for Vec<Denomination> {
    fn from(set: DenominationSet) -> Self {
        set.denominations
    }
}

impl<'a> IntoIterator for &'a DenominationSet {
    type Item = &'a Denomination;
    type IntoIter = std::slice::Iter<'a, Denomination>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
