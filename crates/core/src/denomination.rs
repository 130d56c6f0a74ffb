//! A single discrete unit: a coin, a note, or any fixed magnitude.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// A discrete unit with a fixed positive magnitude and a stable label.
///
/// Immutable once constructed. Deserialization goes through [`Denomination::new`],
/// so a loaded value is validated the same way as one built in code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DenominationRecord")]
pub struct Denomination {
    magnitude: Decimal,
    identity: String,
}

/// Unvalidated wire shape of a [`Denomination`].
#[derive(Debug, Deserialize)]
struct DenominationRecord {
    magnitude: Decimal,
    identity: String,
}

impl TryFrom<DenominationRecord> for Denomination {
    type Error = DomainError;

    fn try_from(record: DenominationRecord) -> DomainResult<Self> {
        Self::new(record.magnitude, record.identity)
    }
}

impl Denomination {
    /// Creates a denomination.
    ///
    /// # Errors
    ///
    /// - [`DomainError::InvalidDenomination`] if `magnitude <= 0`
    /// - [`DomainError::BlankIdentity`] if `identity` is empty or whitespace
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use denom_core::Denomination;
    ///
    /// let quarter = Denomination::new(dec!(0.25), "quarter").unwrap();
    /// assert_eq!(quarter.magnitude(), dec!(0.25));
    /// assert!(Denomination::new(dec!(0), "nothing").is_err());
    /// ```
    pub fn new(magnitude: Decimal, identity: impl Into<String>) -> DomainResult<Self> {
        if magnitude <= Decimal::ZERO {
            return Err(DomainError::InvalidDenomination { magnitude });
        }

        let identity = identity.into();
        if identity.trim().is_empty() {
            return Err(DomainError::BlankIdentity);
        }

        Ok(Self {
            magnitude,
            identity,
        })
    }

    /// The value one unit of this denomination represents.
    #[must_use]
    pub const fn magnitude(&self) -> Decimal {
        self.magnitude
    }

    /// The stable label of this denomination.
    #[must_use]
    pub fn identity(&self) -> &str {
        &self.identity
    }
}

impl std::fmt::Display for Denomination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.identity, self.magnitude)
    }
}
