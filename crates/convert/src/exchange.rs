//! Exchange factors between denomination systems.

use denom_core::exact_mul;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, ConvertResult};

/// Positive multiplier relating one denomination system's unit to another's.
///
/// One source unit equals `rate` target units. Applying a factor never rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct ExchangeFactor {
    rate: Decimal,
}

impl ExchangeFactor {
    /// Creates a factor.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::NonPositiveExchangeFactor`] if `rate <= 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use denom_convert::ExchangeFactor;
    ///
    /// let dollars_to_cents = ExchangeFactor::new(dec!(100)).unwrap();
    /// let cents_to_dollars = dollars_to_cents.reciprocal().unwrap();
    /// assert_eq!(cents_to_dollars.rate(), dec!(0.01));
    /// ```
    pub fn new(rate: Decimal) -> ConvertResult<Self> {
        if rate <= Decimal::ZERO {
            return Err(ConvertError::NonPositiveExchangeFactor { factor: rate });
        }
        Ok(Self { rate })
    }

    /// The factor between a system and itself.
    #[must_use]
    pub const fn identity() -> Self {
        Self { rate: Decimal::ONE }
    }

    /// Target units per source unit.
    #[must_use]
    pub const fn rate(&self) -> Decimal {
        self.rate
    }

    /// The factor for the opposite direction.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InexactReciprocal`] if `1 / rate` is not a
    /// finite decimal within `Decimal` precision (e.g. a rate of 3).
    pub fn reciprocal(&self) -> ConvertResult<Self> {
        let inexact = ConvertError::InexactReciprocal { factor: self.rate };

        let inverse = Decimal::ONE.checked_div(self.rate).ok_or(inexact.clone())?;
        match exact_mul(inverse, self.rate) {
            Some(product) if product == Decimal::ONE => Ok(Self { rate: inverse }),
            _ => Err(inexact),
        }
    }

    /// `amount x rate`, exactly.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::PrecisionExceeded`] if the exact product does
    /// not fit in a `Decimal`.
    pub fn apply(&self, amount: Decimal) -> ConvertResult<Decimal> {
        exact_mul(amount, self.rate).ok_or(ConvertError::PrecisionExceeded)
    }
}

impl TryFrom<Decimal> for ExchangeFactor {
    type Error = ConvertError;

    fn try_from(rate: Decimal) -> ConvertResult<Self> {
        Self::new(rate)
    }
}

impl From<ExchangeFactor> for Decimal {
    fn from(factor: ExchangeFactor) -> Self {
        factor.rate
    }
}

impl std::fmt::Display for ExchangeFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.rate)
    }
}
