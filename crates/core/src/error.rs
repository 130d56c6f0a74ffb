//! Domain error types for denomination validation.
//!
//! Every value type in this crate is validated eagerly at construction, so a
//! `Denomination`, `DenominationSet` or `Decomposition` that exists is valid.

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type alias using `DomainError`.
pub type DomainResult<T> = Result<T, DomainError>;

/// Errors raised while constructing domain values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    // ========== Denomination Errors ==========
    /// Denomination magnitude must be strictly positive.
    #[error("Invalid denomination: magnitude {magnitude} must be greater than zero")]
    InvalidDenomination {
        /// The rejected magnitude.
        magnitude: Decimal,
    },

    /// Denomination identity cannot be blank.
    #[error("Denomination identity cannot be blank")]
    BlankIdentity,

    // ========== Set Errors ==========
    /// A denomination set must contain at least one denomination.
    #[error("Denomination set must contain at least one denomination")]
    EmptySet,

    /// Two denominations in a set share the same magnitude.
    #[error("Duplicate magnitude {magnitude} in denomination set")]
    DuplicateMagnitude {
        /// The repeated magnitude.
        magnitude: Decimal,
    },

    /// Two denominations in a set share the same identity.
    #[error("Duplicate identity '{identity}' in denomination set")]
    DuplicateIdentity {
        /// The repeated identity.
        identity: String,
    },

    // ========== Decomposition Errors ==========
    /// Counts and remainder do not add back up to the amount.
    #[error("Inconsistent decomposition: amount {amount} != reconstituted {reconstituted}")]
    InconsistentDecomposition {
        /// The amount the decomposition claims to represent.
        amount: Decimal,
        /// Sum of count x magnitude plus remainder.
        reconstituted: Decimal,
    },

    /// Remainder cannot be negative.
    #[error("Decomposition remainder {remainder} cannot be negative")]
    NegativeRemainder {
        /// The rejected remainder.
        remainder: Decimal,
    },

    /// An exact intermediate value does not fit in 128 bits.
    #[error("Exact value of decomposition for amount {amount} exceeds 128-bit precision")]
    ExactValueOverflow {
        /// The amount being checked.
        amount: Decimal,
    },
}

impl DomainError {
    /// Returns a stable machine-readable code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidDenomination { .. } => "INVALID_DENOMINATION",
            Self::BlankIdentity => "BLANK_IDENTITY",
            Self::EmptySet => "EMPTY_SET",
            Self::DuplicateMagnitude { .. } => "DUPLICATE_MAGNITUDE",
            Self::DuplicateIdentity { .. } => "DUPLICATE_IDENTITY",
            Self::InconsistentDecomposition { .. } => "INCONSISTENT_DECOMPOSITION",
            Self::NegativeRemainder { .. } => "NEGATIVE_REMAINDER",
            Self::ExactValueOverflow { .. } => "EXACT_VALUE_OVERFLOW",
        }
    }
}
