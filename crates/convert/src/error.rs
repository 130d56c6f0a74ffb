//! Engine error types.

use denom_core::DomainError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Result type alias using `ConvertError`.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Errors raised by decomposition and conversion.
///
/// All of them are detected before any result is produced; a non-zero
/// remainder is never reported through this type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] DomainError),

    // ========== Input Errors ==========
    /// Amounts must be zero or positive.
    #[error("Amount {amount} is negative")]
    NegativeAmount {
        /// The rejected amount.
        amount: Decimal,
    },

    /// Exchange factors must be strictly positive.
    #[error("Exchange factor {factor} must be greater than zero")]
    NonPositiveExchangeFactor {
        /// The rejected factor.
        factor: Decimal,
    },

    /// `1 / factor` has no exact decimal representation.
    #[error("Exchange factor {factor} has no exact reciprocal")]
    InexactReciprocal {
        /// The factor whose reciprocal was requested.
        factor: Decimal,
    },

    // ========== Optimal Strategy Errors ==========
    /// Amount exceeds the configured bound for the optimal strategy.
    #[error("Amount {amount} exceeds the optimal decomposition bound of {limit} grid units")]
    AmountTooLargeForOptimalDecomposition {
        /// The rejected amount.
        amount: Decimal,
        /// Configured `max_optimal_units`.
        limit: u64,
    },

    /// Amount and magnitudes need a finer grid than the engine allows.
    #[error("Common integer grid needs {required_scale} decimal places, at most {max_scale} allowed")]
    NonIntegerGridMismatch {
        /// Decimal places needed to put every value on one integer grid.
        required_scale: u32,
        /// Configured `max_grid_scale`.
        max_scale: u32,
    },

    // ========== Arithmetic Errors ==========
    /// An exact result does not fit the decimal representation.
    #[error("Exact result exceeds decimal precision")]
    PrecisionExceeded,
}

impl ConvertError {
    /// Returns a stable machine-readable code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Domain(inner) => inner.error_code(),
            Self::NegativeAmount { .. } => "NEGATIVE_AMOUNT",
            Self::NonPositiveExchangeFactor { .. } => "NON_POSITIVE_EXCHANGE_FACTOR",
            Self::InexactReciprocal { .. } => "INEXACT_RECIPROCAL",
            Self::AmountTooLargeForOptimalDecomposition { .. } => {
                "AMOUNT_TOO_LARGE_FOR_OPTIMAL_DECOMPOSITION"
            }
            Self::NonIntegerGridMismatch { .. } => "NON_INTEGER_GRID_MISMATCH",
            Self::PrecisionExceeded => "PRECISION_EXCEEDED",
        }
    }
}
