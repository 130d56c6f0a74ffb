//! Decomposition engine: the entry points consumers call.

use denom_core::{Decomposition, DenominationSet};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::canonical;
use crate::config::EngineConfig;
use crate::error::{ConvertError, ConvertResult};
use crate::exchange::ExchangeFactor;
use crate::greedy;
use crate::optimal;
use crate::strategy::Strategy;

/// Stateless decomposition and conversion engine.
///
/// Holds only its configuration; every call is a pure function of its inputs.
/// One engine can serve any number of threads.
#[derive(Debug, Clone, Default)]
pub struct DecompositionEngine {
    config: EngineConfig,
}

impl DecompositionEngine {
    /// Creates an engine with the given bounds.
    #[must_use]
    pub const fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// The bounds this engine enforces.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Breaks `amount` down into counts of the denominations in `set`.
    ///
    /// # Errors
    ///
    /// - [`ConvertError::NegativeAmount`] if `amount < 0`
    /// - [`ConvertError::NonIntegerGridMismatch`] (optimal only) if the values
    ///   need more decimal places than `max_grid_scale`
    /// - [`ConvertError::AmountTooLargeForOptimalDecomposition`] (optimal only)
    ///   if the amount exceeds `max_optimal_units`; fall back to greedy
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use denom_core::DenominationSet;
    /// use denom_convert::{DecompositionEngine, Strategy};
    ///
    /// let coins = DenominationSet::from_pairs([
    ///     (dec!(1), "one"),
    ///     (dec!(3), "three"),
    ///     (dec!(4), "four"),
    /// ])
    /// .unwrap();
    /// let engine = DecompositionEngine::default();
    ///
    /// let greedy = engine.decompose(dec!(6), &coins, Strategy::Greedy).unwrap();
    /// let optimal = engine.decompose(dec!(6), &coins, Strategy::Optimal).unwrap();
    /// assert_eq!(greedy.total_count(), 3);
    /// assert_eq!(optimal.total_count(), 2);
    /// assert_eq!(optimal.count_of("three"), 2);
    /// ```
    pub fn decompose(
        &self,
        amount: Decimal,
        set: &DenominationSet,
        strategy: Strategy,
    ) -> ConvertResult<Decomposition> {
        if amount < Decimal::ZERO {
            return Err(ConvertError::NegativeAmount { amount });
        }

        let decomposition = match strategy {
            Strategy::Greedy => greedy::decompose(amount, set)?,
            Strategy::Optimal => optimal::decompose(amount, set, &self.config)?,
        };

        debug!(
            %amount,
            %strategy,
            units = decomposition.total_count(),
            remainder = %decomposition.remainder(),
            "Decomposed amount"
        );

        Ok(decomposition)
    }

    /// Re-expresses `decomposition` in `target` via `factor`.
    ///
    /// The source amount is reconstituted (counts plus remainder), multiplied
    /// by the factor without rounding, then decomposed against `target`.
    /// The source remainder is carried into the target amount, never dropped.
    ///
    /// # Errors
    ///
    /// - [`ConvertError::PrecisionExceeded`] if the exact converted amount does
    ///   not fit in a `Decimal`
    /// - anything [`Self::decompose`] returns for the converted amount
    pub fn convert(
        &self,
        decomposition: &Decomposition,
        target: &DenominationSet,
        factor: ExchangeFactor,
        strategy: Strategy,
    ) -> ConvertResult<Decomposition> {
        let source_amount = decomposition.reconstitute();
        let target_amount = factor.apply(source_amount)?;

        let converted = self.decompose(target_amount, target, strategy)?;

        if converted.is_exact() {
            debug!(
                %source_amount,
                %target_amount,
                %factor,
                "Converted decomposition"
            );
        } else {
            warn!(
                %source_amount,
                %target_amount,
                %factor,
                remainder = %converted.remainder(),
                "Converted decomposition leaves a remainder"
            );
        }

        Ok(converted)
    }

    /// Smallest amount on which greedy does worse than optimal for `set`.
    ///
    /// `None` proves greedy safe when the smallest magnitude is one unit of
    /// the set's decimal grid (a set containing 1, or 0.01 for cents). For
    /// other sets it only means no counterexample exists below
    /// `largest + second largest`.
    ///
    /// Never invoked by [`Self::decompose`].
    ///
    /// # Errors
    ///
    /// Same grid and size bounds as [`Strategy::Optimal`].
    pub fn find_greedy_counterexample(
        &self,
        set: &DenominationSet,
    ) -> ConvertResult<Option<Decimal>> {
        canonical::find_greedy_counterexample(set, &self.config)
    }
}

/// [`DecompositionEngine::decompose`] with default bounds.
pub fn decompose(
    amount: Decimal,
    set: &DenominationSet,
    strategy: Strategy,
) -> ConvertResult<Decomposition> {
    DecompositionEngine::default().decompose(amount, set, strategy)
}

/// [`DecompositionEngine::convert`] with default bounds.
pub fn convert(
    decomposition: &Decomposition,
    target: &DenominationSet,
    factor: ExchangeFactor,
    strategy: Strategy,
) -> ConvertResult<Decomposition> {
    DecompositionEngine::default().convert(decomposition, target, factor, strategy)
}
