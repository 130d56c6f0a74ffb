//! Property-based tests for decomposition and conversion.
//!
//! - Exactness: counts x magnitudes + remainder == amount
//! - Non-negativity of counts and remainder
//! - Optimal minimality against exhaustive search
//! - Greedy/optimal agreement on canonical sets
//! - Conversion round trips never lose value
//! - Greedy stays exact past `Decimal` multiplication precision

use denom_core::{Decomposition, DenominationSet, exact_mul};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

use crate::engine::DecompositionEngine;
use crate::exchange::ExchangeFactor;
use crate::strategy::Strategy as Method;

/// Strategy to generate integer denomination sets (1 to 5 distinct magnitudes, 1..=30).
fn integer_set() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::btree_set(1u64..=30, 1..=5).prop_map(|s| s.into_iter().collect())
}

/// Strategy to generate cent amounts (0.00 to 999.99).
fn cent_amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to pick factors with exact reciprocals.
fn reciprocal_factor() -> impl Strategy<Value = Decimal> {
    prop::sample::select(vec![
        Decimal::new(2, 0),
        Decimal::new(4, 0),
        Decimal::new(10, 0),
        Decimal::new(100, 0),
        Decimal::new(5, 1),
        Decimal::new(25, 2),
        Decimal::new(1, 2),
        Decimal::ONE,
    ])
}

fn build_set(magnitudes: &[u64]) -> DenominationSet {
    DenominationSet::from_pairs(magnitudes.iter().map(|m| (Decimal::from(*m), format!("d{m}"))))
        .expect("generated magnitudes are distinct and positive")
}

fn us_cents() -> DenominationSet {
    build_set(&[1, 5, 10, 25])
}

fn euro_cents() -> DenominationSet {
    build_set(&[1, 2, 5, 10, 20, 50, 100, 200])
}

fn sum_of_counts(decomposition: &Decomposition) -> Decimal {
    decomposition
        .entries()
        .iter()
        .map(|e| {
            let count = Decimal::from_u128(e.count).expect("counts in these tests are small");
            e.denomination.magnitude() * count
        })
        .sum()
}

/// Exhaustive minimum number of units summing to exactly `amount`.
fn brute_force_min(amount: u64, magnitudes: &[u64]) -> Option<u64> {
    fn go(amount: u64, magnitudes: &[u64]) -> Option<u64> {
        if amount == 0 {
            return Some(0);
        }
        let (first, rest) = magnitudes.split_first()?;
        if rest.is_empty() {
            return (amount % first == 0).then_some(amount / first);
        }
        (0..=amount / first)
            .filter_map(|k| go(amount - k * first, rest).map(|c| c + k))
            .min()
    }
    go(amount, magnitudes)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // =========================================================================
    // Exactness and non-negativity
    // =========================================================================

    /// *For any* amount and set, both strategies reconstitute the amount exactly.
    #[test]
    fn prop_decompose_is_exact(
        magnitudes in integer_set(),
        amount in 0u64..500,
    ) {
        let set = build_set(&magnitudes);
        let engine = DecompositionEngine::default();
        let amount = Decimal::from(amount);

        for strategy in [Method::Greedy, Method::Optimal] {
            let d = engine.decompose(amount, &set, strategy).unwrap();
            prop_assert_eq!(sum_of_counts(&d) + d.remainder(), amount);
            prop_assert!(d.remainder() >= Decimal::ZERO);
            prop_assert!(d.entries().iter().all(|e| e.count > 0));
            // Remainder is always below the smallest unit for greedy
            if strategy == Method::Greedy {
                prop_assert!(d.remainder() < set.smallest().magnitude());
            }
        }
    }

    /// *For any* cent amount, greedy over fractional coins is exact.
    #[test]
    fn prop_fractional_greedy_is_exact(amount in cent_amount()) {
        let coins = DenominationSet::from_pairs([
            (Decimal::new(1, 2), "penny"),
            (Decimal::new(5, 2), "nickel"),
            (Decimal::new(10, 2), "dime"),
            (Decimal::new(25, 2), "quarter"),
            (Decimal::ONE, "dollar"),
        ])
        .unwrap();
        let d = DecompositionEngine::default()
            .decompose(amount, &coins, Method::Greedy)
            .unwrap();
        prop_assert!(d.is_exact());
        prop_assert_eq!(sum_of_counts(&d), amount);
    }

    // =========================================================================
    // Optimal minimality
    // =========================================================================

    /// *For any* small integer set and amount, optimal matches exhaustive search:
    /// it represents the largest reachable value with the fewest units.
    #[test]
    fn prop_optimal_is_minimal(
        magnitudes in integer_set(),
        amount in 0u64..40,
    ) {
        let set = build_set(&magnitudes);
        let d = DecompositionEngine::default()
            .decompose(Decimal::from(amount), &set, Method::Optimal)
            .unwrap();

        let reached = (0..=amount)
            .rev()
            .find(|v| brute_force_min(*v, &magnitudes).is_some())
            .unwrap_or(0);
        prop_assert_eq!(d.represented_value(), Some(Decimal::from(reached)));
        prop_assert_eq!(
            Some(d.total_count()),
            brute_force_min(reached, &magnitudes).map(u128::from)
        );
    }

    /// *For any* set and amount, optimal never uses more units than greedy when
    /// both represent the same value, and never represents less.
    #[test]
    fn prop_optimal_never_worse_than_greedy(
        magnitudes in integer_set(),
        amount in 0u64..300,
    ) {
        let set = build_set(&magnitudes);
        let engine = DecompositionEngine::default();
        let amount = Decimal::from(amount);

        let greedy = engine.decompose(amount, &set, Method::Greedy).unwrap();
        let optimal = engine.decompose(amount, &set, Method::Optimal).unwrap();

        prop_assert!(optimal.remainder() <= greedy.remainder());
        if optimal.remainder() == greedy.remainder() {
            prop_assert!(optimal.total_count() <= greedy.total_count());
        }
    }

    // =========================================================================
    // Greedy/optimal agreement on canonical sets
    // =========================================================================

    /// *For any* amount, greedy and optimal agree on canonical coin systems.
    #[test]
    fn prop_canonical_sets_agree(amount in 0u64..2_000) {
        let engine = DecompositionEngine::default();
        let amount = Decimal::from(amount);

        for set in [us_cents(), euro_cents()] {
            let greedy = engine.decompose(amount, &set, Method::Greedy).unwrap();
            let optimal = engine.decompose(amount, &set, Method::Optimal).unwrap();
            prop_assert_eq!(greedy.total_count(), optimal.total_count());
            prop_assert!(greedy.is_exact() && optimal.is_exact());
        }
    }

    // =========================================================================
    // Conversion round trips
    // =========================================================================

    /// *For any* amount and factor with an exact reciprocal, converting there
    /// and back reconstitutes the original amount; remainders are reported at
    /// each step and value is never lost.
    #[test]
    fn prop_round_trip_preserves_amount(
        amount in (0i64..10_000).prop_map(|cents| Decimal::new(cents, 2)),
        rate in reciprocal_factor(),
        strategy in prop::sample::select(vec![Method::Greedy, Method::Optimal]),
    ) {
        let engine = DecompositionEngine::default();
        let source_set = us_cents();
        let target_set = euro_cents();
        let factor = ExchangeFactor::new(rate).unwrap();

        let source = engine.decompose(amount, &source_set, Method::Greedy).unwrap();
        let there = engine.convert(&source, &target_set, factor, strategy).unwrap();
        let back = engine
            .convert(&there, &source_set, factor.reciprocal().unwrap(), strategy)
            .unwrap();

        prop_assert_eq!(there.reconstitute(), amount * rate);
        prop_assert_eq!(back.reconstitute(), amount);
        prop_assert!(there.remainder() >= Decimal::ZERO);
        prop_assert!(back.remainder() >= Decimal::ZERO);

        // Nothing lost: counts plus remainder make up the amount at every step
        prop_assert_eq!(sum_of_counts(&there) + there.remainder(), there.amount());
        prop_assert_eq!(sum_of_counts(&back) + back.remainder(), back.amount());

        // Without remainders the breakdown itself comes back
        if source.is_exact() && there.is_exact() && back.is_exact() && strategy == Method::Greedy {
            prop_assert_eq!(back, source);
        }
    }

    /// *For any* amount and factor, converting between sets that do not tile
    /// each other carries every remainder: the source remainder travels inside
    /// the converted amount, and coming back with the same strategy reproduces
    /// the source breakdown, remainder included.
    #[test]
    fn prop_round_trip_carries_remainders(
        amount in (0i64..10_000).prop_map(|cents| Decimal::new(cents, 2)),
        rate in reciprocal_factor(),
        strategy in prop::sample::select(vec![Method::Greedy, Method::Optimal]),
    ) {
        let engine = DecompositionEngine::default();
        let source_set = build_set(&[3, 7]);
        let target_set = build_set(&[4, 9]);
        let factor = ExchangeFactor::new(rate).unwrap();

        let source = engine.decompose(amount, &source_set, strategy).unwrap();
        let there = engine.convert(&source, &target_set, factor, strategy).unwrap();
        let back = engine
            .convert(&there, &source_set, factor.reciprocal().unwrap(), strategy)
            .unwrap();

        // The source remainder is part of what gets converted
        prop_assert_eq!(there.amount(), exact_mul(source.amount(), rate).unwrap());
        prop_assert_eq!(back.amount(), source.amount());

        // Remainders never shrink below what the source already stranded
        prop_assert!(source.remainder() <= back.remainder());
        prop_assert_eq!(&back, &source);

        for d in [&source, &there, &back] {
            prop_assert!(d.remainder() >= Decimal::ZERO);
            prop_assert_eq!(sum_of_counts(d) + d.remainder(), d.amount());
        }
    }

    // =========================================================================
    // Precision
    // =========================================================================

    /// *For any* magnitude with 29 significant digits, greedy keeps
    /// `count x magnitude + remainder == amount` exact, checked here on
    /// `i128` mantissas at scale 28.
    #[test]
    fn prop_greedy_exact_with_high_precision_magnitude(
        offset in 1i128..1_000,
        amount in 1i64..1_000,
    ) {
        let one = 10i128.pow(28);
        let magnitude = Decimal::from_i128_with_scale(one + offset, 28);
        let set = DenominationSet::from_pairs([(magnitude, "fine")]).unwrap();

        let d = DecompositionEngine::default()
            .decompose(Decimal::from(amount), &set, Method::Greedy)
            .unwrap();

        let count = i128::try_from(d.count_of("fine")).unwrap();
        let remainder = d.remainder();
        let remainder_units = remainder.mantissa() * 10i128.pow(28 - remainder.scale());

        prop_assert_eq!(count * (one + offset) + remainder_units, i128::from(amount) * one);
        prop_assert!(remainder_units >= 0);
        prop_assert!(remainder_units < one + offset);
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_brute_force_min() {
        assert_eq!(brute_force_min(6, &[1, 3, 4]), Some(2));
        assert_eq!(brute_force_min(7, &[3, 5]), None);
        assert_eq!(brute_force_min(0, &[3, 5]), Some(0));
    }
}
