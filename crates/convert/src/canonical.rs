//! Optional probe for whether greedy decomposition is safe on a set.
//!
//! `Strategy::Greedy` never calls this. Callers that cannot assert
//! canonicality themselves run it once per set and pick a strategy.

use denom_core::{Denomination, DenominationSet};
use rust_decimal::Decimal;

use crate::config::EngineConfig;
use crate::error::{ConvertError, ConvertResult};
use crate::grid::Grid;
use crate::optimal::{MinCountTable, check_grid, grid_units};

/// Finds the smallest amount on which greedy is worse than optimal.
///
/// Greedy is worse when it represents less value, or the same value with
/// more units. The search covers every amount below `largest + second
/// largest` (Kozen and Zaks).
///
/// A `Some` is always a real counterexample. `None` proves greedy safe only
/// when the smallest magnitude is one grid unit (e.g. a set containing 1, or
/// 0.01 for cent amounts). For other sets the window bound does not hold, so
/// `None` only means no counterexample was found below it.
///
/// # Errors
///
/// Same grid and size bounds as the optimal strategy, applied to the search
/// window.
pub(crate) fn find_greedy_counterexample(
    set: &DenominationSet,
    config: &EngineConfig,
) -> ConvertResult<Option<Decimal>> {
    let magnitudes = set.descending();
    if magnitudes.len() < 2 {
        return Ok(None);
    }

    let grid = Grid::covering(magnitudes.iter().map(Denomination::magnitude));
    check_grid(grid, config)?;

    let units = grid_units(grid, set);
    let window = units[0]
        .checked_add(units[1])
        .filter(|w| *w <= config.max_optimal_units)
        .and_then(|w| usize::try_from(w).ok())
        .ok_or(ConvertError::AmountTooLargeForOptimalDecomposition {
            amount: magnitudes[0].magnitude() + magnitudes[1].magnitude(),
            limit: config.max_optimal_units,
        })?;

    let table = MinCountTable::build(window, &units);

    for x in 1..window {
        let optimal_value = table.floor_reachable(x);
        let optimal_count = table.min_count(optimal_value).map_or(0, u64::from);
        let (greedy_value, greedy_count) = greedy_units(x as u64, &units);

        if greedy_value < optimal_value as u64
            || (greedy_value == optimal_value as u64 && greedy_count > optimal_count)
        {
            return Ok(Some(grid.from_units(x as u64)));
        }
    }

    Ok(None)
}

/// Greedy on grid units: `(represented value, unit count)`.
fn greedy_units(amount: u64, units: &[u64]) -> (u64, u64) {
    let mut remaining = amount;
    let mut count = 0;
    for &unit in units {
        count += remaining / unit;
        remaining %= unit;
    }
    (amount - remaining, count)
}
