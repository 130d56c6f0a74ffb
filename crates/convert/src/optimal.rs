//! Minimum-count decomposition by dynamic programming on an integer grid.

use denom_core::{Decomposition, Denomination, DenominationCount, DenominationSet};
use rust_decimal::Decimal;

use crate::config::EngineConfig;
use crate::error::{ConvertError, ConvertResult};
use crate::grid::Grid;

const UNREACHABLE: u32 = u32::MAX;

/// Minimum unit counts for every grid value `0..=limit`.
///
/// `units` are denomination magnitudes in grid units, descending. Scanning
/// them in that order and only replacing on strict improvement makes ties go
/// to the larger denomination.
pub(crate) struct MinCountTable {
    units: Vec<u64>,
    best: Vec<u32>,
    choice: Vec<usize>,
    floor_reachable: Vec<usize>,
}

impl MinCountTable {
    pub(crate) fn build(limit: usize, units: &[u64]) -> Self {
        let mut best = vec![UNREACHABLE; limit + 1];
        let mut choice = vec![usize::MAX; limit + 1];
        let mut floor_reachable = vec![0; limit + 1];
        best[0] = 0;

        for v in 1..=limit {
            for (i, &unit) in units.iter().enumerate() {
                let Ok(d) = usize::try_from(unit) else {
                    continue;
                };
                if d == 0 || d > v {
                    continue;
                }
                let prev = best[v - d];
                if prev != UNREACHABLE && prev + 1 < best[v] {
                    best[v] = prev + 1;
                    choice[v] = i;
                }
            }
            floor_reachable[v] = if best[v] == UNREACHABLE {
                floor_reachable[v - 1]
            } else {
                v
            };
        }

        Self {
            units: units.to_vec(),
            best,
            choice,
            floor_reachable,
        }
    }

    /// Largest value `<= v` some combination sums to exactly.
    pub(crate) fn floor_reachable(&self, v: usize) -> usize {
        self.floor_reachable[v]
    }

    /// Minimum number of units summing to exactly `v`.
    pub(crate) fn min_count(&self, v: usize) -> Option<u32> {
        (self.best[v] != UNREACHABLE).then_some(self.best[v])
    }

    /// Per-denomination counts of the minimal combination for a reachable `v`.
    pub(crate) fn counts(&self, mut v: usize) -> Vec<u64> {
        let mut counts = vec![0u64; self.units.len()];
        while v > 0 {
            let i = self.choice[v];
            if i == usize::MAX {
                break;
            }
            counts[i] += 1;
            // Chosen units are <= v, so they fit in usize
            v -= usize::try_from(self.units[i]).unwrap_or(v);
        }
        counts
    }
}

/// Decomposes `amount` with the fewest units, maximising represented value
/// first when the amount is not exactly reachable.
///
/// Magnitudes larger than the amount cannot be used and do not affect the
/// grid. Both bounds in `config` are checked before any table is allocated.
pub(crate) fn decompose(
    amount: Decimal,
    set: &DenominationSet,
    config: &EngineConfig,
) -> ConvertResult<Decomposition> {
    let usable = set.iter().filter(|d| d.magnitude() <= amount);
    let grid = Grid::covering(std::iter::once(amount).chain(usable.map(Denomination::magnitude)));
    check_grid(grid, config)?;

    let too_large = ConvertError::AmountTooLargeForOptimalDecomposition {
        amount,
        limit: config.max_optimal_units,
    };
    let amount_units = grid.to_units(amount).ok_or(too_large.clone())?;
    if amount_units > config.max_optimal_units {
        return Err(too_large);
    }
    let limit = usize::try_from(amount_units).map_err(|_| too_large)?;

    let units = grid_units(grid, set);
    let table = MinCountTable::build(limit, &units);

    let reached = table.floor_reachable(limit);
    let entries = set
        .iter()
        .zip(table.counts(reached))
        .map(|(d, count)| DenominationCount::new(d.clone(), u128::from(count)));
    let remainder = amount - grid.from_units(reached as u64);

    Ok(Decomposition::new(amount, entries, remainder)?)
}

pub(crate) fn check_grid(grid: Grid, config: &EngineConfig) -> ConvertResult<()> {
    if grid.scale() > config.max_grid_scale {
        return Err(ConvertError::NonIntegerGridMismatch {
            required_scale: grid.scale(),
            max_scale: config.max_grid_scale,
        });
    }
    Ok(())
}

/// Magnitudes in grid units, descending. Off-grid or oversized magnitudes map
/// to `u64::MAX` so the table never selects them.
pub(crate) fn grid_units(grid: Grid, set: &DenominationSet) -> Vec<u64> {
    set.iter()
        .map(|d| grid.to_units(d.magnitude()).unwrap_or(u64::MAX))
        .collect()
}
