//! The integer grid used by the optimal strategy.
//!
//! CRITICAL: nothing in here rounds. Values off the grid, or too large for
//! it, return `None` and the caller turns that into an error.

use rust_decimal::Decimal;

/// An integer lattice with spacing `10^-scale`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Grid {
    scale: u32,
}

impl Grid {
    /// The coarsest grid on which every value lies.
    pub(crate) fn covering(values: impl IntoIterator<Item = Decimal>) -> Self {
        let scale = values
            .into_iter()
            .map(|v| v.normalize().scale())
            .max()
            .unwrap_or(0);
        Self { scale }
    }

    /// Decimal places of one grid unit.
    pub(crate) const fn scale(self) -> u32 {
        self.scale
    }

    /// `value` as a whole number of grid units.
    ///
    /// Returns `None` for negative values, values off the grid, or counts that
    /// do not fit in a `u64`.
    pub(crate) fn to_units(self, value: Decimal) -> Option<u64> {
        let value = value.normalize();
        let shift = self.scale.checked_sub(value.scale())?;
        let factor = 10i128.checked_pow(shift)?;
        let units = value.mantissa().checked_mul(factor)?;
        u64::try_from(units).ok()
    }

    /// `units` grid units as a decimal.
    pub(crate) fn from_units(self, units: u64) -> Decimal {
        // u64 fits the 96-bit mantissa and the scale came from a Decimal
        Decimal::from_i128_with_scale(i128::from(units), self.scale)
    }
}
