//! Exact decimal arithmetic.
//!
//! `Decimal`'s operators silently round once a result needs more than 28
//! significant digits. Everything here either returns the exact value or
//! `None`, and callers turn `None` into a typed error.

use rust_decimal::Decimal;

/// Largest scale a `Decimal` supports.
const MAX_SCALE: u32 = 28;

/// A decimal held as an `i128` mantissa and a scale.
///
/// The mantissa is wider than `Decimal`'s 96 bits, so intermediate values
/// such as `count x magnitude` stay exact even when no `Decimal` can hold
/// them. Values are kept normalized (no trailing zeros), which makes the
/// derived equality numeric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExactDecimal {
    mantissa: i128,
    scale: u32,
}

impl ExactDecimal {
    /// Zero.
    pub const ZERO: Self = Self {
        mantissa: 0,
        scale: 0,
    };

    fn normalized(mut mantissa: i128, mut scale: u32) -> Self {
        while scale > 0 && mantissa % 10 == 0 {
            mantissa /= 10;
            scale -= 1;
        }
        Self { mantissa, scale }
    }

    /// Both mantissas on the finer of the two scales.
    fn aligned(self, other: Self) -> Option<(i128, i128, u32)> {
        let scale = self.scale.max(other.scale);
        let lhs = self
            .mantissa
            .checked_mul(10i128.checked_pow(scale - self.scale)?)?;
        let rhs = other
            .mantissa
            .checked_mul(10i128.checked_pow(scale - other.scale)?)?;
        Some((lhs, rhs, scale))
    }

    /// `self + other`, or `None` on overflow.
    #[must_use]
    pub fn checked_add(self, other: Self) -> Option<Self> {
        let (lhs, rhs, scale) = self.aligned(other)?;
        Some(Self::normalized(lhs.checked_add(rhs)?, scale))
    }

    /// `self - other`, or `None` on overflow.
    #[must_use]
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        let (lhs, rhs, scale) = self.aligned(other)?;
        Some(Self::normalized(lhs.checked_sub(rhs)?, scale))
    }

    /// `self x other`, or `None` on overflow.
    #[must_use]
    pub fn checked_mul(self, other: Self) -> Option<Self> {
        let mantissa = self.mantissa.checked_mul(other.mantissa)?;
        Some(Self::normalized(mantissa, self.scale + other.scale))
    }

    /// `self x count`, or `None` on overflow.
    #[must_use]
    pub fn checked_mul_count(self, count: u128) -> Option<Self> {
        let count = i128::try_from(count).ok()?;
        Some(Self::normalized(self.mantissa.checked_mul(count)?, self.scale))
    }

    /// `(floor(self / divisor), self - floor(self / divisor) x divisor)`.
    ///
    /// Integer division on aligned mantissas, so the quotient is never
    /// rounded up the way `Decimal` division can be. Returns `None` for a
    /// negative dividend, a non-positive divisor, or on overflow.
    #[must_use]
    pub fn checked_div_rem(self, divisor: Self) -> Option<(u128, Self)> {
        let (value, unit, scale) = self.aligned(divisor)?;
        if value < 0 || unit <= 0 {
            return None;
        }
        let quotient = u128::try_from(value / unit).ok()?;
        Some((quotient, Self::normalized(value % unit, scale)))
    }

    /// The value as a `Decimal`, or `None` if it needs more than 28 decimal
    /// places or 96 bits of mantissa.
    #[must_use]
    pub fn to_decimal(self) -> Option<Decimal> {
        if self.scale > MAX_SCALE {
            return None;
        }
        Decimal::try_from_i128_with_scale(self.mantissa, self.scale).ok()
    }
}

impl From<Decimal> for ExactDecimal {
    fn from(value: Decimal) -> Self {
        Self::normalized(value.mantissa(), value.scale())
    }
}

/// Exact product of two decimals, or `None` if it cannot be represented.
#[must_use]
pub fn exact_mul(a: Decimal, b: Decimal) -> Option<Decimal> {
    ExactDecimal::from(a)
        .checked_mul(ExactDecimal::from(b))?
        .to_decimal()
}
