//! Fixed-precision arithmetic for coins and quantities.
//!
//! Every economic field in the state is a [`Decimal`]. Floating point is never
//! used for balances: long-lived saves replay thousands of actions and binary
//! rounding drift would make two replays of the same log disagree.

use rust_decimal::RoundingStrategy;

pub use rust_decimal::Decimal;

/// Builds `percent / 100` without going through floating point.
///
/// `percent(75)` is `0.75`, `percent(20)` is `0.20`.
#[inline]
#[must_use]
pub const fn percent(percent: u32) -> Decimal {
    Decimal::from_parts(percent, 0, 0, false, 2)
}

/// Builds `mantissa / 10^scale`, e.g. `fixed(1875, 1)` is `187.5`.
#[inline]
#[must_use]
pub const fn fixed(mantissa: u32, scale: u32) -> Decimal {
    Decimal::from_parts(mantissa, 0, 0, false, scale)
}

/// Truncates `value` toward zero to `decimals` places.
///
/// Used when reducing a held balance so that subtraction noise below the
/// displayed precision can never leave a phantom remainder behind.
#[must_use]
pub fn set_precision(value: Decimal, decimals: u32) -> Decimal {
    value
        .round_dp_with_strategy(decimals, RoundingStrategy::ToZero)
        .normalize()
}

/// Returns true when `value` is a whole number strictly greater than zero.
#[must_use]
pub fn is_positive_integer(value: Decimal) -> bool {
    value.is_sign_positive() && !value.is_zero() && value.fract().is_zero()
}
