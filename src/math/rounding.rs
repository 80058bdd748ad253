//! Decimal rounding of binary floating-point values.
//!
//! [`round_to_scale`] is the low-level building block behind
//! [`Rounding::round`](crate::domain::Rounding::round). It never scales the
//! `f64` by a power of ten; instead the value goes through an exact decimal:
//!
//! 1. `f64` → shortest round-trip digits (what `Display` prints) → `Decimal`
//! 2. `Decimal` is rounded to `scale` fractional digits
//! 3. `Decimal` → nearest `f64`
//!
//! Step 1 is what makes `1.005` round to `1.01` under
//! [`RoundingMode::HalfUp`] even though the binary value is slightly below
//! `1.005`.
//!
//! # Examples
//!
//! ```
//! use percentage::domain::RoundingMode;
//! use percentage::math::round_to_scale;
//!
//! assert_eq!(round_to_scale(1.005, 2, RoundingMode::HalfUp), 1.01);
//! assert_eq!(round_to_scale(2.5, 0, RoundingMode::HalfEven), 2.0);
//! assert_eq!(round_to_scale(1250.0, -2, RoundingMode::HalfUp), 1300.0);
//! ```

use core::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

use crate::domain::RoundingMode;

/// Largest number of fractional digits the decimal backend represents.
pub const MAX_SCALE: i32 = 28;

/// Rounds `value` to `scale` fractional digits with the given `mode`.
///
/// A negative `scale` rounds to the left of the decimal point (`-1` rounds
/// to tens, `-2` to hundreds). `scale` is clamped to
/// `-MAX_SCALE..=MAX_SCALE`.
///
/// Values with no decimal representation are returned unchanged: NaN,
/// infinities and magnitudes beyond the decimal range (about `7.9e28`).
#[must_use]
pub fn round_to_scale(value: f64, scale: i32, mode: RoundingMode) -> f64 {
    let Some(exact) = to_decimal(value) else {
        return value;
    };

    let scale = scale.clamp(-MAX_SCALE, MAX_SCALE);
    let rounded = if scale >= 0 {
        Some(exact.round_dp_with_strategy(scale.unsigned_abs(), mode.strategy()))
    } else {
        round_left_of_point(exact, scale.unsigned_abs(), mode)
    };

    rounded.map_or(value, |d| from_decimal(d).unwrap_or(value))
}

/// Rounds to a multiple of `10^shift` by moving the point left, rounding to
/// an integer and moving it back.
fn round_left_of_point(exact: Decimal, shift: u32, mode: RoundingMode) -> Option<Decimal> {
    let factor = Decimal::from_i128_with_scale(10_i128.checked_pow(shift)?, 0);
    exact
        .checked_div(factor)?
        .round_dp_with_strategy(0, mode.strategy())
        .checked_mul(factor)
}

fn to_decimal(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    // `Display` yields the shortest digits that parse back to `value`.
    Decimal::from_str(&value.to_string())
        .ok()
        .or_else(|| Decimal::from_f64(value))
}

fn from_decimal(value: Decimal) -> Option<f64> {
    value
        .to_string()
        .parse::<f64>()
        .ok()
        .or_else(|| value.to_f64())
}
