//! Percentage operations with a number as the receiver.
//!
//! [`PercentExt`] lets numeric primitives build percentages and apply them
//! from the number's side. Every method delegates to the matching
//! [`Percentage`] operation.
//!
//! The same module implements the arithmetic operators with a number on the
//! left-hand side:
//!
//! | Expression | Equivalent |
//! |------------|------------|
//! | `n * p` | [`p.times(n)`](Percentage::times) |
//! | `n + p` | [`p.increase(n)`](Percentage::increase) |
//! | `n - p` | [`p.decrease(n)`](Percentage::decrease) |
//!
//! ```
//! use percentage::traits::PercentExt;
//!
//! let fifty = 50_i32.percent();
//! assert_eq!(100.0_f64 * fifty, 50.0);
//! assert_eq!(100.0_f64 + fifty, 150.0);
//! assert_eq!(100.0_f64 - fifty, 50.0);
//!
//! // 50 * 50% + 25%
//! assert_eq!(50.0_f64 * fifty + 25_i32.percent(), 31.25);
//! ```

use core::ops::{Add, Mul, Sub};

use crate::domain::{Percentage, Rounding};
use super::Number;
use crate::error::Result;

/// Percentage operations for numeric primitives.
///
/// Implemented for every [`Number`]: the primitive integers up to 64 bits,
/// `f32` and `f64`.
///
/// Integer literals need a type suffix (`50_i32.percent()`) because the
/// trait is implemented for several integer types.
///
/// # Examples
///
/// ```
/// use percentage::domain::Percentage;
/// use percentage::traits::PercentExt;
///
/// assert_eq!(25_i32.percent(), Percentage::of(25));
/// assert_eq!(1_i32.ratio_of(4)?, Percentage::of(25));
/// assert_eq!(1_i32.relative_change(4)?, Percentage::of(300));
/// assert_eq!(5_i32.value_when(20_i32.percent())?, 25.0);
/// # Ok::<(), percentage::error::PercentageError>(())
/// ```
pub trait PercentExt: Number {
    /// Creates a [`Percentage`] of this number. Calculations are not rounded.
    #[must_use]
    fn percent(self) -> Percentage {
        Percentage::of(self)
    }

    /// Creates a [`Percentage`] of this number rounding calculations to
    /// `precision` fractional digits.
    #[must_use]
    fn percent_with_precision(self, precision: i32) -> Percentage {
        Percentage::of_precision(self, precision)
    }

    /// Creates a [`Percentage`] of this number rounding calculations with
    /// `rounding`.
    #[must_use]
    fn percent_with_rounding(self, rounding: Rounding) -> Percentage {
        Percentage::of_rounding(self, rounding)
    }

    /// The percentage this number is of `other`.
    ///
    /// # Errors
    ///
    /// See [`Percentage::ratio_of`].
    fn ratio_of(self, other: impl Number) -> Result<Percentage> {
        Percentage::ratio_of(self, other)
    }

    /// Like [`ratio_of`](Self::ratio_of) with a precision.
    ///
    /// # Errors
    ///
    /// See [`Percentage::ratio_of`].
    fn ratio_of_with_precision(self, other: impl Number, precision: i32) -> Result<Percentage> {
        Percentage::ratio_of_precision(self, other, precision)
    }

    /// Like [`ratio_of`](Self::ratio_of) with a rounding strategy.
    ///
    /// # Errors
    ///
    /// See [`Percentage::ratio_of`].
    fn ratio_of_with_rounding(
        self,
        other: impl Number,
        rounding: Rounding,
    ) -> Result<Percentage> {
        Percentage::ratio_of_rounding(self, other, rounding)
    }

    /// The relative change from this number to `ending`.
    ///
    /// # Errors
    ///
    /// See [`Percentage::relative_change`].
    fn relative_change(self, ending: impl Number) -> Result<Percentage> {
        Percentage::relative_change(self, ending)
    }

    /// Like [`relative_change`](Self::relative_change) with a precision.
    ///
    /// # Errors
    ///
    /// See [`Percentage::relative_change`].
    fn relative_change_with_precision(
        self,
        ending: impl Number,
        precision: i32,
    ) -> Result<Percentage> {
        Percentage::relative_change_precision(self, ending, precision)
    }

    /// Like [`relative_change`](Self::relative_change) with a rounding
    /// strategy.
    ///
    /// # Errors
    ///
    /// See [`Percentage::relative_change`].
    fn relative_change_with_rounding(
        self,
        ending: impl Number,
        rounding: Rounding,
    ) -> Result<Percentage> {
        Percentage::relative_change_rounding(self, ending, rounding)
    }

    /// The base value of which this number is `percentage`.
    ///
    /// # Errors
    ///
    /// See [`Percentage::value_when`].
    fn value_when(self, percentage: Percentage) -> Result<f64> {
        percentage.value_when(self)
    }

    /// This number increased by `percentage`.
    #[must_use]
    fn increased_by(self, percentage: Percentage) -> f64 {
        percentage.increase(self)
    }

    /// This number decreased by `percentage`.
    #[must_use]
    fn decreased_by(self, percentage: Percentage) -> f64 {
        percentage.decrease(self)
    }
}

macro_rules! impl_number_operators {
    ($($t:ty),* $(,)?) => {
        $(
            impl Mul<Percentage> for $t {
                type Output = f64;

                fn mul(self, percentage: Percentage) -> f64 {
                    percentage.times(self)
                }
            }

            impl Add<Percentage> for $t {
                type Output = f64;

                fn add(self, percentage: Percentage) -> f64 {
                    percentage.increase(self)
                }
            }

            impl Sub<Percentage> for $t {
                type Output = f64;

                fn sub(self, percentage: Percentage) -> f64 {
                    percentage.decrease(self)
                }
            }
        )*
    };
}

impl<T: Number> PercentExt for T {}

impl_number_operators!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
