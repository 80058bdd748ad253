//! The percentage value type.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Mul, Neg};

use super::{Rounding, RoundingMode};
use crate::error::{PercentageError, Result, ZERO_PERCENTAGE_MESSAGE};
use crate::math::{MAX_SCALE, round_to_scale};
use crate::traits::Number;

/// Divisor turning a percentage value into its decimal.
const PERCENT: f64 = 100.0;

/// A [percentage](https://en.wikipedia.org/wiki/Percentage): a number
/// divided by 100, together with the [`Rounding`] applied to calculation
/// results.
///
/// Two numbers describe a `Percentage`:
///
/// - [`value`](Self::value): the number given by the caller (`25.0` for 25%).
/// - [`decimal`](Self::decimal): `value / 100`, used by every calculation.
///   It is never rounded.
///
/// The rounding strategy is applied to the *result* of each operation
/// ([`times`](Self::times), [`increase`](Self::increase),
/// [`decrease`](Self::decrease), [`value_when`](Self::value_when)).
///
/// `Percentage` is an immutable `Copy` value. Operations that change it
/// return a new value.
///
/// # Equality and ordering
///
/// Two percentages are equal when their decimals and their roundings are
/// equal. Ordering compares decimals first (IEEE 754 total order) and falls
/// back to [`Rounding`]'s ordering, so among equal decimals the lower
/// precision sorts first and the unrounded percentage sorts last. A negative
/// zero is stored as positive zero, so `-Percentage::of(0) ==
/// Percentage::of(0)`.
///
/// # Examples
///
/// ```
/// use percentage::domain::Percentage;
///
/// let p = Percentage::of(25);
/// assert_eq!(p.value(), 25.0);
/// assert_eq!(p.decimal(), 0.25);
///
/// assert_eq!(p.times(100), 25.0);
/// assert_eq!(p.increase(100), 125.0);
/// assert_eq!(p.decrease(100), 75.0);
/// assert_eq!(p.to_string(), "25%");
///
/// let rounded = Percentage::of_precision(23, 2);
/// assert_eq!(Percentage::of(23).times(57), 13.110000000000001);
/// assert_eq!(rounded.times(57), 13.11);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Percentage {
    value: f64,
    decimal: f64,
    rounding: Rounding,
}

impl Percentage {
    /// 0%.
    pub const ZERO: Self = Self {
        value: 0.0,
        decimal: 0.0,
        rounding: Rounding::No,
    };

    /// 100%.
    pub const HUNDRED: Self = Self {
        value: 100.0,
        decimal: 1.0,
        rounding: Rounding::No,
    };

    // -- Factories ----------------------------------------------------------

    /// Creates a `Percentage` whose calculations are not rounded.
    #[must_use]
    pub fn of(value: impl Number) -> Self {
        Self::of_rounding(value, Rounding::No)
    }

    /// Creates a `Percentage` whose calculations are rounded to `precision`
    /// fractional digits with [`RoundingMode::HalfUp`](super::RoundingMode::HalfUp).
    #[must_use]
    pub fn of_precision(value: impl Number, precision: i32) -> Self {
        Self::of_rounding(value, Rounding::to(precision))
    }

    /// Creates a `Percentage` whose calculations are rounded by `rounding`.
    #[must_use]
    pub fn of_rounding(value: impl Number, rounding: Rounding) -> Self {
        let value = positive_zero(value.into_f64());
        Self {
            value,
            decimal: positive_zero(value / PERCENT),
            rounding,
        }
    }

    /// Creates the `Percentage` that `number` is of `other`
    /// (`number / other * 100`). Calculations are not rounded.
    ///
    /// ```
    /// use percentage::domain::Percentage;
    ///
    /// assert_eq!(Percentage::ratio_of(1, 4)?, Percentage::of(25));
    /// # Ok::<(), percentage::error::PercentageError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`PercentageError::ArgumentCannotBeZero`] naming `"other"` if
    /// `other` is zero.
    pub fn ratio_of(number: impl Number, other: impl Number) -> Result<Self> {
        Self::ratio_of_rounding(number, other, Rounding::No)
    }

    /// Like [`ratio_of`](Self::ratio_of), rounding calculations to
    /// `precision` fractional digits.
    ///
    /// # Errors
    ///
    /// Returns [`PercentageError::ArgumentCannotBeZero`] naming `"other"` if
    /// `other` is zero.
    pub fn ratio_of_precision(
        number: impl Number,
        other: impl Number,
        precision: i32,
    ) -> Result<Self> {
        Self::ratio_of_rounding(number, other, Rounding::to(precision))
    }

    /// Like [`ratio_of`](Self::ratio_of), rounding calculations with
    /// `rounding`.
    ///
    /// # Errors
    ///
    /// Returns [`PercentageError::ArgumentCannotBeZero`] naming `"other"` if
    /// `other` is zero.
    pub fn ratio_of_rounding(
        number: impl Number,
        other: impl Number,
        rounding: Rounding,
    ) -> Result<Self> {
        let other = require_non_zero(other.into_f64(), "other")?;
        Ok(Self::of_rounding(number.into_f64() / other * PERCENT, rounding))
    }

    /// Creates the `Percentage` describing the
    /// [relative change](https://en.wikipedia.org/wiki/Relative_change) from
    /// `initial` to `ending`: `(ending - initial) / |initial| * 100`.
    /// Calculations are not rounded.
    ///
    /// When both numbers are zero the change is zero, not NaN.
    ///
    /// ```
    /// use percentage::domain::Percentage;
    ///
    /// assert_eq!(Percentage::relative_change(1, 4)?, Percentage::of(300));
    /// assert_eq!(Percentage::relative_change(-20, 20)?, Percentage::of(200));
    /// assert_eq!(Percentage::relative_change(0, 0)?, Percentage::of(0));
    /// assert!(Percentage::relative_change(0, 5).is_err());
    /// # Ok::<(), percentage::error::PercentageError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`PercentageError::ArgumentCannotBeZero`] naming `"initial"`
    /// if `initial` is zero and `ending` is not.
    pub fn relative_change(initial: impl Number, ending: impl Number) -> Result<Self> {
        Self::relative_change_rounding(initial, ending, Rounding::No)
    }

    /// Like [`relative_change`](Self::relative_change), rounding
    /// calculations to `precision` fractional digits.
    ///
    /// # Errors
    ///
    /// Returns [`PercentageError::ArgumentCannotBeZero`] naming `"initial"`
    /// if `initial` is zero and `ending` is not.
    pub fn relative_change_precision(
        initial: impl Number,
        ending: impl Number,
        precision: i32,
    ) -> Result<Self> {
        Self::relative_change_rounding(initial, ending, Rounding::to(precision))
    }

    /// Like [`relative_change`](Self::relative_change), rounding
    /// calculations with `rounding`.
    ///
    /// # Errors
    ///
    /// Returns [`PercentageError::ArgumentCannotBeZero`] naming `"initial"`
    /// if `initial` is zero and `ending` is not.
    pub fn relative_change_rounding(
        initial: impl Number,
        ending: impl Number,
        rounding: Rounding,
    ) -> Result<Self> {
        let (initial, ending) = (initial.into_f64(), ending.into_f64());
        if initial == 0.0 && ending == 0.0 {
            return Ok(Self::of_rounding(0.0, rounding));
        }
        let initial = require_non_zero(initial, "initial")?;
        Ok(Self::of_rounding(
            (ending - initial) / initial.abs() * PERCENT,
            rounding,
        ))
    }

    // -- Accessors ----------------------------------------------------------

    /// The percentage value as given by the caller.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// The percentage value divided by 100.
    #[must_use]
    pub const fn decimal(&self) -> f64 {
        self.decimal
    }

    /// The strategy rounding calculation results.
    #[must_use]
    pub const fn rounding(&self) -> Rounding {
        self.rounding
    }

    /// Returns `true` if the percentage is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.decimal == 0.0
    }

    /// Returns `true` if the percentage is not zero.
    #[must_use]
    pub fn is_not_zero(&self) -> bool {
        !self.is_zero()
    }

    /// Returns `true` if the percentage is greater than zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.decimal > 0.0
    }

    /// Returns `true` if the percentage is zero or greater.
    #[must_use]
    pub fn is_positive_or_zero(&self) -> bool {
        self.is_positive() || self.is_zero()
    }

    /// Returns `true` if the percentage is less than zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.decimal < 0.0
    }

    /// Returns `true` if the percentage is zero or less.
    #[must_use]
    pub fn is_negative_or_zero(&self) -> bool {
        self.is_negative() || self.is_zero()
    }

    // -- Derived percentages ------------------------------------------------

    /// Returns this percentage with calculations rounded to `precision`
    /// fractional digits, keeping the current rounding mode.
    #[must_use]
    pub fn with_precision(self, precision: i32) -> Self {
        self.with_rounding(self.rounding.with_precision(precision))
    }

    /// Returns this percentage with calculations rounded by `rounding`.
    #[must_use]
    pub fn with_rounding(self, rounding: Rounding) -> Self {
        if self.rounding == rounding {
            return self;
        }
        Self::of_rounding(self.value, rounding)
    }

    /// Returns the positive equivalent of this percentage (unary plus).
    ///
    /// Returns `self` when already positive, the negation otherwise.
    #[must_use]
    pub fn abs(self) -> Self {
        if self.is_positive() { self } else { -self }
    }

    // -- Calculations -------------------------------------------------------

    /// Returns the proportional part of `number`: `number * decimal`,
    /// rounded.
    #[must_use]
    pub fn times(&self, number: impl Number) -> f64 {
        self.round(number.into_f64() * self.decimal)
    }

    /// Increases `number` by this percentage: `number + number * decimal`,
    /// rounded.
    #[must_use]
    pub fn increase(&self, number: impl Number) -> f64 {
        let whole = number.into_f64();
        self.round(whole + whole * self.decimal)
    }

    /// Decreases `number` by this percentage: `number - number * decimal`,
    /// rounded.
    #[must_use]
    pub fn decrease(&self, number: impl Number) -> f64 {
        let whole = number.into_f64();
        self.round(whole - whole * self.decimal)
    }

    /// Returns the base value of which `number` is this percentage:
    /// `number / decimal`, rounded.
    ///
    /// Answers "5 is 20% of what?":
    ///
    /// ```
    /// use percentage::domain::Percentage;
    ///
    /// assert_eq!(Percentage::of(20).value_when(5)?, 25.0);
    /// # Ok::<(), percentage::error::PercentageError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`PercentageError::OperationUndefinedForZero`] if this
    /// percentage is zero.
    pub fn value_when(&self, number: impl Number) -> Result<f64> {
        if self.is_zero() {
            return Err(PercentageError::OperationUndefinedForZero(
                ZERO_PERCENTAGE_MESSAGE,
            ));
        }
        Ok(self.round(number.into_f64() / self.decimal))
    }

    fn round(&self, value: f64) -> f64 {
        self.rounding.round(value)
    }
}

/// Rejects an exactly-zero divisor.
fn require_non_zero(value: f64, name: &'static str) -> Result<f64> {
    if value == 0.0 {
        return Err(PercentageError::ArgumentCannotBeZero(name));
    }
    Ok(value)
}

/// Maps `-0.0` to `0.0`, leaving every other value untouched.
fn positive_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialEq for Percentage {
    fn eq(&self, other: &Self) -> bool {
        self.decimal.to_bits() == other.decimal.to_bits() && self.rounding == other.rounding
    }
}

impl Eq for Percentage {}

impl Hash for Percentage {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.decimal.to_bits().hash(state);
        self.rounding.hash(state);
    }
}

impl PartialOrd for Percentage {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Percentage {
    fn cmp(&self, other: &Self) -> Ordering {
        self.decimal
            .total_cmp(&other.decimal)
            .then_with(|| self.rounding.cmp(&other.rounding))
    }
}

impl Neg for Percentage {
    type Output = Self;

    fn neg(self) -> Self {
        Self::of_rounding(-self.value, self.rounding)
    }
}

impl<T: Number> Mul<T> for Percentage {
    type Output = f64;

    fn mul(self, number: T) -> f64 {
        self.times(number)
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = match self.rounding.display_digits() {
            Some(digits) => digits,
            None if self.value.fract() == 0.0 => 0,
            None => 2,
        };
        // Ties are decided on the decimal digits, like `Rounding::round`.
        let scale = i32::try_from(digits).unwrap_or(MAX_SCALE);
        let shown = round_to_scale(self.value, scale, RoundingMode::HalfUp);
        write!(f, "{:.*}%", digits, shown)
    }
}
