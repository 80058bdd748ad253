//! Rounding strategy applied to percentage calculation results.

use core::fmt;

use super::RoundingMode;
use crate::math::round_to_scale;

/// Decides whether and how a calculation result is rounded.
///
/// `Rounding` is a small closed set of strategies:
///
/// - [`Rounding::No`] leaves values untouched. This is the default.
/// - [`Rounding::Precise`] rounds to `precision` fractional digits with a
///   [`RoundingMode`]. A negative precision rounds to the left of the
///   decimal point.
///
/// Instances are `Copy` values; "changing" one returns a new value.
///
/// # Ordering
///
/// Every `Precise` strategy sorts before `No`: an unbounded strategy is the
/// greatest. Two `Precise` strategies compare by precision, then by mode in
/// [`RoundingMode`] declaration order. The ordering is consistent with
/// equality.
///
/// # Examples
///
/// ```
/// use percentage::domain::{Rounding, RoundingMode};
///
/// let r = Rounding::to(2);
/// assert_eq!(r.round(3.14159), 3.14);
/// assert_eq!(r.mode(), Some(RoundingMode::HalfUp));
///
/// let c = Rounding::to_mode(2, RoundingMode::Ceiling);
/// assert_eq!(c.round(3.14159), 3.15);
///
/// assert_eq!(Rounding::no().round(3.14159), 3.14159);
/// assert!(Rounding::to(8) < Rounding::no());
/// ```
///
/// # Construction
///
/// Strategies are built with [`Rounding::no`], [`Rounding::to`] and
/// [`Rounding::to_mode`]. `Precise` is non-exhaustive, so other crates can
/// match on it (with `..`) but cannot build it directly:
///
/// ```compile_fail
/// use percentage::domain::{Rounding, RoundingMode};
///
/// let r = Rounding::Precise { precision: 2, mode: RoundingMode::HalfUp };
/// ```
///
/// ```
/// use percentage::domain::Rounding;
///
/// let digits = match Rounding::to(2) {
///     Rounding::Precise { precision, .. } => precision,
///     Rounding::No => 0,
/// };
/// assert_eq!(digits, 2);
/// ```
// Variant order drives the derived `Ord`: keep `Precise` before `No`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rounding {
    /// Round to `precision` fractional digits using `mode`.
    #[non_exhaustive]
    Precise {
        /// Number of fractional digits to keep.
        precision: i32,
        /// Policy for the discarded fraction.
        mode: RoundingMode,
    },
    /// Do not round.
    #[default]
    No,
}

impl Rounding {
    /// Returns the strategy that does not round.
    #[must_use]
    pub const fn no() -> Self {
        Self::No
    }

    /// Returns a strategy rounding to `precision` fractional digits with
    /// [`RoundingMode::HalfUp`].
    #[must_use]
    pub const fn to(precision: i32) -> Self {
        Self::to_mode(precision, RoundingMode::HalfUp)
    }

    /// Returns a strategy rounding to `precision` fractional digits with the
    /// given `mode`.
    #[must_use]
    pub const fn to_mode(precision: i32, mode: RoundingMode) -> Self {
        Self::Precise { precision, mode }
    }

    /// Returns the precision, or `None` for [`Rounding::No`].
    #[must_use]
    pub const fn precision(&self) -> Option<i32> {
        match self {
            Self::Precise { precision, .. } => Some(*precision),
            Self::No => None,
        }
    }

    /// Returns the rounding mode, or `None` for [`Rounding::No`].
    #[must_use]
    pub const fn mode(&self) -> Option<RoundingMode> {
        match self {
            Self::Precise { mode, .. } => Some(*mode),
            Self::No => None,
        }
    }

    /// Returns `true` if this strategy rounds.
    #[must_use]
    pub const fn is_precise(&self) -> bool {
        matches!(self, Self::Precise { .. })
    }

    /// Returns a strategy with the given precision, keeping the current mode.
    ///
    /// Returns `self` when the precision is unchanged. [`Rounding::No`] has
    /// no mode to keep, so it becomes a [`RoundingMode::HalfUp`] strategy.
    #[must_use]
    pub const fn with_precision(self, precision: i32) -> Self {
        match self {
            Self::Precise {
                precision: current, ..
            } if current == precision => self,
            Self::Precise { mode, .. } => Self::to_mode(precision, mode),
            Self::No => Self::to(precision),
        }
    }

    /// Rounds `value` according to this strategy.
    ///
    /// Rounding goes through an exact decimal representation, see
    /// [`round_to_scale`](crate::math::round_to_scale).
    #[must_use]
    pub fn round(&self, value: f64) -> f64 {
        match *self {
            Self::Precise { precision, mode } => round_to_scale(value, precision, mode),
            Self::No => value,
        }
    }

    /// Number of fractional digits used when displaying a value under this
    /// strategy, or `None` when the strategy has no precision.
    pub(crate) fn display_digits(&self) -> Option<usize> {
        self.precision()
            .map(|p| usize::try_from(p).unwrap_or_default())
    }
}

impl fmt::Display for Rounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Precise { precision, mode } => write!(f, "precision={precision} mode={mode}"),
            Self::No => f.write_str("no rounding"),
        }
    }
}
