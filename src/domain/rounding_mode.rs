//! Decimal rounding policies.

use core::fmt;

use rust_decimal::RoundingStrategy;

/// Policy deciding how a discarded fraction affects the kept digits.
///
/// The seven variants are the standard decimal rounding modes. The default
/// is [`RoundingMode::HalfUp`], the "school" rounding most people expect.
///
/// | Mode | 5.5 | 2.5 | 1.6 | 1.1 | -1.1 | -1.6 | -2.5 | -5.5 |
/// |------|-----|-----|-----|-----|------|------|------|------|
/// | `Up` | 6 | 3 | 2 | 2 | -2 | -2 | -3 | -6 |
/// | `Down` | 5 | 2 | 1 | 1 | -1 | -1 | -2 | -5 |
/// | `Ceiling` | 6 | 3 | 2 | 2 | -1 | -1 | -2 | -5 |
/// | `Floor` | 5 | 2 | 1 | 1 | -2 | -2 | -3 | -6 |
/// | `HalfUp` | 6 | 3 | 2 | 1 | -1 | -2 | -3 | -6 |
/// | `HalfDown` | 5 | 2 | 2 | 1 | -1 | -2 | -2 | -5 |
/// | `HalfEven` | 6 | 2 | 2 | 1 | -1 | -2 | -2 | -6 |
///
/// # Examples
///
/// ```
/// use percentage::domain::RoundingMode;
///
/// let m = RoundingMode::default();
/// assert_eq!(m, RoundingMode::HalfUp);
/// assert!(m.is_midpoint());
/// assert_eq!(m.to_string(), "HALF_UP");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RoundingMode {
    /// Round towards positive infinity.
    Ceiling,
    /// Round away from zero.
    Up,
    /// Round towards zero (truncate).
    Down,
    /// Round towards negative infinity.
    Floor,
    /// Round to nearest; ties away from zero.
    #[default]
    HalfUp,
    /// Round to nearest; ties towards zero.
    HalfDown,
    /// Round to nearest; ties to the even neighbour (banker's rounding).
    HalfEven,
}

impl RoundingMode {
    /// All modes, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Ceiling,
        Self::Up,
        Self::Down,
        Self::Floor,
        Self::HalfUp,
        Self::HalfDown,
        Self::HalfEven,
    ];

    /// Returns `true` for the three round-to-nearest modes.
    #[must_use]
    pub const fn is_midpoint(&self) -> bool {
        matches!(self, Self::HalfUp | Self::HalfDown | Self::HalfEven)
    }

    /// Returns `true` for the modes that are a pure direction
    /// (`Ceiling`, `Up`, `Down`, `Floor`).
    #[must_use]
    pub const fn is_directed(&self) -> bool {
        !self.is_midpoint()
    }

    /// Returns a human-readable description of the mode.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Ceiling => "round towards positive infinity",
            Self::Up => "round away from zero",
            Self::Down => "round towards zero",
            Self::Floor => "round towards negative infinity",
            Self::HalfUp => "round to nearest, ties away from zero",
            Self::HalfDown => "round to nearest, ties towards zero",
            Self::HalfEven => "round to nearest, ties to even",
        }
    }

    /// Maps the mode onto the decimal backend's strategy.
    pub(crate) const fn strategy(self) -> RoundingStrategy {
        match self {
            Self::Ceiling => RoundingStrategy::ToPositiveInfinity,
            Self::Up => RoundingStrategy::AwayFromZero,
            Self::Down => RoundingStrategy::ToZero,
            Self::Floor => RoundingStrategy::ToNegativeInfinity,
            Self::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            Self::HalfDown => RoundingStrategy::MidpointTowardZero,
            Self::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ceiling => "CEILING",
            Self::Up => "UP",
            Self::Down => "DOWN",
            Self::Floor => "FLOOR",
            Self::HalfUp => "HALF_UP",
            Self::HalfDown => "HALF_DOWN",
            Self::HalfEven => "HALF_EVEN",
        };
        f.pad(name)
    }
}
