//! Unified error types for the percentage library.
//!
//! Every fallible operation in the crate returns [`PercentageError`] as its
//! error type. Both variants describe a division that is mathematically
//! undefined; neither leaves partial results behind.

/// Message carried by [`PercentageError::OperationUndefinedForZero`] when
/// [`Percentage::value_when`](crate::domain::Percentage::value_when) runs on
/// a zero percentage.
pub(crate) const ZERO_PERCENTAGE_MESSAGE: &str =
    "This operation cannot execute when Percentage is zero";

/// Errors produced by percentage calculations.
///
/// # Examples
///
/// ```
/// use percentage::domain::Percentage;
/// use percentage::error::PercentageError;
///
/// let err = Percentage::ratio_of(1, 0).unwrap_err();
/// assert_eq!(err, PercentageError::ArgumentCannotBeZero("other"));
/// assert_eq!(err.to_string(), "The argument \"other\" cannot be zero");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum PercentageError {
    /// A divisor argument was exactly zero. Carries the argument name.
    #[error("The argument \"{0}\" cannot be zero")]
    ArgumentCannotBeZero(&'static str),

    /// The operation has no defined result for a zero percentage.
    #[error("{0}")]
    OperationUndefinedForZero(&'static str),
}

/// Convenience alias used by all fallible operations in the crate.
pub type Result<T> = core::result::Result<T, PercentageError>;
