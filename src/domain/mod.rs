//! Percentage value types.
//!
//! [`Percentage`] is the main type. [`Rounding`] and [`RoundingMode`]
//! describe how its calculation results are rounded.

mod percentage;
mod rounding;
mod rounding_mode;

#[cfg(test)]
mod proptest_properties;

pub use percentage::Percentage;
pub use rounding::Rounding;
pub use rounding_mode::RoundingMode;
