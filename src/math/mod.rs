//! Decimal rounding helpers.
//!
//! Percentages store binary `f64` values but round them as decimals. The
//! helpers here convert through [`rust_decimal::Decimal`] so that values such
//! as `1.005` round the way they read.

mod rounding;

pub use rounding::{MAX_SCALE, round_to_scale};
