//! # Percentage
//!
//! Percentage calculations with configurable decimal rounding.
//!
//! A [`Percentage`](domain::Percentage) is a number divided by 100 plus a
//! [`Rounding`](domain::Rounding) strategy. The strategy is applied to the
//! result of every calculation; the stored decimal itself is never rounded.
//! Rounding is decimal, so `1.005` rounded half-up to two places is `1.01`.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | no | `Serialize`/`Deserialize` for `Percentage` as a plain `f64` |
//!
//! # Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! percentage = "0.1"
//! ```
//!
//! ## Build percentages and apply them
//!
//! ```rust
//! use percentage::prelude::*;
//!
//! // 1. Plain percentages
//! let p = Percentage::of(25);
//! assert_eq!(p.times(200), 50.0);
//! assert_eq!(p.increase(200), 250.0);
//! assert_eq!(p.decrease(200), 150.0);
//!
//! // 2. Derived from two numbers
//! assert_eq!(Percentage::ratio_of(1, 4)?, p);
//! assert_eq!(Percentage::relative_change(40, 50)?, p);
//!
//! // 3. Rounded results
//! let rounded = Percentage::of_rounding(23, Rounding::to_mode(1, RoundingMode::Floor));
//! assert_eq!(rounded.times(57), 13.1);
//!
//! // 4. Number-side operations
//! assert_eq!(5_i32.value_when(20_i32.percent())?, 25.0);
//! assert_eq!(50.0_f64 * 50_i32.percent() + 25_i32.percent(), 31.25);
//! # Ok::<(), PercentageError>(())
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Percentage`](domain::Percentage), [`Rounding`](domain::Rounding), [`RoundingMode`](domain::RoundingMode) |
//! | [`traits`] | [`PercentExt`](traits::PercentExt) and operators with a number on the left |
//! | [`math`]   | Decimal rounding of `f64` values |
//! | [`error`]  | [`PercentageError`](error::PercentageError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod domain;
pub mod error;
pub mod math;
pub mod prelude;
pub mod traits;

#[cfg(feature = "serde")]
mod serialization;
