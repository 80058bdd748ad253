//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use percentage::prelude::*;
//!
//! assert_eq!(10_i32.percent(), Percentage::of(10));
//! ```

pub use crate::domain::{Percentage, Rounding, RoundingMode};
pub use crate::error::{PercentageError, Result};
pub use crate::traits::{Number, PercentExt};
