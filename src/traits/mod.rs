//! Numeric operand trait, extension trait and operator sugar.
//!
//! [`Number`] is the sealed set of primitives every percentage operation
//! accepts. [`PercentExt`] puts percentage operations on the number side of
//! an expression (`25_i32.percent()`, `100_usize.increased_by(p)`). This
//! module also implements `n * p`, `n + p` and `n - p` for the same
//! primitives.

mod number;
mod percent_ext;

pub use number::Number;
pub use percent_ext::PercentExt;
