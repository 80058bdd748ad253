//! Primitive numbers accepted as percentage operands.

mod private {
    pub trait Sealed {}
}

/// A primitive number that percentage operations accept.
///
/// Implemented for every primitive integer up to 64 bits (including
/// `isize`/`usize`), `f32` and `f64`. The trait is sealed: it cannot be
/// implemented outside this crate.
///
/// Integers up to 32 bits and `f32` convert to `f64` exactly. 64-bit and
/// pointer-sized integers round to the nearest `f64` above `2^53`.
///
/// # Examples
///
/// ```
/// use percentage::domain::Percentage;
///
/// let items: usize = 40;
/// let done: u64 = 10;
/// assert_eq!(Percentage::ratio_of(done, items)?, Percentage::of(25));
/// assert_eq!(Percentage::of(25).times(-8_i64), -2.0);
/// # Ok::<(), percentage::error::PercentageError>(())
/// ```
pub trait Number: private::Sealed + Copy {
    /// Converts the number to `f64`.
    fn into_f64(self) -> f64;
}

macro_rules! impl_number_exact {
    ($($t:ty),* $(,)?) => {
        $(
            impl private::Sealed for $t {}

            impl Number for $t {
                #[inline]
                fn into_f64(self) -> f64 {
                    f64::from(self)
                }
            }
        )*
    };
}

macro_rules! impl_number_nearest {
    ($($t:ty),* $(,)?) => {
        $(
            impl private::Sealed for $t {}

            impl Number for $t {
                #[inline]
                #[allow(clippy::cast_precision_loss)]
                fn into_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_number_exact!(i8, i16, i32, u8, u16, u32, f32, f64);
impl_number_nearest!(i64, u64, isize, usize);
