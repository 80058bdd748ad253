//! Property-based tests using `proptest` for percentage invariants.
//!
//! Covers:
//!
//! 1. **Ratio**: `ratio_of(a, b)` stores `a / b * 100`.
//! 2. **Relative change direction**: growth is positive, decline negative.
//! 3. **Inverse**: `value_when(n)` is `n / decimal`.
//! 4. **Sign**: double negation is identity and `abs` is never negative.
//! 5. **Derivation**: `with_precision` is idempotent and keeps the value.
//! 6. **Rounding**: rounding a rounded result changes nothing.
//! 7. **Order**: `cmp` agrees with `==`.
//! 8. **Zero divisors**: every zero divisor is rejected.

use core::cmp::Ordering;

use proptest::prelude::*;

use super::{Percentage, Rounding, RoundingMode};
use crate::error::PercentageError;

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Whole numbers in [-1_000_000, 1_000_000].
fn number_strategy() -> impl Strategy<Value = i32> {
    -1_000_000i32..=1_000_000i32
}

/// Non-zero whole numbers in [-1_000_000, 1_000_000].
fn non_zero_strategy() -> impl Strategy<Value = i32> {
    number_strategy().prop_filter("non-zero", |v| *v != 0)
}

/// Percentage values with up to three fractional digits.
fn value_strategy() -> impl Strategy<Value = f64> {
    (-10_000_000i32..=10_000_000i32).prop_map(|v| f64::from(v) / 1_000.0)
}

/// Precisions in [-3, 8].
fn precision_strategy() -> impl Strategy<Value = i32> {
    -3i32..=8i32
}

fn mode_strategy() -> impl Strategy<Value = RoundingMode> {
    prop::sample::select(RoundingMode::ALL.to_vec())
}

fn rounding_strategy() -> impl Strategy<Value = Rounding> {
    prop_oneof![
        Just(Rounding::no()),
        (precision_strategy(), mode_strategy())
            .prop_map(|(precision, mode)| Rounding::to_mode(precision, mode)),
    ]
}

fn percentage_strategy() -> impl Strategy<Value = Percentage> {
    (value_strategy(), rounding_strategy())
        .prop_map(|(value, rounding)| Percentage::of_rounding(value, rounding))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // -----------------------------------------------------------------------
    // Property 1: Ratio
    // -----------------------------------------------------------------------

    #[test]
    fn prop_ratio_stores_scaled_quotient(
        number in number_strategy(),
        other in non_zero_strategy(),
    ) {
        let Ok(p) = Percentage::ratio_of(number, other) else {
            return Err(TestCaseError::fail("non-zero divisor rejected"));
        };
        let expected = f64::from(number) / f64::from(other) * 100.0;
        prop_assert_eq!(p.value().to_bits(), (expected + 0.0).to_bits());
        prop_assert_eq!(p.rounding(), Rounding::no());
    }

    // -----------------------------------------------------------------------
    // Property 2: Relative change direction
    // -----------------------------------------------------------------------

    #[test]
    fn prop_relative_change_direction(
        initial in non_zero_strategy(),
        ending in number_strategy(),
    ) {
        let Ok(p) = Percentage::relative_change(initial, ending) else {
            return Err(TestCaseError::fail("non-zero initial rejected"));
        };
        match ending.cmp(&initial) {
            Ordering::Greater => {
                prop_assert!(p.is_positive(), "{} -> {}: {}", initial, ending, p);
            }
            Ordering::Less => {
                prop_assert!(p.is_negative(), "{} -> {}: {}", initial, ending, p);
            }
            Ordering::Equal => {
                prop_assert!(p.is_zero());
            }
        }
    }

    // -----------------------------------------------------------------------
    // Property 3: Inverse
    // -----------------------------------------------------------------------

    #[test]
    fn prop_value_when_divides_by_decimal(
        p in percentage_strategy(),
        number in number_strategy(),
    ) {
        if p.is_zero() {
            prop_assert!(p.value_when(number).is_err());
        } else {
            let Ok(base) = p.value_when(number) else {
                return Err(TestCaseError::fail("non-zero percentage rejected"));
            };
            let expected = p.rounding().round(f64::from(number) / p.decimal());
            prop_assert_eq!(base.to_bits(), expected.to_bits());
        }
    }

    #[test]
    fn prop_hundred_percent_is_identity(number in number_strategy()) {
        let n = f64::from(number);
        prop_assert_eq!(Percentage::HUNDRED.times(number), n);
        prop_assert_eq!(Percentage::HUNDRED.value_when(number), Ok(n));
        prop_assert_eq!(Percentage::ZERO.increase(number), n);
        prop_assert_eq!(Percentage::ZERO.decrease(number), n);
    }

    // -----------------------------------------------------------------------
    // Property 4: Sign
    // -----------------------------------------------------------------------

    #[test]
    fn prop_double_negation_is_identity(p in percentage_strategy()) {
        prop_assert_eq!(-(-p), p);
    }

    #[test]
    fn prop_abs_is_never_negative(p in percentage_strategy()) {
        let a = p.abs();
        prop_assert!(a.is_positive_or_zero());
        prop_assert_eq!(a.rounding(), p.rounding());
        prop_assert_eq!(a.value().abs().to_bits(), p.value().abs().to_bits());
    }

    // -----------------------------------------------------------------------
    // Property 5: Derivation
    // -----------------------------------------------------------------------

    #[test]
    fn prop_with_precision_is_idempotent(
        p in percentage_strategy(),
        precision in precision_strategy(),
    ) {
        let once = p.with_precision(precision);
        prop_assert_eq!(once.with_precision(precision), once);
        prop_assert_eq!(once.rounding().precision(), Some(precision));
        prop_assert_eq!(once.value().to_bits(), p.value().to_bits());
        prop_assert_eq!(once.decimal().to_bits(), p.decimal().to_bits());
    }

    // -----------------------------------------------------------------------
    // Property 6: Rounding
    // -----------------------------------------------------------------------

    #[test]
    fn prop_rounding_is_idempotent(
        value in value_strategy(),
        precision in 0i32..=3i32,
        mode in mode_strategy(),
    ) {
        let r = Rounding::to_mode(precision, mode);
        let once = r.round(value);
        prop_assert_eq!(r.round(once), once);
    }

    // -----------------------------------------------------------------------
    // Property 7: Order
    // -----------------------------------------------------------------------

    #[test]
    fn prop_ordering_agrees_with_equality(
        a in percentage_strategy(),
        b in percentage_strategy(),
    ) {
        prop_assert_eq!(a.cmp(&b) == Ordering::Equal, a == b);
        prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
    }

    // -----------------------------------------------------------------------
    // Property 8: Zero divisors
    // -----------------------------------------------------------------------

    #[test]
    fn prop_zero_divisors_are_rejected(
        number in non_zero_strategy(),
        rounding in rounding_strategy(),
    ) {
        prop_assert_eq!(
            Percentage::ratio_of_rounding(number, 0, rounding),
            Err(PercentageError::ArgumentCannotBeZero("other"))
        );
        prop_assert_eq!(
            Percentage::relative_change_rounding(0, number, rounding),
            Err(PercentageError::ArgumentCannotBeZero("initial"))
        );
        prop_assert!(Percentage::of_rounding(0, rounding).value_when(number).is_err());
    }
}
