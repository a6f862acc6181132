//! Custom Test Assertions
//!
//! Assertion helpers for decimal query results that check the rendered
//! number of decimal places as well as the value.

use rust_decimal::Decimal;

/// Asserts value equality and that `actual` carries exactly `dp` places
///
/// # Panics
///
/// Panics if the values differ or the scale is not `dp`
pub fn assert_rounded_eq(actual: Decimal, expected: Decimal, dp: u32) {
    assert_eq!(
        actual, expected,
        "Rounded values differ: actual={}, expected={}",
        actual, expected
    );
    assert_eq!(
        actual.scale(),
        dp,
        "Expected {} decimal places, got {} ({})",
        dp,
        actual.scale(),
        actual
    );
}

/// Asserts a money result: two decimal places
pub fn assert_cents_eq(actual: Decimal, expected: Decimal) {
    assert_rounded_eq(actual, expected, 2);
}

/// Asserts an optional money result is present and equal
pub fn assert_some_cents(actual: Option<Decimal>, expected: Decimal) {
    match actual {
        Some(value) => assert_cents_eq(value, expected),
        None => panic!("Expected {}, got None", expected),
    }
}
