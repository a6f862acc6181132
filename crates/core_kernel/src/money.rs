//! Money types with precise decimal arithmetic
//!
//! Claim estimates are summed exactly using rust_decimal and rounded once,
//! at the end of a calculation, using round-half-up.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use thiserror::Error;

/// Number of decimal places used when presenting monetary results
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Rounds a decimal to `dp` places, with midpoints rounded away from zero.
///
/// For the non-negative values produced by claim aggregation this is
/// classic round-half-up: `87330.895` becomes `87330.90` and
/// `87330.894999` becomes `87330.89`.
pub fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    // Pad the scale so that 12.5 at 2 dp is rendered as 12.50
    rounded.rescale(dp);
    rounded
}

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Division by zero")]
    DivisionByZero,
}

/// A monetary amount in the portfolio currency
///
/// Amounts are kept at full precision; rounding is an explicit step so that
/// sums of many claims do not accumulate intermediate rounding error.
/// Serialized as a plain JSON number carrying every decimal digit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money {
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    amount: Decimal,
}

impl Money {
    /// Creates a new Money value
    pub fn new(amount: Decimal) -> Self {
        Self { amount }
    }

    /// Creates a zero amount
    pub fn zero() -> Self {
        Self { amount: dec!(0) }
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns true if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Rounds half-up to cents
    pub fn to_cents(&self) -> Decimal {
        round_half_up(self.amount, MONEY_DECIMAL_PLACES)
    }

    /// Divides the amount evenly across `count` items, e.g. to take a mean
    pub fn mean_over(&self, count: usize) -> Result<Self, MoneyError> {
        if count == 0 {
            return Err(MoneyError::DivisionByZero);
        }
        self.amount
            .checked_div(Decimal::from(count))
            .map(Self::new)
            .ok_or_else(|| MoneyError::InvalidAmount(format!("{} / {}", self.amount, count)))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.to_cents())
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self::new(amount)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.amount + other.amount)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.amount += other.amount;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}
