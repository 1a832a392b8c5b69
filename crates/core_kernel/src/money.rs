//! Money types with precise decimal arithmetic
//!
//! This module provides a type-safe representation of monetary values
//! using rust_decimal for precise calculations without floating-point errors.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Neg, Sub};
use thiserror::Error;

/// Currency codes following ISO 4217
///
/// The product bills hostels in rupees; NPR is the default everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    NPR,
    INR,
    USD,
}

impl Currency {
    /// Returns the number of decimal places for this currency
    pub fn decimal_places(&self) -> u32 {
        2
    }

    /// Returns the currency symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::NPR => "Rs.",
            Currency::INR => "₹",
            Currency::USD => "$",
        }
    }

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::NPR => "NPR",
            Currency::INR => "INR",
            Currency::USD => "USD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Currency mismatch: cannot operate on {0} and {1}")]
    CurrencyMismatch(String, String),
}

/// A monetary amount with associated currency
///
/// Rent and payment amounts are whole rupees in practice, but the internal
/// representation keeps two decimal places so that half-month splits and
/// similar derived values stay exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates a new Money value
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self {
            amount: amount.round_dp(currency.decimal_places()),
            currency,
        }
    }

    /// Creates a rupee amount (NPR)
    pub fn rupees(amount: i64) -> Self {
        Self::new(Decimal::new(amount, 0), Currency::NPR)
    }

    /// Creates Money from an integer amount in minor units (paisa)
    pub fn from_minor(minor_units: i64, currency: Currency) -> Self {
        let divisor = Decimal::new(10_i64.pow(currency.decimal_places()), 0);
        Self::new(Decimal::new(minor_units, 0) / divisor, currency)
    }

    /// Creates a zero amount in the specified currency
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: dec!(0),
            currency,
        }
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is positive
    pub fn is_positive(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }

    /// Returns true if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Returns the absolute value
    pub fn abs(&self) -> Self {
        Self {
            amount: self.amount.abs(),
            currency: self.currency,
        }
    }

    /// Checked addition that returns an error on currency mismatch
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch(
                self.currency.to_string(),
                other.currency.to_string(),
            ));
        }
        Ok(Self::new(self.amount + other.amount, self.currency))
    }

    /// Checked subtraction that returns an error on currency mismatch
    pub fn checked_sub(&self, other: &Money) -> Result<Money, MoneyError> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch(
                self.currency.to_string(),
                other.currency.to_string(),
            ));
        }
        Ok(Self::new(self.amount - other.amount, self.currency))
    }

    /// Subtraction clamped at zero
    ///
    /// Outstanding amounts are never reported as negative: an overpaid
    /// period simply has nothing remaining.
    pub fn saturating_sub(&self, other: &Money) -> Result<Money, MoneyError> {
        let diff = self.checked_sub(other)?;
        if diff.is_negative() {
            Ok(Money::zero(self.currency))
        } else {
            Ok(diff)
        }
    }

    /// Multiplies by a scalar
    pub fn multiply(&self, factor: Decimal) -> Self {
        Self::new(self.amount * factor, self.currency)
    }

    /// Half of this amount, rounded to the currency's precision
    pub fn half(&self) -> Self {
        Self::new(self.amount / dec!(2), self.currency)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.amount.fract().is_zero() {
            write!(f, "{} {}", self.currency.symbol(), self.amount.trunc())
        } else {
            write!(f, "{} {:.2}", self.currency.symbol(), self.amount)
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.checked_add(&other)
            .expect("Currency mismatch in Money::add")
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.checked_sub(&other)
            .expect("Currency mismatch in Money::sub")
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.amount, self.currency)
    }
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        if self.currency != other.currency {
            return None;
        }
        self.amount.partial_cmp(&other.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_creation() {
        let m = Money::new(dec!(10000), Currency::NPR);
        assert_eq!(m.amount(), dec!(10000));
        assert_eq!(m.currency(), Currency::NPR);
    }

    #[test]
    fn test_money_rupees() {
        let m = Money::rupees(12500);
        assert_eq!(m.amount(), dec!(12500));
        assert_eq!(m.currency(), Currency::NPR);
    }

    #[test]
    fn test_money_from_minor() {
        let m = Money::from_minor(1000050, Currency::NPR);
        assert_eq!(m.amount(), dec!(10000.50));
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::rupees(10000);
        let b = Money::rupees(4000);

        assert_eq!((a + b).amount(), dec!(14000));
        assert_eq!((a - b).amount(), dec!(6000));
    }

    #[test]
    fn test_currency_mismatch() {
        let npr = Money::rupees(100);
        let usd = Money::new(dec!(100), Currency::USD);

        let result = npr.checked_add(&usd);
        assert!(matches!(result, Err(MoneyError::CurrencyMismatch(_, _))));
    }

    #[test]
    fn test_saturating_sub_clamps_at_zero() {
        let rent = Money::rupees(10000);
        let paid = Money::rupees(15000);

        let remaining = rent.saturating_sub(&paid).unwrap();
        assert!(remaining.is_zero());
    }

    #[test]
    fn test_saturating_sub_partial() {
        let rent = Money::rupees(10000);
        let paid = Money::rupees(4000);

        let remaining = rent.saturating_sub(&paid).unwrap();
        assert_eq!(remaining, Money::rupees(6000));
    }

    #[test]
    fn test_display_whole_rupees() {
        assert_eq!(Money::rupees(10000).to_string(), "Rs. 10000");
        assert_eq!(
            Money::new(dec!(10000.50), Currency::NPR).to_string(),
            "Rs. 10000.50"
        );
    }

    #[test]
    fn test_ordering_same_currency() {
        assert!(Money::rupees(500) < Money::rupees(501));
        assert!(Money::rupees(10000)
            .partial_cmp(&Money::new(dec!(1), Currency::USD))
            .is_none());
    }
}
