//! Fixed-point monetary amount with 2 decimal places.
//!
//! Uses `rust_decimal` internally with scale enforcement so balances never
//! pick up floating-point drift.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

/// A monetary amount that always carries exactly 2 decimal places.
///
/// # Examples
///
/// ```
/// use atm_simulator::Money;
///
/// let amount = Money::from_cents(123_456);
/// assert_eq!(amount.to_string(), "1234.56");
/// assert_eq!(amount.to_dollar_string(), "$1,234.56");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Money(Decimal);

impl Money {
    /// The number of decimal places to maintain.
    pub const SCALE: u32 = 2;

    /// Zero value.
    pub const ZERO: Self = Money(Decimal::ZERO);

    /// Creates a new `Money` from a `Decimal`, normalizing to 2 decimal places.
    pub fn new(value: Decimal) -> Self {
        let mut normalized = value.round_dp(Self::SCALE);
        normalized.rescale(Self::SCALE);
        Money(normalized)
    }

    /// Whole-dollar amount, as offered on the withdrawal menu.
    pub fn from_dollars(dollars: u32) -> Self {
        Money::new(Decimal::from(dollars))
    }

    /// Amount entered on the keypad in cents.
    pub fn from_cents(cents: i64) -> Self {
        Money::new(Decimal::new(cents, Self::SCALE))
    }

    /// Returns `true` if this value is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns `true` if this value is below zero.
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Formats as `$X,XXX.XX`, with a leading `-` for negative amounts.
    pub fn to_dollar_string(&self) -> String {
        let plain = format!("{:.2}", self.0.abs());
        let (whole, cents) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (idx, digit) in whole.chars().enumerate() {
            if idx > 0 && (whole.len() - idx) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }

        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}${}.{}", sign, grouped, cents)
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim().parse::<Decimal>().map(Money::new)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Money::new(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Money::new(self.0 - rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

/// Accepts balances written as text, e.g. `"1000"` or `"25.50"`.
impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_normalizes_scale() {
        assert_eq!(Money::from_str("1000").unwrap().to_string(), "1000.00");
        assert_eq!(Money::from_str("1.5").unwrap().to_string(), "1.50");
        assert_eq!(Money::from_str("  2.25  ").unwrap().to_string(), "2.25");
    }

    #[test]
    fn test_from_cents_and_dollars() {
        assert_eq!(Money::from_cents(2550).to_string(), "25.50");
        assert_eq!(Money::from_cents(7).to_string(), "0.07");
        assert_eq!(Money::from_dollars(20), Money::from_str("20.00").unwrap());
    }

    #[test]
    fn test_arithmetic_preserves_scale() {
        let a = Money::from_str("1000.0").unwrap();
        let b = Money::from_dollars(20);

        assert_eq!((a - b).to_string(), "980.00");
        assert_eq!((a + b).to_string(), "1020.00");
    }

    #[test]
    fn test_assign_ops_keep_two_places() {
        let mut balance = Money::from_dollars(1000);
        balance -= Money::from_dollars(20);
        balance += Money::from_cents(5);

        assert_eq!(balance.to_string(), "980.05");
        assert_eq!(balance, Money::from_cents(98005));
    }

    #[test]
    fn test_dollar_string_groups_thousands() {
        assert_eq!(Money::ZERO.to_dollar_string(), "$0.00");
        assert_eq!(Money::from_dollars(20).to_dollar_string(), "$20.00");
        assert_eq!(Money::from_dollars(200).to_dollar_string(), "$200.00");
        assert_eq!(Money::from_dollars(1200).to_dollar_string(), "$1,200.00");
        assert_eq!(
            Money::from_cents(123_456_789).to_dollar_string(),
            "$1,234,567.89"
        );
        assert_eq!(Money::from_cents(-150_000).to_dollar_string(), "-$1,500.00");
    }

    #[test]
    fn test_negative_detection() {
        assert!(Money::from_cents(-1).is_negative());
        assert!(!Money::ZERO.is_negative());
        assert!(Money::ZERO.is_zero());
    }
}
