//! Money type for expense amounts
//!
//! Amounts are stored as integer hundredths (i64) so every recorded expense
//! carries exactly two decimal places. Shares and balances are derived from
//! these as `f64` and are never stored back.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// A monetary amount stored as hundredths of the currency unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from hundredths
    ///
    /// # Examples
    /// ```
    /// use ether_split::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in hundredths
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whole units (truncated toward zero)
    pub const fn whole(&self) -> i64 {
        self.0 / 100
    }

    /// Fractional hundredths (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// The amount as a float, for share and balance arithmetic
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Equal share of this amount among `parts` people, unrounded
    ///
    /// Returns zero when `parts` is zero.
    pub fn share(&self, parts: usize) -> f64 {
        if parts == 0 {
            return 0.0;
        }
        self.as_f64() / parts as f64
    }

    /// Parse an amount from user input
    ///
    /// Accepts "10", "10.5", "10.50", ".5" and a leading sign. Digits past
    /// the second decimal place round half away from zero, so "1.005"
    /// becomes 1.01.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(trimmed.to_string());

        let (negative, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let (whole_str, frac_str) = match body.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (body, ""),
        };

        if whole_str.is_empty() && frac_str.is_empty() {
            return Err(invalid());
        }
        if !whole_str.chars().all(|c| c.is_ascii_digit())
            || !frac_str.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        let whole: i64 = if whole_str.is_empty() {
            0
        } else {
            whole_str
                .parse()
                .map_err(|_| MoneyParseError::OutOfRange(trimmed.to_string()))?
        };

        let digits: Vec<i64> = frac_str
            .bytes()
            .map(|b| i64::from(b - b'0'))
            .collect();
        let tenths = digits.first().copied().unwrap_or(0);
        let hundredths = digits.get(1).copied().unwrap_or(0);
        let round_up = digits.get(2).is_some_and(|d| *d >= 5);

        let cents = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(tenths * 10 + hundredths + i64::from(round_up)))
            .ok_or_else(|| MoneyParseError::OutOfRange(trimmed.to_string()))?;

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Add two amounts, returning `None` on overflow
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }

    /// Format with a trailing currency label, e.g. "10.00 ETH"
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if symbol.is_empty() {
            self.to_string()
        } else {
            format!("{} {}", self, symbol)
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.whole().abs(), self.cents_part())
    }
}

/// Saturates at the i64 bounds; use `checked_add` where overflow must be caught
impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid amount: '{}'", s),
            MoneyParseError::OutOfRange(s) => write!(f, "Amount out of range: '{}'", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.whole(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1050).to_string(), "10.50");
        assert_eq!(Money::from_cents(0).to_string(), "0.00");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::from_cents(-1050).to_string(), "-10.50");
        assert_eq!(Money::from_cents(-5).to_string(), "-0.05");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_cents(900).format_with_symbol("ETH"), "9.00 ETH");
        assert_eq!(Money::from_cents(900).format_with_symbol(""), "9.00");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse(".5").unwrap().cents(), 50);
        assert_eq!(Money::parse("7.").unwrap().cents(), 700);
        assert_eq!(Money::parse(" +3.25 ").unwrap().cents(), 325);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
    }

    #[test]
    fn test_parse_rounds_to_two_places() {
        assert_eq!(Money::parse("1.005").unwrap().cents(), 101);
        assert_eq!(Money::parse("1.004").unwrap().cents(), 100);
        assert_eq!(Money::parse("2.999").unwrap().cents(), 300);
        assert_eq!(Money::parse("0.001").unwrap().cents(), 0);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse(".").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("1e5").is_err());
        assert!(matches!(
            Money::parse("99999999999999999999"),
            Err(MoneyParseError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_share() {
        let m = Money::from_cents(1000);
        assert!((m.share(3) - 10.0 / 3.0).abs() < 1e-12);
        assert_eq!(m.share(0), 0.0);
    }

    #[test]
    fn test_sum() {
        let total: Money = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ]
        .into_iter()
        .sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_checked_add() {
        let big = Money::from_cents(i64::MAX - 10);
        assert_eq!(
            big.checked_add(Money::from_cents(10)),
            Some(Money::from_cents(i64::MAX))
        );
        assert_eq!(big.checked_add(Money::from_cents(11)), None);
        assert_eq!((big + Money::from_cents(100)).cents(), i64::MAX);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");
    }
}
