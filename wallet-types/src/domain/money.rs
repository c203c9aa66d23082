//! Monetary amounts in minor currency units.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An amount of money in the smallest unit of the currency (cents, paise,
/// etc.), stored as an integer to avoid floating-point precision issues.
///
/// The ledger is single-currency, so no currency tag is carried. The value is
/// signed; the service rejects non-positive amounts where the rules require it.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from a minor-unit amount.
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// Zero.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Returns the amount in minor units.
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// Returns true if the amount is strictly greater than zero.
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Two's-complement addition. Never loses the added amount, so a later
    /// `wrapping_sub` of the same value restores the original exactly.
    pub fn wrapping_add(self, other: Money) -> Money {
        Money(self.0.wrapping_add(other.0))
    }

    /// Two's-complement subtraction.
    pub fn wrapping_sub(self, other: Money) -> Money {
        Money(self.0.wrapping_sub(other.0))
    }
}

impl From<i64> for Money {
    fn from(amount: i64) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_positive() {
        assert!(Money::new(1).is_positive());
        assert!(!Money::zero().is_positive());
        assert!(!Money::new(-5).is_positive());
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::new(500);
        let b = Money::new(100);
        assert_eq!(a.wrapping_sub(b), Money::new(400));
        assert_eq!(a.wrapping_add(b), Money::new(600));
    }

    #[test]
    fn test_money_wraps_at_bounds() {
        let top = Money::new(i64::MAX - 5);
        let wrapped = top.wrapping_add(Money::new(20));
        assert_eq!(wrapped, Money::new(i64::MIN + 14));
        assert_eq!(wrapped.wrapping_sub(Money::new(20)), top);
    }

    #[test]
    fn test_money_ordering() {
        assert!(Money::new(400) < Money::new(500));
        assert!(Money::new(100) >= Money::new(100));
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(1050).to_string(), "10.50");
        assert_eq!(Money::new(7).to_string(), "0.07");
        assert_eq!(Money::new(-250).to_string(), "-2.50");
    }

    #[test]
    fn test_money_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&Money::new(10_000_00)).unwrap(), "1000000");
    }
}
