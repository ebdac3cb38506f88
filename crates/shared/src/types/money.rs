//! Money type with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.
//!
//! All wallet balances are kept in the platform base currency; secondary
//! currencies exist for display only (see `cartera-core::currency`).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monetary amount in the platform base currency.
///
/// Uses `Decimal` internally to avoid floating-point precision errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(pub Decimal);

impl Money {
    /// A zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Returns the inner decimal amount.
    #[must_use]
    pub const fn amount(self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is strictly positive.
    ///
    /// Every user-supplied amount (recharge, withdrawal net, price) must
    /// satisfy this before any wallet mutation.
    #[must_use]
    pub fn is_positive(self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Returns the amount rounded to 2 decimal places.
    #[must_use]
    pub fn rounded(self) -> Self {
        Self(self.0.round_dp(2))
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_new() {
        let money = Money::new(dec!(100.00));
        assert_eq!(money.amount(), dec!(100.00));
    }

    #[test]
    fn test_money_zero() {
        assert!(Money::ZERO.is_zero());
        assert!(!Money::ZERO.is_positive());
        assert!(!Money::ZERO.is_negative());
    }

    #[test]
    fn test_money_is_positive() {
        assert!(Money::new(dec!(0.01)).is_positive());
        assert!(!Money::new(dec!(0)).is_positive());
        assert!(!Money::new(dec!(-10)).is_positive());
    }

    #[test]
    fn test_money_is_negative() {
        assert!(Money::new(dec!(-10)).is_negative());
        assert!(!Money::new(dec!(10)).is_negative());
        assert!(!Money::new(dec!(0)).is_negative());
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(dec!(112.5)).to_string(), "$112.50");
        assert_eq!(Money::new(dec!(90)).to_string(), "$90.00");
    }

    #[test]
    fn test_money_rounded() {
        assert_eq!(Money::new(dec!(112.506)).rounded(), Money::new(dec!(112.51)));
    }
}
