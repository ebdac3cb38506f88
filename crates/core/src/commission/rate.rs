//! Validated commission percentage and gross/commission math.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use cartera_shared::types::Money;

use crate::commission::error::CommissionError;

/// A commission percentage in `[0, 100)`.
///
/// The gross amount debited for a withdrawal paying out `net` is
/// `net / (1 - rate/100)`; the platform keeps `gross - net`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct CommissionRate(Decimal);

impl CommissionRate {
    /// Creates a validated commission rate from a percentage.
    ///
    /// # Errors
    ///
    /// Returns `CommissionError::InvalidRate` if the percentage is negative
    /// or is 100 or more.
    pub fn new(percent: Decimal) -> Result<Self, CommissionError> {
        if percent < Decimal::ZERO || percent >= Decimal::ONE_HUNDRED {
            return Err(CommissionError::InvalidRate(percent));
        }
        Ok(Self(percent))
    }

    /// Returns the rate as a percentage.
    #[must_use]
    pub const fn percent(self) -> Decimal {
        self.0
    }

    /// Returns the rate as a fraction in `[0, 1)`.
    #[must_use]
    pub fn fraction(self) -> Decimal {
        self.0 / Decimal::ONE_HUNDRED
    }

    /// Computes the gross amount to debit so that `net` is paid out.
    ///
    /// `gross = net / (1 - rate/100)`, rounded to 2 decimal places.
    #[must_use]
    pub fn gross_for_net(self, net: Decimal) -> Decimal {
        Money::new(net / (Decimal::ONE - self.fraction()))
            .rounded()
            .amount()
    }

    /// Computes the commission retained when `net` is paid out.
    ///
    /// Always `gross_for_net(net) - net` so that the two figures sum exactly.
    #[must_use]
    pub fn commission_for_net(self, net: Decimal) -> Decimal {
        self.gross_for_net(net) - net
    }
}

impl TryFrom<Decimal> for CommissionRate {
    type Error = CommissionError;

    fn try_from(percent: Decimal) -> Result<Self, Self::Error> {
        Self::new(percent)
    }
}

impl From<CommissionRate> for Decimal {
    fn from(rate: CommissionRate) -> Self {
        rate.percent()
    }
}

impl std::fmt::Display for CommissionRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_rate_accepts_valid_range() {
        assert!(CommissionRate::new(dec!(0)).is_ok());
        assert!(CommissionRate::new(dec!(10)).is_ok());
        assert!(CommissionRate::new(dec!(99.99)).is_ok());
    }

    #[test]
    fn test_rate_rejects_out_of_range() {
        assert_eq!(
            CommissionRate::new(dec!(-1)),
            Err(CommissionError::InvalidRate(dec!(-1)))
        );
        assert_eq!(
            CommissionRate::new(dec!(100)),
            Err(CommissionError::InvalidRate(dec!(100)))
        );
        assert_eq!(
            CommissionRate::new(dec!(150)),
            Err(CommissionError::InvalidRate(dec!(150)))
        );
    }

    #[test]
    fn test_gross_at_ten_percent() {
        // net $90 at 10% -> gross $100, commission $10
        let rate = CommissionRate::new(dec!(10)).unwrap();
        assert_eq!(rate.gross_for_net(dec!(90)), dec!(100.00));
        assert_eq!(rate.commission_for_net(dec!(90)), dec!(10.00));
    }

    #[test]
    fn test_gross_at_twenty_percent() {
        // net $90 at 20% -> gross $112.50, commission $22.50
        let rate = CommissionRate::new(dec!(20)).unwrap();
        assert_eq!(rate.gross_for_net(dec!(90)), dec!(112.50));
        assert_eq!(rate.commission_for_net(dec!(90)), dec!(22.50));
    }

    #[test]
    fn test_zero_rate_is_passthrough() {
        let rate = CommissionRate::new(dec!(0)).unwrap();
        assert_eq!(rate.gross_for_net(dec!(42.42)), dec!(42.42));
        assert_eq!(rate.commission_for_net(dec!(42.42)), dec!(0));
    }

    #[test]
    fn test_display() {
        let rate = CommissionRate::new(dec!(12.5)).unwrap();
        assert_eq!(rate.to_string(), "12.5%");
    }
}
