//! Snapshot of the current platform configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::commission::error::CommissionError;
use crate::commission::rate::CommissionRate;

/// The configuration values in effect at a point in time.
///
/// Configuration history is append-only; this snapshot is what workflows
/// read when they need "the current rate". When no configuration row has
/// ever been saved the documented default applies: 10% commission,
/// conversion 1.0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionSettings {
    /// Percentage of a withdrawal's gross retained by the platform.
    pub commission_rate: CommissionRate,
    /// Display-only multiplier to the secondary currency. Never used in
    /// balance arithmetic.
    pub conversion_rate: Decimal,
    /// Support contact shown to users.
    pub support_email: String,
}

impl CommissionSettings {
    /// Builds a validated settings snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the rate is out of range or the conversion rate
    /// is not positive.
    pub fn new(
        commission_percent: Decimal,
        conversion_rate: Decimal,
        support_email: String,
    ) -> Result<Self, CommissionError> {
        if conversion_rate <= Decimal::ZERO {
            return Err(CommissionError::InvalidConversionRate(conversion_rate));
        }
        Ok(Self {
            commission_rate: CommissionRate::new(commission_percent)?,
            conversion_rate,
            support_email,
        })
    }
}

impl Default for CommissionSettings {
    /// The documented default used before any configuration is saved.
    fn default() -> Self {
        Self {
            commission_rate: CommissionRate::new(Decimal::TEN)
                .unwrap_or_else(|_| unreachable!("10 is a valid rate")),
            conversion_rate: Decimal::ONE,
            support_email: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_settings() {
        let settings = CommissionSettings::default();
        assert_eq!(settings.commission_rate.percent(), dec!(10));
        assert_eq!(settings.conversion_rate, dec!(1));
        assert!(settings.support_email.is_empty());
    }

    #[test]
    fn test_new_validates_conversion_rate() {
        assert_eq!(
            CommissionSettings::new(dec!(10), dec!(0), String::new()),
            Err(CommissionError::InvalidConversionRate(dec!(0)))
        );
        assert_eq!(
            CommissionSettings::new(dec!(10), dec!(-3.5), String::new()),
            Err(CommissionError::InvalidConversionRate(dec!(-3.5)))
        );
    }

    #[test]
    fn test_new_validates_rate() {
        assert_eq!(
            CommissionSettings::new(dec!(120), dec!(1), String::new()),
            Err(CommissionError::InvalidRate(dec!(120)))
        );
    }

    #[test]
    fn test_new_accepts_valid_values() {
        let settings =
            CommissionSettings::new(dec!(15), dec!(36.5), "soporte@example.com".into()).unwrap();
        assert_eq!(settings.commission_rate.percent(), dec!(15));
        assert_eq!(settings.conversion_rate, dec!(36.5));
        assert_eq!(settings.support_email, "soporte@example.com");
    }
}
