//! Credit/debit balance math.
//!
//! Invariant: a balance is never observed below zero. `apply_debit` refuses
//! any debit that would break it; the database layer enforces the same rule
//! with a conditional single-statement update.

use rust_decimal::Decimal;

use cartera_shared::types::Money;

use crate::wallet::error::WalletError;

/// Validates that a user-supplied amount is strictly positive.
///
/// Every mutation amount (credit, debit, recharge, withdrawal net, price)
/// must pass this check before anything else happens.
///
/// # Errors
///
/// Returns `WalletError::InvalidAmount` if `amount` is zero or negative.
pub fn ensure_positive_amount(amount: Decimal) -> Result<(), WalletError> {
    if !Money::new(amount).is_positive() {
        return Err(WalletError::InvalidAmount(amount));
    }
    Ok(())
}

/// Applies a credit to a balance, returning the new balance.
///
/// # Errors
///
/// Returns `WalletError::InvalidAmount` if `amount` is not positive.
pub fn apply_credit(balance: Decimal, amount: Decimal) -> Result<Decimal, WalletError> {
    ensure_positive_amount(amount)?;
    Ok(balance + amount)
}

/// Applies a debit to a balance, returning the new balance.
///
/// # Errors
///
/// Returns `WalletError::InvalidAmount` if `amount` is not positive, or
/// `WalletError::InsufficientFunds` if the balance does not cover it.
pub fn apply_debit(balance: Decimal, amount: Decimal) -> Result<Decimal, WalletError> {
    ensure_positive_amount(amount)?;
    if balance < amount {
        return Err(WalletError::InsufficientFunds {
            available: balance,
            required: amount,
        });
    }
    Ok(balance - amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_credit_increases_balance() {
        assert_eq!(apply_credit(dec!(100), dec!(25.50)).unwrap(), dec!(125.50));
    }

    #[test]
    fn test_credit_rejects_zero_amount() {
        assert_eq!(
            apply_credit(dec!(100), dec!(0)),
            Err(WalletError::InvalidAmount(dec!(0)))
        );
    }

    #[test]
    fn test_credit_rejects_negative_amount() {
        assert_eq!(
            apply_credit(dec!(100), dec!(-5)),
            Err(WalletError::InvalidAmount(dec!(-5)))
        );
    }

    #[test]
    fn test_debit_decreases_balance() {
        assert_eq!(apply_debit(dec!(100), dec!(40)).unwrap(), dec!(60));
    }

    #[test]
    fn test_debit_exact_balance_reaches_zero() {
        assert_eq!(apply_debit(dec!(100), dec!(100)).unwrap(), dec!(0));
    }

    #[test]
    fn test_debit_rejects_insufficient_funds() {
        assert_eq!(
            apply_debit(dec!(50), dec!(112.50)),
            Err(WalletError::InsufficientFunds {
                available: dec!(50),
                required: dec!(112.50),
            })
        );
    }

    #[test]
    fn test_debit_rejects_non_positive_amount() {
        assert!(matches!(
            apply_debit(dec!(50), dec!(0)),
            Err(WalletError::InvalidAmount(_))
        ));
        assert!(matches!(
            apply_debit(dec!(50), dec!(-1)),
            Err(WalletError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_insufficient_funds_message_is_user_facing() {
        let err = apply_debit(dec!(50.00), dec!(112.50)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Saldo insuficiente. Disponible: $50.00, Solicitado: $112.50"
        );
    }
}
