//! Property tests for balance math.
//!
//! Validates the conservation and non-negativity invariants over arbitrary
//! credit/debit sequences.

use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::wallet::balance::{apply_credit, apply_debit};
use crate::wallet::error::WalletError;

/// Strategy for positive decimal amounts with 2 decimal places.
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64).prop_map(|n| Decimal::new(n, 2))
}

/// Strategy for non-negative starting balances.
fn balance_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(|n| Decimal::new(n, 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// A credit always increases the balance by exactly the amount.
    #[test]
    fn prop_credit_is_exact(balance in balance_strategy(), amount in amount_strategy()) {
        let after = apply_credit(balance, amount).unwrap();
        prop_assert_eq!(after - balance, amount);
    }

    /// A successful debit decreases the balance by exactly the amount and
    /// never leaves it negative.
    #[test]
    fn prop_debit_preserves_non_negativity(
        balance in balance_strategy(),
        amount in amount_strategy(),
    ) {
        match apply_debit(balance, amount) {
            Ok(after) => {
                prop_assert_eq!(balance - after, amount);
                prop_assert!(after >= Decimal::ZERO);
            }
            Err(WalletError::InsufficientFunds { available, required }) => {
                prop_assert_eq!(available, balance);
                prop_assert_eq!(required, amount);
                prop_assert!(balance < amount);
            }
            Err(e) => prop_assert!(false, "unexpected error: {e}"),
        }
    }

    /// Crediting then debiting the same amount restores the balance
    /// (the compensation identity used by withdrawal rollback).
    #[test]
    fn prop_credit_then_debit_round_trips(
        balance in balance_strategy(),
        amount in amount_strategy(),
    ) {
        let credited = apply_credit(balance, amount).unwrap();
        let restored = apply_debit(credited, amount).unwrap();
        prop_assert_eq!(restored, balance);
    }

    /// A sequence of mutations conserves money: final balance equals the
    /// start plus credits minus successful debits.
    #[test]
    fn prop_sequence_conserves_money(
        start in balance_strategy(),
        ops in prop::collection::vec((any::<bool>(), amount_strategy()), 0..32),
    ) {
        let mut balance = start;
        let mut credited = Decimal::ZERO;
        let mut debited = Decimal::ZERO;

        for (is_credit, amount) in ops {
            if is_credit {
                balance = apply_credit(balance, amount).unwrap();
                credited += amount;
            } else if let Ok(after) = apply_debit(balance, amount) {
                balance = after;
                debited += amount;
            }
            prop_assert!(balance >= Decimal::ZERO);
        }

        prop_assert_eq!(balance, start + credited - debited);
    }
}
