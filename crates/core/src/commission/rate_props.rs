//! Property tests for commission math.

use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::commission::rate::CommissionRate;

/// Strategy for positive net amounts with 2 decimal places.
fn net_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64).prop_map(|n| Decimal::new(n, 2))
}

/// Strategy for valid commission percentages (two decimal places, below 100).
fn rate_strategy() -> impl Strategy<Value = CommissionRate> {
    (0i64..10_000i64).prop_map(|n| {
        CommissionRate::new(Decimal::new(n, 2)).expect("strategy stays in range")
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Gross always splits exactly into net + commission; this is the
    /// conservation property: what leaves the owner equals what the admin
    /// receives plus what is paid out.
    #[test]
    fn prop_gross_splits_into_net_plus_commission(
        rate in rate_strategy(),
        net in net_strategy(),
    ) {
        let gross = rate.gross_for_net(net);
        let commission = rate.commission_for_net(net);
        prop_assert_eq!(gross, net + commission);
    }

    /// Gross is never below net, and commission is never negative.
    #[test]
    fn prop_gross_dominates_net(rate in rate_strategy(), net in net_strategy()) {
        prop_assert!(rate.gross_for_net(net) >= net);
        prop_assert!(rate.commission_for_net(net) >= Decimal::ZERO);
    }

    /// A higher rate never produces a smaller gross for the same net.
    #[test]
    fn prop_gross_monotone_in_rate(
        net in net_strategy(),
        (low, high) in (0i64..10_000i64, 0i64..10_000i64)
            .prop_map(|(a, b)| (a.min(b), a.max(b))),
    ) {
        let low_rate = CommissionRate::new(Decimal::new(low, 2)).unwrap();
        let high_rate = CommissionRate::new(Decimal::new(high, 2)).unwrap();
        prop_assert!(high_rate.gross_for_net(net) >= low_rate.gross_for_net(net));
    }
}
