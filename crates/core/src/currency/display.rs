//! Conversion of base-currency amounts for display.

use cartera_shared::types::Money;
use rust_decimal::Decimal;

/// Converts a base-currency amount to the secondary display currency.
///
/// `conversion_rate` is the multiplier from the current commission
/// configuration. The result is rounded to 2 decimal places and is for
/// rendering only.
#[must_use]
pub fn display_amount(base: Decimal, conversion_rate: Decimal) -> Decimal {
    (base * conversion_rate).round_dp(2)
}

/// Renders a base-currency amount alongside its converted figure,
/// e.g. `"$90.00 (Bs 3285.00)"`.
#[must_use]
pub fn format_display(base: Decimal, conversion_rate: Decimal, display_symbol: &str) -> String {
    format!(
        "{} ({} {:.2})",
        Money::new(base),
        display_symbol,
        display_amount(base, conversion_rate)
    )
}

/// Renders a base-currency amount alone, e.g. `"$112.50"`.
#[must_use]
pub fn format_money(base: Decimal) -> String {
    Money::new(base).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(90), dec!(1), dec!(90.00))]
    #[case(dec!(90), dec!(36.5), dec!(3285.00))]
    #[case(dec!(10.333), dec!(3), dec!(31.00))]
    #[case(dec!(0), dec!(36.5), dec!(0))]
    fn test_display_amount(
        #[case] base: Decimal,
        #[case] rate: Decimal,
        #[case] expected: Decimal,
    ) {
        assert_eq!(display_amount(base, rate), expected);
    }

    #[test]
    fn test_format_display() {
        assert_eq!(
            format_display(dec!(90), dec!(36.5), "Bs"),
            "$90.00 (Bs 3285.00)"
        );
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(dec!(112.5)), "$112.50");
    }
}
