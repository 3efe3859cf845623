use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds half away from zero to `dp` decimal places.
///
/// Format the result, never the raw value: `{:.N}` on a `Decimal` truncates.
pub fn round_to(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a monetary amount to cents.
///
/// Applied once per aggregate, after summation, never per trade.
pub fn round_cents(value: Decimal) -> Decimal {
    round_to(value, 2)
}

/// Rounds a percentage to a whole number, as shown on breakdown tables.
pub fn round_whole(value: Decimal) -> Decimal {
    round_to(value, 0)
}

/// `part / whole * 100`, or zero when `whole` is zero.
pub fn percentage(part: usize, whole: usize) -> Decimal {
    if whole == 0 {
        return Decimal::ZERO;
    }
    Decimal::from(part) / Decimal::from(whole) * Decimal::ONE_HUNDRED
}

/// `numerator / count`, or zero when `count` is zero.
pub fn mean(numerator: Decimal, count: usize) -> Decimal {
    if count == 0 {
        return Decimal::ZERO;
    }
    numerator / Decimal::from(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn rounds_to_any_precision() {
        assert_eq!(round_to(dec!(66.666), 1), dec!(66.7));
        assert_eq!(round_to(dec!(-0.25), 1), dec!(-0.3));
        assert_eq!(format!("{:.1}", round_to(dec!(66.65), 1)), "66.7");
    }

    #[test]
    fn rounds_half_cents_away_from_zero() {
        assert_eq!(round_cents(dec!(10.005)), dec!(10.01));
        assert_eq!(round_cents(dec!(-10.005)), dec!(-10.01));
        assert_eq!(round_cents(dec!(10.004)), dec!(10.00));
    }

    #[test]
    fn division_helpers_fall_back_to_zero() {
        assert_eq!(percentage(3, 0), Decimal::ZERO);
        assert_eq!(mean(dec!(42), 0), Decimal::ZERO);
        assert_eq!(percentage(1, 4), dec!(25));
        assert_eq!(round_whole(percentage(2, 3)), dec!(67));
    }
}
