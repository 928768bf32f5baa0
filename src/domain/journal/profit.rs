//! Realized-profit arithmetic for journal entries.
//!
//! Profit is computed exactly once, when the entry is logged, from the
//! user-supplied prices. The result is stored on the record and never
//! recalculated afterwards.

use crate::domain::journal::types::TradeDirection;
use chrono::{NaiveDate, NaiveTime};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Units per lot. One standard contract moves 100 units per point.
pub const CONTRACT_MULTIPLIER: Decimal = dec!(100);

/// Signed realized profit for a closed trade, rounded to cents.
///
/// Long profits when the exit is above the entry, short when below. No
/// ordering constraint is placed on the prices; a negative result is a loss.
pub fn realized_profit(
    direction: TradeDirection,
    entry_price: Decimal,
    exit_price: Decimal,
    size: Decimal,
) -> Decimal {
    let per_unit = match direction {
        TradeDirection::Long => exit_price - entry_price,
        TradeDirection::Short => entry_price - exit_price,
    };

    (per_unit * size * CONTRACT_MULTIPLIER)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Epoch milliseconds for a trade date. Entries carry a date-only field, so
/// the chronological key is midnight UTC of that date.
pub fn recorded_at_ms(occurred_on: NaiveDate) -> i64 {
    occurred_on
        .and_time(NaiveTime::MIN)
        .and_utc()
        .timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_profit() {
        let profit = realized_profit(TradeDirection::Long, dec!(100), dec!(110), dec!(1.0));
        assert_eq!(profit, dec!(1000.00));
    }

    #[test]
    fn test_short_profit() {
        let profit = realized_profit(TradeDirection::Short, dec!(100), dec!(90), dec!(0.5));
        assert_eq!(profit, dec!(500.00));
    }

    #[test]
    fn test_long_loss() {
        let profit = realized_profit(TradeDirection::Long, dec!(100), dec!(90), dec!(2.0));
        assert_eq!(profit, dec!(-2000.00));
    }

    #[test]
    fn test_short_loss_mirrors_long_gain() {
        let long = realized_profit(TradeDirection::Long, dec!(1.2345), dec!(1.2395), dec!(0.1));
        let short = realized_profit(TradeDirection::Short, dec!(1.2345), dec!(1.2395), dec!(0.1));
        assert_eq!(long, -short);
    }

    #[test]
    fn test_rounds_midpoints_away_from_zero() {
        // 0.01005 * 1 * 100 = 1.005 -> 1.01, not banker's 1.00
        let profit = realized_profit(TradeDirection::Long, dec!(0), dec!(0.01005), dec!(1));
        assert_eq!(profit, dec!(1.01));

        let loss = realized_profit(TradeDirection::Short, dec!(0), dec!(0.01005), dec!(1));
        assert_eq!(loss, dec!(-1.01));
    }

    #[test]
    fn test_zero_size_yields_zero() {
        // Validation rejects this upstream; the arithmetic itself is total.
        let profit = realized_profit(TradeDirection::Long, dec!(100), dec!(110), dec!(0));
        assert_eq!(profit, dec!(0));
    }

    #[test]
    fn test_recorded_at_is_utc_midnight() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let ms = recorded_at_ms(date);
        assert_eq!(ms, 1709596800000);
        assert_eq!(ms % 86_400_000, 0);
    }

    #[test]
    fn test_recorded_at_orders_by_date() {
        let earlier = recorded_at_ms(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        let later = recorded_at_ms(NaiveDate::from_ymd_opt(2024, 3, 6).unwrap());
        assert_eq!(later - earlier, 86_400_000);
    }
}
