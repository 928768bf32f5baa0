use crate::domain::journal::types::TradeRecord;
use rust_decimal::Decimal;

/// One point of the equity curve, ready for charting
#[derive(Debug, Clone, PartialEq)]
pub struct EquityPoint {
    /// Trade date formatted "Mar 5" style
    pub label: String,
    /// The trade's own profit contribution
    pub point_profit: Decimal,
    /// Running cumulative profit up to and including this trade
    pub equity: Decimal,
    pub instrument: String,
}

/// Build the cumulative equity series for an already window-filtered set.
///
/// Records are sorted ascending by `recorded_at`; the sort is stable so
/// same-day trades keep the order the store delivered them in. The series
/// is rebuilt from scratch on every call.
pub fn equity_curve(records: &[TradeRecord]) -> Vec<EquityPoint> {
    let mut ordered: Vec<&TradeRecord> = records.iter().collect();
    ordered.sort_by_key(|r| r.recorded_at);

    let mut equity = Decimal::ZERO;
    ordered
        .into_iter()
        .map(|r| {
            equity += r.profit;
            EquityPoint {
                label: r.occurred_on.format("%b %-d").to_string(),
                point_profit: r.profit,
                equity,
                instrument: r.instrument.clone(),
            }
        })
        .collect()
}
