use crate::domain::journal::types::TradeRecord;
use rust_decimal::Decimal;

/// Aggregate statistics over a set of journal records.
///
/// Computed fresh from a window-filtered slice on every change; nothing is
/// cached or updated incrementally. The same shape backs the headline stat
/// cards (computed over the full list) and the report overlay (computed
/// over the selected window).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub total_count: usize,
    pub win_count: usize,
    /// Percentage of trades with positive profit, 0 for an empty set
    pub win_rate: f64,
    pub net_profit: Decimal,
    /// Percentage of trades flagged as disciplined, 0 for an empty set
    pub discipline_rate: f64,
    pub gross_win: Decimal,
    /// Gross loss as an absolute value
    pub gross_loss_abs: Decimal,
    pub average_win: Decimal,
    /// Average loss as an absolute value
    pub average_loss: Decimal,
    /// `None` means "not applicable" and renders as N/A: either the set is
    /// empty or the ratio is not representable. A set with no losing trades
    /// degenerates to the gross win, not infinity.
    pub profit_factor: Option<Decimal>,
}

impl Summary {
    pub fn compute(records: &[TradeRecord]) -> Self {
        let total_count = records.len();

        let winners: Vec<&TradeRecord> =
            records.iter().filter(|r| r.profit > Decimal::ZERO).collect();
        let losers: Vec<&TradeRecord> =
            records.iter().filter(|r| r.profit < Decimal::ZERO).collect();

        let win_count = winners.len();
        let win_rate = if total_count > 0 {
            (win_count as f64 / total_count as f64) * 100.0
        } else {
            0.0
        };

        let net_profit: Decimal = records.iter().map(|r| r.profit).sum();

        let disciplined = records.iter().filter(|r| r.was_disciplined).count();
        let discipline_rate = if total_count > 0 {
            (disciplined as f64 / total_count as f64) * 100.0
        } else {
            0.0
        };

        let gross_win: Decimal = winners.iter().map(|r| r.profit).sum();
        let gross_loss: Decimal = losers.iter().map(|r| r.profit).sum();
        let gross_loss_abs = gross_loss.abs();

        let average_win = if winners.is_empty() {
            Decimal::ZERO
        } else {
            gross_win / Decimal::from(winners.len())
        };
        let average_loss = if losers.is_empty() {
            Decimal::ZERO
        } else {
            gross_loss_abs / Decimal::from(losers.len())
        };

        let profit_factor = if total_count == 0 {
            None
        } else if gross_loss_abs.is_zero() {
            Some(gross_win)
        } else {
            gross_win.checked_div(gross_loss_abs)
        };

        Self {
            total_count,
            win_count,
            win_rate,
            net_profit,
            discipline_rate,
            gross_win,
            gross_loss_abs,
            average_win,
            average_loss,
            profit_factor,
        }
    }
}
