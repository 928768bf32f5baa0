use crate::domain::journal::types::TradeRecord;
use crate::domain::reporting::summary::Summary;
use crate::domain::reporting::window::ListFilter;
use crate::interfaces::format::{format_money, format_signed_money};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

pub const EMPTY_JOURNAL_NOTICE: &str = "No trades found in this timeframe.";
pub const MISSING_RATIONALE: &str = "No technical reasoning documented.";

pub struct StatCard {
    pub label: &'static str,
    pub value: String,
}

/// One fully formatted row of the trade journal table, review panel included.
pub struct JournalRow {
    pub instrument: String,
    pub date: String,
    pub action: String,
    pub order_kind: String,
    pub lot: String,
    pub levels: String,
    pub net_pl: String,
    pub is_winning: bool,
    pub rationale: String,
    pub assumptions: String,
    pub followed_rules: bool,
    pub was_disciplined: bool,
    pub stars: String,
    pub setup: String,
}

pub struct DashboardViewModel;

impl DashboardViewModel {
    /// The four headline cards over the unfiltered journal.
    pub fn stat_cards(summary: &Summary) -> [StatCard; 4] {
        [
            StatCard {
                label: "Win Rate",
                value: format!("{:.1}%", summary.win_rate),
            },
            StatCard {
                label: "Net Profit",
                value: format!("${}", format_money(summary.net_profit)),
            },
            StatCard {
                label: "Discipline",
                value: format!("{:.1}%", summary.discipline_rate),
            },
            StatCard {
                label: "Total Trades",
                value: summary.total_count.to_string(),
            },
        ]
    }

    /// Filter button captions, hyphens spaced out ("this-week" -> "this week").
    pub fn filter_labels() -> Vec<String> {
        ListFilter::SELECTOR
            .iter()
            .map(|f| f.to_string().replace('-', " "))
            .collect()
    }

    pub fn journal_rows(records: &[TradeRecord]) -> Vec<JournalRow> {
        records.iter().map(Self::journal_row).collect()
    }

    /// Replaces the table body when the filter leaves nothing to show.
    pub fn journal_notice(records: &[TradeRecord]) -> Option<&'static str> {
        records.is_empty().then_some(EMPTY_JOURNAL_NOTICE)
    }

    pub fn journal_row(record: &TradeRecord) -> JournalRow {
        JournalRow {
            instrument: record.instrument.clone(),
            date: record.occurred_on.to_string(),
            action: record.direction.to_string(),
            order_kind: record.order_kind.to_string(),
            lot: format!("{:.2}", record.size.to_f64().unwrap_or(0.0)),
            levels: format!(
                "${} → ${}",
                record.entry_price.normalize(),
                record.exit_price.normalize()
            ),
            net_pl: format_signed_money(record.profit),
            is_winning: record.profit >= Decimal::ZERO,
            rationale: if record.rationale.is_empty() {
                MISSING_RATIONALE.to_string()
            } else {
                record.rationale.clone()
            },
            assumptions: record.assumptions.clone(),
            followed_rules: record.followed_rules,
            was_disciplined: record.was_disciplined,
            stars: (1..=5)
                .map(|s| if s <= record.confidence_rating { '★' } else { '☆' })
                .collect(),
            setup: if record.strategy_label.is_empty() {
                "N/A".to_string()
            } else {
                record.strategy_label.clone()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::journal::profit::recorded_at_ms;
    use crate::domain::journal::types::{OrderKind, TradeDirection};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn record(profit: Decimal, disciplined: bool) -> TradeRecord {
        let occurred_on = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        TradeRecord {
            id: "t-1".to_string(),
            occurred_on,
            recorded_at: recorded_at_ms(occurred_on),
            instrument: "XAUUSD".to_string(),
            direction: TradeDirection::Short,
            order_kind: OrderKind::Limit,
            size: dec!(0.5),
            entry_price: dec!(2320.50),
            exit_price: dec!(2310.00),
            stop_loss: dec!(2328),
            take_profit: dec!(2305),
            profit,
            strategy_label: String::new(),
            rationale: String::new(),
            assumptions: "CPI print cooler than forecast".to_string(),
            followed_rules: true,
            was_disciplined: disciplined,
            confidence_rating: 3,
            owner_id: "u-1".to_string(),
        }
    }

    #[test]
    fn test_stat_cards_formatting() {
        let records = vec![record(dec!(1250.50), true), record(dec!(-250.50), false)];
        let summary = Summary::compute(&records);
        let cards = DashboardViewModel::stat_cards(&summary);

        assert_eq!(cards[0].label, "Win Rate");
        assert_eq!(cards[0].value, "50.0%");
        assert_eq!(cards[1].value, "$1,000");
        assert_eq!(cards[2].label, "Discipline");
        assert_eq!(cards[2].value, "50.0%");
        assert_eq!(cards[3].value, "2");
    }

    #[test]
    fn test_journal_row_fallbacks_and_formats() {
        let row = DashboardViewModel::journal_row(&record(dec!(525.00), true));

        assert_eq!(row.date, "2024-03-05");
        assert_eq!(row.action, "SHORT");
        assert_eq!(row.order_kind, "LIMIT");
        assert_eq!(row.lot, "0.50");
        assert_eq!(row.levels, "$2320.5 → $2310");
        assert_eq!(row.net_pl, "+525.00");
        assert!(row.is_winning);
        assert_eq!(row.rationale, MISSING_RATIONALE);
        assert_eq!(row.setup, "N/A");
        assert_eq!(row.stars, "★★★☆☆");
    }

    #[test]
    fn test_losing_row_carries_its_own_sign() {
        let row = DashboardViewModel::journal_row(&record(dec!(-1250.5), false));
        assert_eq!(row.net_pl, "-1,250.50");
        assert!(!row.is_winning);
        assert!(!row.was_disciplined);
    }

    #[test]
    fn test_filter_labels_space_out_hyphens() {
        let labels = DashboardViewModel::filter_labels();
        assert_eq!(labels, vec!["all", "today", "this week", "this month"]);
    }

    #[test]
    fn test_empty_journal_falls_back_to_notice() {
        assert_eq!(
            DashboardViewModel::journal_notice(&[]),
            Some(EMPTY_JOURNAL_NOTICE)
        );

        let populated = vec![record(dec!(10.00), true)];
        assert_eq!(DashboardViewModel::journal_notice(&populated), None);
    }
}
