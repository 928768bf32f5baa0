use crate::domain::identity::Identity;
use crate::domain::ports::ReportExporter;
use crate::domain::reporting::report::Report;
use crate::domain::reporting::window::ReportWindow;
use crate::interfaces::format::{format_money, long_date};
use chrono::{Datelike, Local};
use rust_decimal::prelude::ToPrimitive;
use std::sync::Arc;
use tracing::warn;

pub const REPORT_TITLE: &str = "Performance Terminal";
pub const REPORT_TAGLINE: &str = "Analytical Intelligence Engine";
pub const DEFAULT_OWNER: &str = "Master Trader";
pub const EMPTY_REPORT_TITLE: &str = "Insufficient Data";

pub struct ReportStatBox {
    pub label: &'static str,
    pub value: String,
}

pub struct CurveRow {
    pub label: String,
    pub instrument: String,
    pub equity: String,
}

/// Prepared state for the reporting overlay. `stats` is `None` when the
/// selected window holds no trades, which switches the surface to its
/// empty state.
pub struct ReportViewModel {
    pub title: &'static str,
    pub tagline: &'static str,
    pub owner: String,
    pub dated: String,
    pub periods: &'static [ReportWindow],
    pub selected: ReportWindow,
    pub stats: Option<[ReportStatBox; 4]>,
    pub curve: Vec<CurveRow>,
    pub empty_title: &'static str,
    pub empty_hint: String,
    pub footer: String,
    report: Report,
    exporter: Option<Arc<dyn ReportExporter>>,
}

impl ReportViewModel {
    pub fn build(identity: Option<&Identity>, report: &Report) -> Self {
        Self::with_exporter(identity, report, None)
    }

    pub fn with_exporter(
        identity: Option<&Identity>,
        report: &Report,
        exporter: Option<Arc<dyn ReportExporter>>,
    ) -> Self {
        let summary = &report.summary;

        let stats = if summary.total_count == 0 {
            None
        } else {
            Some([
                ReportStatBox {
                    label: "Net Profit",
                    value: format!("${}", format_money(summary.net_profit)),
                },
                ReportStatBox {
                    label: "Win Rate",
                    value: format!("{:.1}%", summary.win_rate),
                },
                ReportStatBox {
                    label: "Profit Factor",
                    value: match summary.profit_factor {
                        Some(pf) => format!("{:.2}", pf.to_f64().unwrap_or(0.0)),
                        None => "N/A".to_string(),
                    },
                },
                ReportStatBox {
                    label: "Trades Count",
                    value: summary.total_count.to_string(),
                },
            ])
        };

        let curve = report
            .curve
            .iter()
            .map(|p| CurveRow {
                label: p.label.clone(),
                instrument: p.instrument.clone(),
                equity: format!("${}", format_money(p.equity)),
            })
            .collect();

        let today = Local::now().date_naive();
        Self {
            title: REPORT_TITLE,
            tagline: REPORT_TAGLINE,
            owner: match identity {
                Some(identity) => identity.report_name().to_string(),
                None => DEFAULT_OWNER.to_string(),
            },
            dated: long_date(today),
            periods: ReportWindow::SELECTOR,
            selected: report.window,
            stats,
            curve,
            empty_title: EMPTY_REPORT_TITLE,
            empty_hint: format!(
                "Log more trades to visualize your {} performance.",
                report.window
            ),
            footer: format!(
                "Braintrader Proprietary Analytics · © {} Braintrader Journal",
                today.year()
            ),
            report: report.clone(),
            exporter,
        }
    }

    /// Hands the underlying report to the installed exporter. Without one
    /// this does nothing.
    pub fn export(&self) {
        let Some(exporter) = &self.exporter else {
            return;
        };
        if let Err(e) = exporter.export(&self.report) {
            warn!("Report export failed: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::journal::profit::recorded_at_ms;
    use crate::domain::journal::types::{OrderKind, TradeDirection, TradeRecord};
    use chrono::{NaiveDate, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::Mutex;

    fn record(day: u32, profit: Decimal) -> TradeRecord {
        let occurred_on = NaiveDate::from_ymd_opt(2024, 3, day).unwrap();
        TradeRecord {
            id: format!("t-{}", day),
            occurred_on,
            recorded_at: recorded_at_ms(occurred_on),
            instrument: "EURUSD".to_string(),
            direction: TradeDirection::Long,
            order_kind: OrderKind::Market,
            size: dec!(0.1),
            entry_price: dec!(1.08),
            exit_price: dec!(1.09),
            stop_loss: dec!(1.07),
            take_profit: dec!(1.10),
            profit,
            strategy_label: "Breakout Retest".to_string(),
            rationale: String::new(),
            assumptions: String::new(),
            followed_rules: true,
            was_disciplined: true,
            confidence_rating: 4,
            owner_id: "u-1".to_string(),
        }
    }

    fn sample_report(window: ReportWindow, profits: &[Decimal]) -> Report {
        let records: Vec<TradeRecord> = profits
            .iter()
            .enumerate()
            .map(|(i, p)| record(1 + i as u32, *p))
            .collect();
        let now_ms = Utc::now().timestamp_millis();
        Report::build(&records, window, now_ms)
    }

    #[test]
    fn test_stat_boxes_formatting() {
        let report = sample_report(ReportWindow::All, &[dec!(300), dec!(-150), dec!(850)]);
        let vm = ReportViewModel::build(None, &report);

        let stats = vm.stats.unwrap();
        assert_eq!(stats[0].label, "Net Profit");
        assert_eq!(stats[0].value, "$1,000");
        assert_eq!(stats[1].value, "66.7%");
        assert_eq!(stats[2].label, "Profit Factor");
        assert_eq!(stats[2].value, "7.67");
        assert_eq!(stats[3].value, "3");
        assert_eq!(vm.curve.len(), 3);
        assert_eq!(vm.curve[2].equity, "$1,000");
    }

    #[test]
    fn test_all_winning_window_reports_gross_as_factor() {
        let report = sample_report(ReportWindow::All, &[dec!(300)]);
        let vm = ReportViewModel::build(None, &report);
        assert_eq!(vm.stats.unwrap()[2].value, "300.00");
    }

    #[test]
    fn test_empty_window_switches_to_empty_state() {
        let report = sample_report(ReportWindow::Monthly, &[]);
        let vm = ReportViewModel::build(None, &report);

        assert!(vm.stats.is_none());
        assert!(vm.curve.is_empty());
        assert_eq!(vm.empty_title, "Insufficient Data");
        assert_eq!(
            vm.empty_hint,
            "Log more trades to visualize your monthly performance."
        );
    }

    #[test]
    fn test_owner_falls_back_without_identity() {
        let report = sample_report(ReportWindow::All, &[]);
        assert_eq!(ReportViewModel::build(None, &report).owner, "Master Trader");

        let named = Identity {
            user_id: "u-1".to_string(),
            email: "jane@example.com".to_string(),
            display_name: Some("Jane".to_string()),
        };
        assert_eq!(ReportViewModel::build(Some(&named), &report).owner, "Jane");

        let unnamed = Identity {
            user_id: "u-2".to_string(),
            email: "anon@example.com".to_string(),
            display_name: None,
        };
        assert_eq!(
            ReportViewModel::build(Some(&unnamed), &report).owner,
            "anon@example.com"
        );
    }

    struct CountingExporter {
        calls: Mutex<usize>,
    }

    impl ReportExporter for CountingExporter {
        fn export(&self, _report: &Report) -> anyhow::Result<()> {
            *self.calls.lock().unwrap() += 1;
            Ok(())
        }
    }

    #[test]
    fn test_export_without_exporter_is_a_no_op() {
        let report = sample_report(ReportWindow::All, &[dec!(10)]);
        ReportViewModel::build(None, &report).export();

        let exporter = Arc::new(CountingExporter {
            calls: Mutex::new(0),
        });
        let vm = ReportViewModel::with_exporter(None, &report, Some(exporter.clone()));
        vm.export();
        vm.export();
        assert_eq!(*exporter.calls.lock().unwrap(), 2);
    }
}
