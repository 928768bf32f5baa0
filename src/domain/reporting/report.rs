use crate::domain::journal::types::TradeRecord;
use crate::domain::reporting::equity::{EquityPoint, equity_curve};
use crate::domain::reporting::summary::Summary;
use crate::domain::reporting::window::ReportWindow;

/// A windowed report: summary statistics and equity curve over one shared
/// filtered set. Filtering once keeps the two surfaces consistent; the
/// curve's final equity value is exactly the summary's net profit.
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub window: ReportWindow,
    pub summary: Summary,
    pub curve: Vec<EquityPoint>,
}

impl Report {
    pub fn build(records: &[TradeRecord], window: ReportWindow, now_ms: i64) -> Self {
        let filtered: Vec<TradeRecord> = records
            .iter()
            .filter(|r| window.includes(r.recorded_at, now_ms))
            .cloned()
            .collect();

        Self {
            window,
            summary: Summary::compute(&filtered),
            curve: equity_curve(&filtered),
        }
    }
}
