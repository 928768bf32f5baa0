//! The two windowing policies of the journal.
//!
//! The report surface uses rolling lookbacks keyed on `recorded_at` against
//! "now"; the journal table uses calendar filters keyed on `occurred_on`
//! against the local date. They are different policies on different fields
//! and are kept separate on purpose: a trade logged last Friday can fall
//! inside the rolling week yet outside the calendar week. Unifying them
//! would silently change which trades users see where.

use chrono::{Datelike, Duration, NaiveDate};
use std::fmt;
use std::str::FromStr;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Rolling lookback for the report surface, inclusive of the cutoff instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportWindow {
    All,
    Daily,
    Weekly,
    #[default]
    Monthly,
    ThreeMonth,
    SixMonth,
    Year,
}

impl ReportWindow {
    /// The windows offered by the report's period selector, in row order.
    /// `All` stays reachable by token but is not part of the row.
    pub const SELECTOR: &'static [ReportWindow] = &[
        ReportWindow::Daily,
        ReportWindow::Weekly,
        ReportWindow::Monthly,
        ReportWindow::ThreeMonth,
        ReportWindow::SixMonth,
        ReportWindow::Year,
    ];

    /// Earliest `recorded_at` (epoch ms) still inside the window
    pub fn cutoff_ms(&self, now_ms: i64) -> i64 {
        match self {
            ReportWindow::All => 0,
            ReportWindow::Daily => now_ms - DAY_MS,
            ReportWindow::Weekly => now_ms - 7 * DAY_MS,
            ReportWindow::Monthly => now_ms - 30 * DAY_MS,
            ReportWindow::ThreeMonth => now_ms - 90 * DAY_MS,
            ReportWindow::SixMonth => now_ms - 180 * DAY_MS,
            ReportWindow::Year => now_ms - 365 * DAY_MS,
        }
    }

    pub fn includes(&self, recorded_at: i64, now_ms: i64) -> bool {
        recorded_at >= self.cutoff_ms(now_ms)
    }
}

impl fmt::Display for ReportWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            ReportWindow::All => "all",
            ReportWindow::Daily => "daily",
            ReportWindow::Weekly => "weekly",
            ReportWindow::Monthly => "monthly",
            ReportWindow::ThreeMonth => "3month",
            ReportWindow::SixMonth => "6month",
            ReportWindow::Year => "year",
        };
        write!(f, "{}", token)
    }
}

impl FromStr for ReportWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(ReportWindow::All),
            "daily" => Ok(ReportWindow::Daily),
            "weekly" => Ok(ReportWindow::Weekly),
            "monthly" => Ok(ReportWindow::Monthly),
            "3month" => Ok(ReportWindow::ThreeMonth),
            "6month" => Ok(ReportWindow::SixMonth),
            "year" => Ok(ReportWindow::Year),
            _ => Err(format!("Unknown report window: '{}'", s)),
        }
    }
}

/// Calendar filter for the journal table, evaluated against the local date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListFilter {
    #[default]
    All,
    Today,
    ThisWeek,
    ThisMonth,
}

impl ListFilter {
    /// The filters offered by the journal table, in row order
    pub const SELECTOR: &'static [ListFilter] = &[
        ListFilter::All,
        ListFilter::Today,
        ListFilter::ThisWeek,
        ListFilter::ThisMonth,
    ];

    /// Whether a trade dated `occurred_on` passes the filter on `today`.
    /// Weeks start on Sunday. `Today` is an open-ended lower bound, so a
    /// forward-dated entry also passes it.
    pub fn includes(&self, occurred_on: NaiveDate, today: NaiveDate) -> bool {
        match self {
            ListFilter::All => true,
            ListFilter::Today => occurred_on >= today,
            ListFilter::ThisWeek => {
                let days_since_sunday = today.weekday().num_days_from_sunday() as i64;
                occurred_on >= today - Duration::days(days_since_sunday)
            }
            ListFilter::ThisMonth => {
                occurred_on.month() == today.month() && occurred_on.year() == today.year()
            }
        }
    }
}

impl fmt::Display for ListFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            ListFilter::All => "all",
            ListFilter::Today => "today",
            ListFilter::ThisWeek => "this-week",
            ListFilter::ThisMonth => "this-month",
        };
        write!(f, "{}", token)
    }
}

impl FromStr for ListFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(ListFilter::All),
            "today" => Ok(ListFilter::Today),
            "this-week" => Ok(ListFilter::ThisWeek),
            "this-month" => Ok(ListFilter::ThisMonth),
            _ => Err(format!("Unknown list filter: '{}'", s)),
        }
    }
}
