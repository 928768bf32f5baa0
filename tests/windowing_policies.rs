//! The report window counts back in rolling milliseconds from now; the
//! journal table filter walks the calendar. The two disagree near period
//! boundaries, and that disagreement is load-bearing: the report answers
//! "the last seven days", the table answers "this week".

use braintrader::domain::journal::profit::recorded_at_ms;
use braintrader::domain::reporting::window::{ListFilter, ReportWindow};
use chrono::NaiveDate;

const HOUR_MS: i64 = 3_600_000;

#[test]
fn test_friday_trade_seen_on_wednesday_splits_the_policies() {
    let friday = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let wednesday = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap();
    let now_ms = recorded_at_ms(wednesday) + 12 * HOUR_MS;

    let recorded_at = recorded_at_ms(friday);

    // Five days back is inside the rolling week
    assert!(ReportWindow::Weekly.includes(recorded_at, now_ms));
    // but the calendar week restarted on Sunday the 3rd.
    assert!(!ListFilter::ThisWeek.includes(friday, wednesday));
}

#[test]
fn test_month_turn_splits_the_policies() {
    let late_february = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
    let early_march = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
    let now_ms = recorded_at_ms(early_march) + 9 * HOUR_MS;

    let recorded_at = recorded_at_ms(late_february);

    assert!(ReportWindow::Monthly.includes(recorded_at, now_ms));
    assert!(!ListFilter::ThisMonth.includes(late_february, early_march));
}

#[test]
fn test_late_evening_trade_viewed_after_midnight_splits_the_policies() {
    let yesterday = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
    let today = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap();

    // Viewed at 01:00, a trade recorded two hours earlier is within the
    // rolling day but dated yesterday.
    let now_ms = recorded_at_ms(today) + HOUR_MS;
    let recorded_at = now_ms - 2 * HOUR_MS;

    assert!(ReportWindow::Daily.includes(recorded_at, now_ms));
    assert!(!ListFilter::Today.includes(yesterday, today));
}

#[test]
fn test_the_all_selections_agree() {
    let old = NaiveDate::from_ymd_opt(2019, 6, 1).unwrap();
    let today = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap();
    let now_ms = recorded_at_ms(today);

    assert!(ReportWindow::All.includes(recorded_at_ms(old), now_ms));
    assert!(ListFilter::All.includes(old, today));
}
