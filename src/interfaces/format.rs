//! String formatting for money and dates on the journal surfaces.

use chrono::NaiveDate;
use rust_decimal::Decimal;

fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn split_parts(text: &str) -> (&str, &str, &str) {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (sign, int_part, frac_part),
        None => (sign, unsigned, ""),
    }
}

/// Money with thousands separators and trailing zeros dropped,
/// e.g. `1250.50` -> "1,250.5" and `1000.00` -> "1,000".
pub fn format_money(value: Decimal) -> String {
    let text = value.normalize().to_string();
    let (sign, int_part, frac_part) = split_parts(&text);

    let grouped = group_digits(int_part);
    if frac_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac_part)
    }
}

/// Ledger-column money: explicit `+` on gains, thousands separators and
/// always two decimals, e.g. "+1,250.50" / "-87.25".
pub fn format_signed_money(value: Decimal) -> String {
    let rounded = value.round_dp(2);
    let text = rounded.to_string();
    let (sign, int_part, frac_part) = split_parts(&text);

    let sign = if sign == "-" { "-" } else { "+" };
    let grouped = group_digits(int_part);
    format!("{}{}.{:0<2}", sign, grouped, frac_part)
}

/// "Friday, August 22, 2026"
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_money_groups_and_trims() {
        assert_eq!(format_money(dec!(1000.00)), "1,000");
        assert_eq!(format_money(dec!(1250.50)), "1,250.5");
        assert_eq!(format_money(dec!(-87.25)), "-87.25");
        assert_eq!(format_money(dec!(0)), "0");
        assert_eq!(format_money(dec!(1234567.89)), "1,234,567.89");
        assert_eq!(format_money(dec!(999)), "999");
    }

    #[test]
    fn test_format_signed_money_keeps_two_decimals() {
        assert_eq!(format_signed_money(dec!(1250.5)), "+1,250.50");
        assert_eq!(format_signed_money(dec!(0)), "+0.00");
        assert_eq!(format_signed_money(dec!(-87.25)), "-87.25");
        assert_eq!(format_signed_money(dec!(-1234.5)), "-1,234.50");
        assert_eq!(format_signed_money(dec!(300)), "+300.00");
    }

    #[test]
    fn test_long_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(long_date(date), "Tuesday, March 5, 2024");
    }
}
