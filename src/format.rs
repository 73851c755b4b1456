//! Display formatting for note values.
//!
//! Presentation follows the statement templates: comma thousands groups,
//! dot decimal separator, day-first dates, KES currency. Missing and zero
//! values render as "-" so untouched rows in a schedule stay visually
//! blank.

use chrono::NaiveDate;

/// Presentation currency code of the statement templates.
pub const CURRENCY_CODE: &str = "KES";

const BLANK: &str = "-";

/// "KES 1,234.56", or "-" when there is nothing to show (missing, zero,
/// non-finite).
pub fn format_currency(value: Option<f64>) -> String {
    match value {
        Some(v) if v != 0.0 && v.is_finite() => {
            format!("{} {}", CURRENCY_CODE, with_groups(v, 2, true))
        }
        _ => BLANK.to_string(),
    }
}

/// Grouped number with up to three decimals, trailing zeros trimmed. Blank
/// in the same cases as currency.
pub fn format_number(value: Option<f64>) -> String {
    match value {
        Some(v) if v != 0.0 && v.is_finite() => with_groups(v, 3, false),
        _ => BLANK.to_string(),
    }
}

/// Day-first date ("23/08/2026"), or "-" when absent.
pub fn format_date(value: Option<NaiveDate>) -> String {
    match value {
        Some(d) => d.format("%d/%m/%Y").to_string(),
        None => BLANK.to_string(),
    }
}

/// Render with comma thousands groups and `decimals` fraction digits.
/// `fixed` keeps trailing zeros (currency); otherwise they are trimmed.
fn with_groups(value: f64, decimals: usize, fixed: bool) -> String {
    let rounded = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match rounded.split_once('.') {
        Some((i, f)) => (i, f),
        None => (rounded.as_str(), ""),
    };

    let mut out = String::new();
    if value.is_sign_negative() {
        out.push('-');
    }
    let digits = int_part.as_bytes();
    for (idx, b) in digits.iter().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(*b as char);
    }

    let frac = if fixed {
        frac_part
    } else {
        frac_part.trim_end_matches('0')
    };
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}
