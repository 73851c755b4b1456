//! Client-side field checks for the note entry form.
//!
//! These run before a value is written into the draft, so they are lax by
//! intent. The server re-validates everything it stores.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// A required field is present when it holds any value at all, whitespace
/// included. `None` covers both a missing field and an explicit null.
pub fn is_present(value: Option<&str>) -> bool {
    matches!(value, Some(v) if !v.is_empty())
}

/// Whether `value` reads as a finite number. Trailing garbage fails
/// ("12abc" is not numeric); surrounding whitespace is fine.
pub fn is_numeric(value: &str) -> bool {
    value.trim().parse::<f64>().map(f64::is_finite).unwrap_or(false)
}

/// Minimal email shape check: something@something.something with no
/// whitespace. Not an RFC parser.
pub fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}
