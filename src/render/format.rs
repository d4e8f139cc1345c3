//! Value formatting shared by the shape renderers.
//!
//! Every function here returns HTML-safe text.

use chrono::{DateTime, NaiveDateTime, Utc};
use html_escape::encode_text;
use serde_json::Value;

/// Human-readable timestamp pattern, e.g. `March 4, 2025 at 09:05 UTC`.
pub const TIMESTAMP_FORMAT: &str = "%B %-d, %Y at %H:%M UTC";

/// Group the digits of an integer with `,` every three places.
pub fn group_thousands(n: i128) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format any JSON value for display.
///
/// Integers (and floats without a fractional part) are grouped; everything
/// else falls back to its textual form, escaped.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                group_thousands(i as i128)
            } else if let Some(u) = n.as_u64() {
                group_thousands(u as i128)
            } else {
                match n.as_f64() {
                    Some(f) if f.fract() == 0.0 && f.abs() < 1e18 => group_thousands(f as i128),
                    _ => encode_text(&n.to_string()).into_owned(),
                }
            }
        }
        Value::String(s) => encode_text(s).into_owned(),
        Value::Null => "0".to_string(),
        other => encode_text(&other.to_string()).into_owned(),
    }
}

/// Format a count that defaults to zero when absent.
pub fn format_count(value: Option<&Value>) -> String {
    value.map(format_value).unwrap_or_else(|| "0".to_string())
}

/// Reformat an ISO-8601 timestamp, or return the input unchanged (escaped).
pub fn format_timestamp(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(ts) => ts.format(TIMESTAMP_FORMAT).to_string(),
        None => encode_text(raw).into_owned(),
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Escape plain text for an HTML text node.
pub fn text(raw: &str) -> String {
    encode_text(raw).into_owned()
}

/// Escape plain text for a double-quoted attribute.
pub fn attr(raw: &str) -> String {
    html_escape::encode_double_quoted_attribute(raw).into_owned()
}
