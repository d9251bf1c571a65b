//! Textual form and ordering of loosely typed metadata values

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;
use std::cmp::Ordering;

/// Natural textual representation used by search, width measurement and cells.
///
/// Numbers print in decimal (integral floats without a fraction), booleans as
/// `true`/`false`, strings exactly as stored, null as the empty string.
pub fn display(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(n),
        Value::String(s) => s.clone(),
        Value::Array(values) => values.iter().map(display).collect::<Vec<_>>().join(","),
        Value::Object(_) => value.to_string(),
    }
}

/// Like [`display`] for an optional value; missing reads as the empty string
pub fn display_opt(value: Option<&Value>) -> String {
    value.map(display).unwrap_or_default()
}

/// Cell text: `-` for missing or empty values
pub fn cell_text(value: Option<&Value>) -> String {
    let text = display_opt(value);
    if text.is_empty() {
        "-".to_string()
    } else {
        text
    }
}

fn format_number(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

/// Ordering of two metadata values under the same key.
///
/// Values are ranked by kind first: missing, null and `""`, then numbers,
/// then strings, then booleans, then arrays and objects. Within a kind numbers
/// compare numerically, strings lexicographically, booleans `false < true`,
/// and the rest by their [`display`] form. Ranking by kind keeps the order
/// total when one key holds numbers and strings side by side.
pub fn compare(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let (a, b) = (a.unwrap_or(&Value::Null), b.unwrap_or(&Value::Null));
    kind_rank(a).cmp(&kind_rank(b)).then_with(|| match (a, b) {
        (Value::Number(x), Value::Number(y)) => {
            let (x, y) = (x.as_f64().unwrap_or(0.0), y.as_f64().unwrap_or(0.0));
            x.total_cmp(&y)
        }
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Null, _) | (Value::String(_), _) => Ordering::Equal,
        _ => display(a).cmp(&display(b)),
    })
}

fn kind_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::String(s) if s.is_empty() => 0,
        Value::Number(_) => 1,
        Value::String(_) => 2,
        Value::Bool(_) => 3,
        Value::Array(_) | Value::Object(_) => 4,
    }
}

/// Epoch milliseconds of a backend timestamp.
///
/// Accepts RFC 3339 and the naive ISO forms the backend emits (read as UTC),
/// plus bare dates. Anything else reads as 0.
pub fn parse_timestamp(s: &str) -> i64 {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return dt.timestamp_millis();
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, fmt) {
            return ndt.and_utc().timestamp_millis();
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|ndt| ndt.and_utc().timestamp_millis())
        .unwrap_or(0)
}

/// `YYYY-MM-DD` part of a backend timestamp for list columns
pub fn format_date(s: &str) -> String {
    let millis = parse_timestamp(s);
    match DateTime::from_timestamp_millis(millis) {
        Some(dt) if millis != 0 => dt.format("%Y-%m-%d").to_string(),
        _ => s.to_string(),
    }
}
