//! Sort key types for comparing table rows
//!
//! Raw JSON values are coerced into one key per semantic type. Coercion is
//! lossy but total: garbage never panics, it collapses to the type's empty
//! value (`""`, `0`, `false`, midnight, the Unix epoch). Null and missing
//! values take that same empty value rather than a fixed first/last slot.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use fleetdesk_model::SemanticType;
use ordered_float::OrderedFloat;
use serde_json::Value;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Text key compared in three levels, like a locale collator: base letters
/// (accents and case stripped), then accents, then case with lowercase first.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct TextKey {
    base: String,
    folded: String,
    cased: String,
    raw: String,
}

impl TextKey {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let folded = raw.to_lowercase();
        TextKey {
            base: strip_accents(&folded),
            folded,
            cased: raw.chars().map(swap_case).collect(),
            raw,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

/// Boolean key where `true` orders before `false`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlagKey(pub bool);

impl Ord for FlagKey {
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.cmp(&self.0)
    }
}

impl PartialOrd for FlagKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Comparable key for one cell. Every row of a column yields the same variant.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ColumnKey {
    Text(TextKey),
    Number(OrderedFloat<f64>),
    Flag(FlagKey),
    /// Seconds since midnight.
    Seconds(u64),
    /// Milliseconds since the Unix epoch.
    Instant(i64),
}

impl ColumnKey {
    pub fn extract(value: Option<&Value>, semantic_type: SemanticType) -> Self {
        match semantic_type {
            SemanticType::Text => ColumnKey::Text(TextKey::new(text_of(value))),
            SemanticType::Number => ColumnKey::Number(OrderedFloat(number_of(value))),
            SemanticType::Boolean => ColumnKey::Flag(FlagKey(flag_of(value))),
            SemanticType::TimeOfDay => ColumnKey::Seconds(seconds_of(value)),
            SemanticType::Date => ColumnKey::Instant(instant_of(value)),
        }
    }
}

/// NFD-decompose and drop combining marks: `"émile"` becomes `"emile"`.
fn strip_accents(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Lowercase orders before uppercase at the case level.
fn swap_case(c: char) -> char {
    if c.is_lowercase() {
        c.to_uppercase().next().unwrap_or(c)
    } else if c.is_uppercase() {
        c.to_lowercase().next().unwrap_or(c)
    } else {
        c
    }
}

/// Display text of a scalar; null, arrays and objects are empty.
pub fn text_of(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Numeric value; anything non-numeric or non-finite is `0`.
pub fn number_of(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                trimmed.parse::<f64>().ok()
            }
        }
        _ => None,
    };
    match parsed {
        Some(n) if n.is_finite() => n,
        _ => 0.0,
    }
}

/// `true`, `"Yes"` and `"true"` are truthy. Nothing else is.
pub fn flag_of(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s == "Yes" || s == "true",
        _ => false,
    }
}

/// Seconds since midnight for `HH:MM:SS` or `HH:MM`. Segments that fail to
/// parse count as `0`; non-strings are midnight.
pub fn seconds_of(value: Option<&Value>) -> u64 {
    let Some(Value::String(raw)) = value else {
        return 0;
    };
    parse_time_of_day(raw)
}

pub fn parse_time_of_day(raw: &str) -> u64 {
    let mut parts = raw.trim().split(':').map(|part| {
        part.trim().parse::<u32>().map(u64::from).unwrap_or(0)
    });
    let hours = parts.next().unwrap_or(0);
    let minutes = parts.next().unwrap_or(0);
    let seconds = parts.next().unwrap_or(0);
    hours * 3600 + minutes * 60 + seconds
}

/// Milliseconds since the epoch. Strings are parsed as ISO-8601 dates or
/// timestamps, integers are taken as epoch milliseconds, everything else is
/// the epoch itself.
pub fn instant_of(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::String(raw)) => parse_instant(raw).unwrap_or(0),
        Some(Value::Number(n)) => n.as_i64().unwrap_or(0),
        _ => 0,
    }
}

pub fn parse_instant(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.timestamp_millis());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc().timestamp_millis());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().timestamp_millis())
}
