//! Coerced field values
//!
//! Validation does not hand raw JSON back to the caller: on success every
//! field is returned in its canonical typed form (trimmed text, parsed UTC
//! date, file handles). `FieldValue` is that form, one variant per value
//! shape the rule table can produce.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Value shape expected by a field rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Bool,
    Text,
    Number,
    Date,
    TextList,
    FileList,
    Location,
}

impl ValueKind {
    /// Returns the shape name used in coercion error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            ValueKind::Bool => "boolean",
            ValueKind::Text => "text",
            ValueKind::Number => "number",
            ValueKind::Date => "date",
            ValueKind::TextList => "list of text values",
            ValueKind::FileList => "list of files",
            ValueKind::Location => "location",
        }
    }
}

/// File metadata as submitted by the renderer: display name and size in
/// bytes. File contents never pass through validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHandle {
    pub name: String,
    pub size: u64,
}

/// A (country, state) pair. State is optional; an empty state string is
/// normalized away during coercion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// A coerced submission value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Text(String),
    Number(f64),
    Date(DateTime<Utc>),
    TextList(Vec<String>),
    FileList(Vec<FileHandle>),
    Location(Location),
}

/// Coerce a raw JSON value into the kind a rule expects.
///
/// Returns the constraint-style message for the caller to report when the
/// shape does not fit. Text is trimmed when the rule's transform asks for it.
pub fn coerce(raw: &Value, kind: ValueKind, trim: bool) -> Result<FieldValue, String> {
    match kind {
        ValueKind::Bool => match raw {
            Value::Bool(b) => Ok(FieldValue::Bool(*b)),
            other => Err(shape_error(kind, other)),
        },
        ValueKind::Text => match raw {
            Value::String(s) => {
                let text = if trim { s.trim().to_string() } else { s.clone() };
                Ok(FieldValue::Text(text))
            }
            other => Err(shape_error(kind, other)),
        },
        ValueKind::Number => match raw.as_f64() {
            Some(n) => Ok(FieldValue::Number(n)),
            None => Err(shape_error(kind, raw)),
        },
        ValueKind::Date => match parse_date(raw) {
            Some(date) => Ok(FieldValue::Date(date)),
            None => Err("must be a valid date".to_string()),
        },
        ValueKind::TextList => match raw {
            Value::Array(items) => {
                let mut list = Vec::with_capacity(items.len());
                for item in items {
                    match item.as_str() {
                        Some(s) => list.push(s.to_string()),
                        None => return Err(shape_error(kind, raw)),
                    }
                }
                Ok(FieldValue::TextList(list))
            }
            other => Err(shape_error(kind, other)),
        },
        ValueKind::FileList => match raw {
            Value::Array(_) => match serde_json::from_value(raw.clone()) {
                Ok(files) => Ok(FieldValue::FileList(files)),
                Err(_) => Err(shape_error(kind, raw)),
            },
            other => Err(shape_error(kind, other)),
        },
        ValueKind::Location => coerce_location(raw),
    }
}

/// Accepts a `[country]` or `[country, state]` tuple, or an equivalent
/// `{country, state}` object.
fn coerce_location(raw: &Value) -> Result<FieldValue, String> {
    match raw {
        Value::Array(items) if (1..=2).contains(&items.len()) => {
            let country = match items[0].as_str() {
                Some(s) => s.to_string(),
                None => return Err(shape_error(ValueKind::Location, raw)),
            };
            let state = match items.get(1) {
                Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
                Some(Value::String(_)) | Some(Value::Null) | None => None,
                Some(_) => return Err(shape_error(ValueKind::Location, raw)),
            };
            Ok(FieldValue::Location(Location { country, state }))
        }
        Value::Object(_) => match serde_json::from_value::<Location>(raw.clone()) {
            Ok(mut location) => {
                if location.state.as_deref().is_some_and(|s| s.trim().is_empty()) {
                    location.state = None;
                }
                Ok(FieldValue::Location(location))
            }
            Err(_) => Err(shape_error(ValueKind::Location, raw)),
        },
        other => Err(shape_error(ValueKind::Location, other)),
    }
}

/// Parses a date from an RFC 3339 string, a `YYYY-MM-DDTHH:MM:SS` string, a
/// bare `YYYY-MM-DD` string, or an integer epoch-millisecond number. All
/// results are normalized to UTC.
fn parse_date(raw: &Value) -> Option<DateTime<Utc>> {
    match raw {
        Value::String(s) => {
            let s = s.trim();
            if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
                return Some(dt.with_timezone(&Utc));
            }
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
                return Some(Utc.from_utc_datetime(&naive));
            }
            if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
                return Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?));
            }
            None
        }
        Value::Number(n) => {
            let millis = n.as_i64()?;
            Utc.timestamp_millis_opt(millis).single()
        }
        _ => None,
    }
}

fn shape_error(kind: ValueKind, actual: &Value) -> String {
    format!("must be a {}, got {}", kind.type_name(), json_type_name(actual))
}

/// Returns the JSON type name for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
