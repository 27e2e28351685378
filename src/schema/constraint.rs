//! Constraint kinds
//!
//! Every variant rule is a list of constraints drawn from one closed sum
//! type. A constraint checks a coerced value and answers with `None` (pass)
//! or its own human-readable message; the rule table in `rules` pairs each
//! constraint with a value kind it applies to, so mismatched shapes simply
//! pass here.

use regex::Regex;

use super::value::FieldValue;

/// A single validation constraint with a distinct message per failure.
#[derive(Debug, Clone)]
pub enum Constraint {
    /// Trimmed text must be non-empty.
    NonEmpty,
    /// Inclusive character-count bounds on text.
    Chars { min: Option<usize>, max: Option<usize> },
    /// Inclusive item-count bounds on list values (text lists and file lists).
    Items { min: Option<usize>, max: Option<usize> },
    /// Per-item character cap on a text list.
    ItemChars { max: usize },
    /// Inclusive numeric range.
    Range { min: f64, max: f64 },
    /// Numeric step alignment anchored at `origin`.
    Step { step: f64, origin: f64 },
    /// Regex the whole text must match.
    Pattern { regex: Regex, message: &'static str },
    /// Membership in a fixed choice set.
    OneOf { choices: &'static [&'static str] },
    /// Text must contain at least one character of the class.
    CharClass {
        test: fn(char) -> bool,
        message: &'static str,
    },
    /// Text prefix requirement.
    Prefix {
        prefix: &'static str,
        message: &'static str,
    },
    /// Per-file size cap, in bytes.
    FileSize { max_bytes: u64 },
    /// Location country must be non-empty.
    CountryRequired,
}

impl Constraint {
    /// Check a coerced value. `None` means the constraint holds.
    pub fn check(&self, value: &FieldValue) -> Option<String> {
        match (self, value) {
            (Constraint::NonEmpty, FieldValue::Text(s)) => s
                .trim()
                .is_empty()
                .then(|| "must not be empty".to_string()),

            (Constraint::Chars { min, max }, FieldValue::Text(s)) => {
                check_count(s.chars().count(), *min, *max, "characters")
            }

            (Constraint::Items { min, max }, FieldValue::TextList(items)) => {
                check_count(items.len(), *min, *max, "items")
            }
            (Constraint::Items { min, max }, FieldValue::FileList(files)) => {
                check_count(files.len(), *min, *max, "files")
            }

            (Constraint::ItemChars { max }, FieldValue::TextList(items)) => items
                .iter()
                .any(|item| item.chars().count() > *max)
                .then(|| format!("each item must be at most {} characters", max)),

            (Constraint::Range { min, max }, FieldValue::Number(n)) => (*n < *min || *n > *max)
                .then(|| format!("must be between {} and {}", min, max)),

            (Constraint::Step { step, origin }, FieldValue::Number(n)) => {
                misaligned(*n, *step, *origin)
                    .then(|| format!("must be in increments of {} starting at {}", step, origin))
            }

            (Constraint::Pattern { regex, message }, FieldValue::Text(s)) => {
                (!regex.is_match(s)).then(|| (*message).to_string())
            }

            (Constraint::OneOf { choices }, FieldValue::Text(s)) => (!choices
                .contains(&s.as_str()))
            .then(|| format!("must be one of: {}", choices.join(", "))),

            (Constraint::CharClass { test, message }, FieldValue::Text(s)) => {
                (!s.chars().any(|c| test(c))).then(|| (*message).to_string())
            }

            (Constraint::Prefix { prefix, message }, FieldValue::Text(s)) => {
                (!s.starts_with(prefix)).then(|| (*message).to_string())
            }

            (Constraint::FileSize { max_bytes }, FieldValue::FileList(files)) => files
                .iter()
                .any(|file| file.size > *max_bytes)
                .then(|| {
                    format!(
                        "each file must be at most {} MiB",
                        max_bytes / (1024 * 1024)
                    )
                }),

            (Constraint::CountryRequired, FieldValue::Location(location)) => location
                .country
                .trim()
                .is_empty()
                .then(|| "country must be selected".to_string()),

            // Shape mismatches pass: the rule table never pairs a constraint
            // with a kind it cannot inspect.
            _ => None,
        }
    }
}

fn check_count(
    count: usize,
    min: Option<usize>,
    max: Option<usize>,
    unit: &str,
) -> Option<String> {
    if let (Some(lo), Some(hi)) = (min, max) {
        if lo == hi && count != lo {
            return Some(format!("must be exactly {} {}", lo, unit));
        }
    }
    if let Some(lo) = min {
        if count < lo {
            return Some(format!("must have at least {} {}", lo, unit));
        }
    }
    if let Some(hi) = max {
        if count > hi {
            return Some(format!("must have at most {} {}", hi, unit));
        }
    }
    None
}

/// Step alignment with a small tolerance for float error.
fn misaligned(value: f64, step: f64, origin: f64) -> bool {
    if step <= 0.0 {
        return false;
    }
    let rem = ((value - origin) % step).abs();
    rem > 1e-9 && (step - rem).abs() > 1e-9
}
