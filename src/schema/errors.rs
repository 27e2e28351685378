//! Validation issue reporting
//!
//! Issues are data, not exceptions: a `validate` call collects every
//! per-field failure into one report so the caller can display all of them
//! at once. Nothing here aborts validation.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Classification of a per-field issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// A required field's value was absent, null, or the empty string.
    RequiredFieldMissing,
    /// A present value failed a variant rule (including coercion).
    ConstraintViolation,
}

/// One failure on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub kind: IssueKind,
    pub message: String,
}

impl FieldIssue {
    /// The synthetic required-field issue. Uses the field's label verbatim.
    pub fn required(label: &str) -> Self {
        Self {
            kind: IssueKind::RequiredFieldMissing,
            message: format!("{} is required", label),
        }
    }

    /// A constraint or coercion failure with its rule-table message.
    pub fn constraint(message: impl Into<String>) -> Self {
        Self {
            kind: IssueKind::ConstraintViolation,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// All per-field failures from one `validate` call, keyed by field name.
///
/// Serializes as the bare map so API clients receive
/// `{"field": [{"kind": ..., "message": ...}, ...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    fields: BTreeMap<String, Vec<FieldIssue>>,
}

impl ValidationErrors {
    pub(crate) fn new(fields: BTreeMap<String, Vec<FieldIssue>>) -> Self {
        Self { fields }
    }

    /// Per-field issue lists, ordered by field name.
    pub fn fields(&self) -> &BTreeMap<String, Vec<FieldIssue>> {
        &self.fields
    }

    /// Issue messages for one field, in rule order.
    pub fn messages(&self, name: &str) -> Vec<&str> {
        self.fields
            .get(name)
            .map(|issues| issues.iter().map(|i| i.message.as_str()).collect())
            .unwrap_or_default()
    }

    /// Number of fields that failed.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} field(s) failed validation", self.fields.len())?;
        for (name, issues) in &self.fields {
            for issue in issues {
                write!(f, "; {}: {}", name, issue.message)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
