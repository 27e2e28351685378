//! Validation schema core
//!
//! The engineering core of formsmith: a deterministic compiler from a field
//! descriptor list to an aggregate validator. Submodules, leaves first:
//!
//! - `value`: coerced value types and JSON coercion
//! - `constraint`: the closed sum type of constraint kinds
//! - `rules`: the variant → base rule table
//! - `compiler`: per-field composition and the aggregate `FormSchema`
//! - `errors`: per-field issue reporting
//!
//! Everything here is synchronous, pure, and free of shared mutable state;
//! schemas may be built and used concurrently without coordination.

mod compiler;
mod constraint;
mod errors;
mod rules;
mod value;

pub use compiler::{CompiledField, FormSchema};
pub use constraint::Constraint;
pub use errors::{FieldIssue, IssueKind, ValidationErrors};
pub use rules::{base_rule, FieldRule, LANGUAGE_CODES, PHONE_PATTERN};
pub use value::{coerce, json_type_name, FieldValue, FileHandle, Location, ValueKind};
