//! Field descriptor model and parsing
//!
//! Descriptors are the compiler's only input: an ordered list of form fields,
//! each tagged with a widget variant. This module owns the wire shape and the
//! tolerant parsing of generator output; rule semantics live in `schema`.

mod errors;
mod parser;
mod types;

pub use errors::{DescriptorError, DescriptorResult};
pub use parser::parse_field_list;
pub use types::{FieldDescriptor, Variant};
