//! Descriptor parsing errors

use thiserror::Error;

/// Result type for descriptor parsing.
pub type DescriptorResult<T> = Result<T, DescriptorError>;

/// Errors raised while turning generator output into a field list.
///
/// Unknown variant tags are NOT an error: they compile to a generic string
/// rule. These errors cover structurally unusable input only.
#[derive(Debug, Error)]
pub enum DescriptorError {
    /// The payload is not valid JSON.
    #[error("field list is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The JSON parsed but is neither an array nor an object with `fields`.
    #[error("field list must be a JSON array or an object with a 'fields' key, got {0}")]
    UnexpectedShape(&'static str),

    /// The payload contained no JSON at all (e.g. a prose-only reply).
    #[error("no JSON field list found in generator response")]
    NoJsonFound,
}
