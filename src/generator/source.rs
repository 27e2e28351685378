//! Form-description source
//!
//! The compiler does not care where a field list comes from. `FormSource` is
//! that seam: an LLM call in production, a fixture list in tests and offline
//! use. A concrete enum rather than a trait object keeps the async method
//! dispatch-free.

use crate::descriptor::FieldDescriptor;

use super::client::LlmClient;
use super::errors::GeneratorResult;

/// Where field lists come from.
#[derive(Debug, Clone)]
pub enum FormSource {
    /// Generate via the configured LLM endpoint.
    Llm(LlmClient),
    /// Always answer with a canned descriptor list.
    Fixture(Vec<FieldDescriptor>),
}

impl FormSource {
    /// Produce a field list for a natural-language description.
    pub async fn generate(&self, description: &str) -> GeneratorResult<Vec<FieldDescriptor>> {
        match self {
            FormSource::Llm(client) => client.generate_fields(description).await,
            FormSource::Fixture(fields) => Ok(fields.clone()),
        }
    }
}
