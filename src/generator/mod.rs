//! Form generation
//!
//! Turns a natural-language description into a field-descriptor list via an
//! OpenAI-compatible chat-completions endpoint. This is the only
//! asynchronous seam in the system; the schema core consumes the result
//! synchronously and never observes how it was produced.

mod client;
mod errors;
mod prompt;
mod source;

pub use client::{GeneratorConfig, LlmClient, API_KEY_ENV};
pub use errors::{GeneratorError, GeneratorResult};
pub use prompt::SYSTEM_PROMPT;
pub use source::FormSource;
