//! Generator errors

use thiserror::Error;

use crate::descriptor::DescriptorError;

/// Result type for generation operations.
pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// Errors raised while producing a field list from a prompt.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// No API key in config or environment.
    #[error("no API key configured: set generator.api_key or the {0} environment variable")]
    MissingApiKey(&'static str),

    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(reqwest::Error),

    /// Transport-level failure (connect, timeout, body read).
    #[error("generation request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("generation endpoint returned {status}: {body}")]
    BadStatus { status: u16, body: String },

    /// The response carried no message content.
    #[error("generation response contained no choices")]
    EmptyResponse,

    /// The message content did not parse as a field list.
    #[error("generator output unusable: {0}")]
    Descriptor(#[from] DescriptorError),
}
