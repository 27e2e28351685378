//! CLI-specific error types
//!
//! CLI errors terminate the process with a non-zero exit; each carries a
//! stable machine code alongside its message.

use std::fmt;

/// CLI error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// File I/O error
    IoError,
    /// Input file did not parse
    InvalidInput,
    /// Config file already exists
    AlreadyInitialized,
    /// Server failed to boot
    BootFailed,
    /// `check` found validation failures
    ValidationFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "FORMSMITH_CLI_CONFIG_ERROR",
            Self::IoError => "FORMSMITH_CLI_IO_ERROR",
            Self::InvalidInput => "FORMSMITH_CLI_INVALID_INPUT",
            Self::AlreadyInitialized => "FORMSMITH_CLI_ALREADY_INITIALIZED",
            Self::BootFailed => "FORMSMITH_CLI_BOOT_FAILED",
            Self::ValidationFailed => "FORMSMITH_CLI_VALIDATION_FAILED",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Unparseable input file
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::InvalidInput, msg)
    }

    /// Config file already exists
    pub fn already_initialized(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::AlreadyInitialized, msg)
    }

    /// Server boot failure
    pub fn boot_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::BootFailed, msg)
    }

    /// Validation failures found by `check`
    pub fn validation_failed(field_count: usize) -> Self {
        Self::new(
            CliErrorCode::ValidationFailed,
            format!("{} field(s) failed validation", field_count),
        )
    }

    /// Returns the error code
    pub fn code(&self) -> CliErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_code() {
        let err = CliError::config_error("bad config");
        let text = err.to_string();
        assert!(text.contains("FORMSMITH_CLI_CONFIG_ERROR"));
        assert!(text.contains("bad config"));
    }

    #[test]
    fn test_validation_failed_counts_fields() {
        let err = CliError::validation_failed(3);
        assert_eq!(err.code(), CliErrorCode::ValidationFailed);
        assert!(err.message().contains("3 field(s)"));
    }
}
