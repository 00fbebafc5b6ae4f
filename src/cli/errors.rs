//! CLI-specific error types
//!
//! All CLI errors are fatal: `main` prints them and exits non-zero.

use std::fmt;
use std::io;

use crate::books::FixtureError;
use crate::http_server::ConfigError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// Fixture file error
    FixtureError,
    /// I/O error (stdout)
    IoError,
    /// Server failed to start or crashed
    ServeFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "BOOKSHELF_CLI_CONFIG_ERROR",
            Self::FixtureError => "BOOKSHELF_CLI_FIXTURE_ERROR",
            Self::IoError => "BOOKSHELF_CLI_IO_ERROR",
            Self::ServeFailed => "BOOKSHELF_CLI_SERVE_FAILED",
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

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    pub fn fixture_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::FixtureError, msg)
    }

    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    pub fn serve_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ServeFailed, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::config_error(e.to_string())
    }
}

impl From<FixtureError> for CliError {
    fn from(e: FixtureError) -> Self {
        Self::fixture_error(e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    #[test]
    fn test_display_includes_code() {
        let err = CliError::serve_failed("address in use");
        assert_eq!(
            err.to_string(),
            "BOOKSHELF_CLI_SERVE_FAILED: address in use"
        );
    }

    #[test]
    fn test_from_config_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err = CliError::from(ConfigError::Read(PathBuf::from("c.json"), io_err));
        assert_eq!(err.code(), &CliErrorCode::ConfigError);
        assert!(err.message().contains("c.json"));
    }

    #[test]
    fn test_from_fixture_error() {
        let fixture_err = crate::books::load_fixture(Path::new("/nonexistent.json")).unwrap_err();
        let err = CliError::from(fixture_err);
        assert_eq!(err.code_str(), "BOOKSHELF_CLI_FIXTURE_ERROR");
    }
}
