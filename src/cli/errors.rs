//! CLI-specific error types
//!
//! All CLI errors are fatal. Usage errors exit with status 1, every other
//! failure with status 2.

use std::fmt;
use std::io;

use crate::forge::ForgeError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Wrong or malformed arguments
    Usage,
    /// Configuration file error
    ConfigError,
    /// Input or output file error
    IoError,
    /// The search failed
    ForgeFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::Usage => "CRCFORGE_CLI_USAGE",
            Self::ConfigError => "CRCFORGE_CLI_CONFIG_ERROR",
            Self::IoError => "CRCFORGE_CLI_IO_ERROR",
            Self::ForgeFailed => "CRCFORGE_CLI_FORGE_FAILED",
        }
    }

    /// Process exit status
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage => 1,
            Self::ConfigError | Self::IoError | Self::ForgeFailed => 2,
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

    /// Usage error
    pub fn usage(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::Usage, msg)
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Forge failure
    pub fn forge_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ForgeFailed, msg)
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

    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        self.code.exit_code()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            // clap already renders a complete usage message
            CliErrorCode::Usage => write!(f, "{}", self.message.trim_end()),
            _ => write!(f, "{}: {}", self.code.code(), self.message),
        }
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
        Self::config_error(format!("JSON error: {}", e))
    }
}

impl From<ForgeError> for CliError {
    fn from(e: ForgeError) -> Self {
        match e {
            ForgeError::InvalidConfig(msg) => Self::config_error(msg),
            other => Self::forge_failed(format!("{} ({})", other, other.code())),
        }
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
