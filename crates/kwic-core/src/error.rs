//! Error types and exit codes for kwic
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (malformed input rows, invalid configuration values)

mod macros;

use thiserror::Error;

/// Exit codes used by the kwic binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed rows, invalid config values (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building a KWIC index
#[derive(Error, Debug)]
pub enum KwicError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("invalid row at line {line}: {reason}")]
    InvalidRow { line: usize, reason: String },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    // Collaborator failures (exit code 1)
    #[error("failed to compute reference id for {concept}: {reason}")]
    RefId { concept: String, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl KwicError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        KwicError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for something that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        KwicError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a malformed input row
    pub fn invalid_row(line: usize, reason: impl std::fmt::Display) -> Self {
        KwicError::InvalidRow {
            line,
            reason: reason.to_string(),
        }
    }

    /// Create an error for a failing reference id generator
    pub fn ref_id(concept: &str, reason: impl std::fmt::Display) -> Self {
        KwicError::RefId {
            concept: concept.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            KwicError::UnknownFormat(_) | KwicError::UsageError(_) => ExitCode::Usage,

            KwicError::InvalidRow { .. }
            | KwicError::InvalidValue { .. }
            | KwicError::NotFound { .. } => ExitCode::Data,

            KwicError::RefId { .. }
            | KwicError::Io(_)
            | KwicError::Json(_)
            | KwicError::Toml(_)
            | KwicError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            KwicError::UnknownFormat(_) => "unknown_format",
            KwicError::UsageError(_) => "usage_error",
            KwicError::InvalidRow { .. } => "invalid_row",
            KwicError::InvalidValue { .. } => "invalid_value",
            KwicError::NotFound { .. } => "not_found",
            KwicError::RefId { .. } => "ref_id",
            KwicError::Io(_) => "io_error",
            KwicError::Json(_) => "json_error",
            KwicError::Toml(_) => "toml_error",
            KwicError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for kwic operations
pub type Result<T> = std::result::Result<T, KwicError>;
