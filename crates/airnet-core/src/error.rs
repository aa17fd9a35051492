//! Error types and exit codes for airnet
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (I/O, parse errors)
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown airport, rejected route, unreachable destination)

mod macros;

use thiserror::Error;

/// Exit codes for the airnet binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - the network cannot answer the request (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during airnet operations
#[derive(Error, Debug)]
pub enum AirnetError {
    // Graph conditions (exit code 3)
    #[error("invalid weight {weight} for route {from} -> {to} (must be a positive integer)")]
    InvalidWeight {
        from: String,
        to: String,
        weight: i64,
    },

    #[error("unknown airport: {id:?}")]
    UnknownNode { id: String },

    #[error("route already exists: {from} -> {to}")]
    DuplicateEdge { from: String, to: String },

    #[error("route from {id} to itself is not allowed")]
    SelfLoop { id: String },

    #[error("no route connects {from} and {to}")]
    Unreachable { from: String, to: String },

    #[error("invalid network: {reason}")]
    InvalidNetwork { reason: String },

    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AirnetError {
    /// Create an error for an airport that is not part of the network
    pub fn unknown_node(id: impl Into<String>) -> Self {
        AirnetError::UnknownNode { id: id.into() }
    }

    /// Create an error for a pair of airports with no connecting route
    pub fn unreachable(from: impl Into<String>, to: impl Into<String>) -> Self {
        AirnetError::Unreachable {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            AirnetError::UnknownFormat(_) | AirnetError::UsageError(_) => ExitCode::Usage,

            AirnetError::InvalidWeight { .. }
            | AirnetError::UnknownNode { .. }
            | AirnetError::DuplicateEdge { .. }
            | AirnetError::SelfLoop { .. }
            | AirnetError::Unreachable { .. }
            | AirnetError::InvalidNetwork { .. } => ExitCode::Data,

            AirnetError::Io(_) | AirnetError::Toml(_) | AirnetError::Json(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            AirnetError::InvalidWeight { .. } => "invalid_weight",
            AirnetError::UnknownNode { .. } => "unknown_node",
            AirnetError::DuplicateEdge { .. } => "duplicate_edge",
            AirnetError::SelfLoop { .. } => "self_loop",
            AirnetError::Unreachable { .. } => "unreachable",
            AirnetError::InvalidNetwork { .. } => "invalid_network",
            AirnetError::UnknownFormat(_) => "unknown_format",
            AirnetError::UsageError(_) => "usage_error",
            AirnetError::Io(_) => "io_error",
            AirnetError::Toml(_) => "toml_error",
            AirnetError::Json(_) => "json_error",
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

/// Result type alias for airnet operations
pub type Result<T> = std::result::Result<T, AirnetError>;
