//! Error types and exit codes for waypoint
//!
//! The collections and search algorithms never fail: absence is reported
//! through `Option`. Errors cover the surfaces around them, such as
//! parsing a graph definition or resolving command-line input.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown node, no path, invalid graph definition)

mod macros;

use thiserror::Error;

/// Exit codes reported by the waypoint binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown node, unreachable target (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur around waypoint operations
#[derive(Error, Debug)]
pub enum WaypointError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    #[error("no path from {from} to {to}")]
    NoPath { from: String, to: String },

    #[error("invalid graph: {reason}")]
    InvalidGraph { reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl WaypointError {
    /// Create an error for an invalid value
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        WaypointError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        WaypointError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed operation
    pub fn failed(operation: &str, error: impl std::fmt::Display) -> Self {
        WaypointError::FailedOperation {
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            WaypointError::UsageError(_)
            | WaypointError::InvalidValue { .. } => ExitCode::Usage,

            WaypointError::NotFound { .. }
            | WaypointError::NoPath { .. }
            | WaypointError::InvalidGraph { .. }
            | WaypointError::Toml(_) => ExitCode::Data,

            WaypointError::Io(_)
            | WaypointError::Json(_)
            | WaypointError::FailedOperation { .. }
            | WaypointError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            WaypointError::UsageError(_) => "usage_error",
            WaypointError::InvalidValue { .. } => "invalid_value",
            WaypointError::NotFound { .. } => "not_found",
            WaypointError::NoPath { .. } => "no_path",
            WaypointError::InvalidGraph { .. } => "invalid_graph",
            WaypointError::Io(_) => "io_error",
            WaypointError::Json(_) => "json_error",
            WaypointError::Toml(_) => "toml_error",
            WaypointError::FailedOperation { .. } => "failed_operation",
            WaypointError::Other(_) => "other",
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

/// Result type alias for waypoint operations
pub type Result<T> = std::result::Result<T, WaypointError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            WaypointError::UsageError("bad".into()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            WaypointError::invalid_value("edge", "A-").exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            WaypointError::not_found("node", "Q").exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            WaypointError::NoPath {
                from: "A".into(),
                to: "B".into()
            }
            .exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            WaypointError::Other("boom".into()).exit_code(),
            ExitCode::Failure
        );
        assert_eq!(i32::from(ExitCode::Data), 3);
    }

    #[test]
    fn test_display_messages() {
        let err = WaypointError::not_found("node", "Q");
        assert_eq!(err.to_string(), "node not found: Q");

        let err = WaypointError::NoPath {
            from: "A".into(),
            to: "Z".into(),
        };
        assert_eq!(err.to_string(), "no path from A to Z");

        let err = WaypointError::failed("parse graph", "unexpected key");
        assert_eq!(err.to_string(), "failed to parse graph: unexpected key");
    }

    #[test]
    fn test_to_json_envelope() {
        let err = WaypointError::invalid_value("weight", "NaN");
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 2);
        assert_eq!(json["error"]["type"], "invalid_value");
        assert_eq!(json["error"]["message"], "invalid weight: NaN");
    }

    #[test]
    fn test_toml_error_conversion() {
        let parse: std::result::Result<toml::Table, toml::de::Error> = toml::from_str("= nope");
        let err: WaypointError = parse.unwrap_err().into();
        assert_eq!(err.exit_code(), ExitCode::Data);
        assert_eq!(err.error_type(), "toml_error");
    }
}
