//! Error types for hostboard
//!
//! Each error type has a corresponding error code for programmatic handling.

use thiserror::Error;

/// Result type alias for hostboard operations
pub type Result<T> = std::result::Result<T, HostboardError>;

/// Main error type for all hostboard operations
#[derive(Debug, Error)]
pub enum HostboardError {
    /// Page name is not part of the view registry
    #[error("Unknown page: {0}")]
    UnknownPage(String),

    /// Form name is not part of the view registry
    #[error("Unknown form: {0}")]
    UnknownForm(String),

    /// Step number outside `[1, total]`
    #[error("Step {step} is out of range 1..={total}")]
    StepOutOfRange { step: usize, total: usize },

    /// Required input missing or incomplete
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Simulated backend action failed
    #[error("{action} failed: {reason}")]
    ActionFailed { action: String, reason: String },

    /// Affordance rendered without any behavior attached
    #[error("Action not available: {0}")]
    Unbound(String),

    /// Invalid JSON format
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Wizard runtime has shut down
    #[error("Wizard runtime stopped")]
    RuntimeStopped,

    /// Operation was interrupted (e.g., by SIGINT)
    #[error("Operation interrupted")]
    Interrupted,

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error with context
    #[error("{context}: {message}")]
    Wrapped { context: String, message: String },
}

impl HostboardError {
    /// Get the error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            HostboardError::UnknownPage(_) => "UNKNOWN_PAGE",
            HostboardError::UnknownForm(_) => "UNKNOWN_FORM",
            HostboardError::StepOutOfRange { .. } => "STEP_OUT_OF_RANGE",
            HostboardError::Validation(_) => "VALIDATION",
            HostboardError::ActionFailed { .. } => "ACTION_FAILED",
            HostboardError::Unbound(_) => "UNBOUND",
            HostboardError::InvalidJson(_) => "INVALID_JSON",
            HostboardError::FileNotFound(_) => "FILE_NOT_FOUND",
            HostboardError::ConfigError(_) => "CONFIG_ERROR",
            HostboardError::RuntimeStopped => "RUNTIME_STOPPED",
            HostboardError::Interrupted => "INTERRUPTED",
            HostboardError::Io(_) => "IO_ERROR",
            HostboardError::Wrapped { .. } => "WRAPPED_ERROR",
        }
    }

    /// Wrap an error with additional context
    pub fn wrap<E: std::fmt::Display>(error: E, context: impl Into<String>) -> Self {
        HostboardError::Wrapped {
            context: context.into(),
            message: error.to_string(),
        }
    }
}

/// Convert an error to an appropriate exit code
pub fn to_exit_code(error: &HostboardError) -> i32 {
    match error {
        HostboardError::Interrupted => 130, // Standard Unix exit code for SIGINT
        HostboardError::ConfigError(_) | HostboardError::InvalidJson(_) => 2,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(HostboardError::UnknownPage("x".into()).code(), "UNKNOWN_PAGE");
        assert_eq!(HostboardError::UnknownForm("x".into()).code(), "UNKNOWN_FORM");
        assert_eq!(
            HostboardError::StepOutOfRange { step: 7, total: 6 }.code(),
            "STEP_OUT_OF_RANGE"
        );
        assert_eq!(HostboardError::Validation("x".into()).code(), "VALIDATION");
        assert_eq!(HostboardError::Unbound("edit".into()).code(), "UNBOUND");
        assert_eq!(HostboardError::InvalidJson("x".into()).code(), "INVALID_JSON");
        assert_eq!(HostboardError::RuntimeStopped.code(), "RUNTIME_STOPPED");
        assert_eq!(HostboardError::Interrupted.code(), "INTERRUPTED");
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(to_exit_code(&HostboardError::Interrupted), 130);
        assert_eq!(to_exit_code(&HostboardError::ConfigError("bad".into())), 2);
        assert_eq!(to_exit_code(&HostboardError::UnknownPage("x".into())), 1);
    }

    #[test]
    fn test_error_messages() {
        let err = HostboardError::StepOutOfRange { step: 0, total: 6 };
        assert_eq!(err.to_string(), "Step 0 is out of range 1..=6");

        let err = HostboardError::ActionFailed {
            action: "Send OTP".into(),
            reason: "timeout".into(),
        };
        assert_eq!(err.to_string(), "Send OTP failed: timeout");
    }

    #[test]
    fn test_wrap_error() {
        let wrapped = HostboardError::wrap("inner error", "outer context");
        assert_eq!(wrapped.code(), "WRAPPED_ERROR");
        assert!(wrapped.to_string().contains("outer context"));
        assert!(wrapped.to_string().contains("inner error"));
    }
}
