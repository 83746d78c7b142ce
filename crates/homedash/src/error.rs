//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` variants into user-facing errors with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use homedash_config::ConfigError;
use homedash_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONFLICT: i32 = 6;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not reach the SmartHome API")]
    #[diagnostic(
        code(homedash::connection_failed),
        help(
            "Check that the backend is running and reachable.\n\
             Reason: {reason}\n\
             Override the URL with --api-url or HOMEDASH_API_URL."
        )
    )]
    ConnectionFailed { reason: String },

    #[error("Request timed out after {timeout_ms}ms")]
    #[diagnostic(
        code(homedash::timeout),
        help("Increase the timeout with --timeout-ms or check the backend's responsiveness.")
    )]
    Timeout { timeout_ms: u64 },

    // ── Resources ────────────────────────────────────────────────────

    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(homedash::not_found),
        help("Run: homedash {list_command} to see what exists")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    #[error("Not found: {message}")]
    #[diagnostic(code(homedash::not_found))]
    Missing { message: String },

    #[error("Request rejected (HTTP {status}): {message}")]
    #[diagnostic(code(homedash::rejected))]
    Rejected { status: u16, message: String },

    #[error("Unexpected response: {message}")]
    #[diagnostic(code(homedash::internal))]
    Internal { message: String },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(homedash::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(homedash::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: homedash config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error(transparent)]
    #[diagnostic(code(homedash::config))]
    Config(ConfigError),

    // ── Interactive ──────────────────────────────────────────────────

    #[error("Destructive operation '{action}' requires confirmation")]
    #[diagnostic(
        code(homedash::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── IO ───────────────────────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::NotFound { .. } | Self::Missing { .. } | Self::ProfileNotFound { .. } => {
                exit_code::NOT_FOUND
            }
            Self::Rejected { status: 409, .. } => exit_code::CONFLICT,
            Self::Validation { .. } | Self::NonInteractiveRequiresYes { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }

    /// Attach the resource that was looked up to a not-found error.
    pub fn for_resource(self, resource_type: &str, identifier: &str, list_command: &str) -> Self {
        match self {
            Self::Missing { .. } => Self::NotFound {
                resource_type: resource_type.into(),
                identifier: identifier.into(),
                list_command: list_command.into(),
            },
            other => other,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Unreachable { reason } => CliError::ConnectionFailed { reason },
            CoreError::Timeout { timeout_ms } => CliError::Timeout { timeout_ms },
            CoreError::NotFound { message } => CliError::Missing { message },
            CoreError::Rejected { status, message } => CliError::Rejected { status, message },
            CoreError::Validation { field, reason } => CliError::Validation { field, reason },
            CoreError::Config { message } => CliError::Validation {
                field: "configuration".into(),
                reason: message,
            },
            CoreError::Cancelled => CliError::Internal {
                message: "request cancelled".into(),
            },
            CoreError::Internal(message) => CliError::Internal { message },
        }
    }
}

impl From<homedash_api::Error> for CliError {
    fn from(err: homedash_api::Error) -> Self {
        CoreError::from(err).into()
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            other => CliError::Config(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_gets_resource_context() {
        let err = CliError::from(CoreError::NotFound {
            message: "Device not found".into(),
        })
        .for_resource("device", "D9", "rooms devices <ROOM>");
        assert_eq!(err.exit_code(), exit_code::NOT_FOUND);
        assert_eq!(err.to_string(), "device 'D9' not found");
    }

    #[test]
    fn validation_is_a_usage_error() {
        let err = CliError::from(CoreError::Validation {
            field: "deviceName".into(),
            reason: "is required".into(),
        });
        assert_eq!(err.exit_code(), exit_code::USAGE);
    }

    #[test]
    fn conflict_has_its_own_exit_code() {
        let err = CliError::Rejected {
            status: 409,
            message: "duplicate".into(),
        };
        assert_eq!(err.exit_code(), exit_code::CONFLICT);
    }
}
