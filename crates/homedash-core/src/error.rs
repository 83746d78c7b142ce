// ── Core error types ──
//
// User-facing errors from homedash-core. Screens print these verbatim as
// `Error: {message}`, so the wording is aimed at people, not at HTTP.
// The `From<homedash_api::Error>` impl translates transport-layer errors.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot reach the SmartHome API: {reason}")]
    Unreachable { reason: String },

    #[error("Request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    // ── Data errors ──────────────────────────────────────────────────
    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Request rejected (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },

    // ── Client-side errors ───────────────────────────────────────────
    /// A required form field was empty or an operation is not allowed in
    /// the current view state. Never reaches the network.
    #[error("{field}: {reason}")]
    Validation { field: String, reason: String },

    /// The page was left while the request was in flight.
    #[error("Cancelled")]
    Cancelled,

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    pub(crate) fn validation(field: &str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// `true` for client-side validation failures.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<homedash_api::Error> for CoreError {
    fn from(err: homedash_api::Error) -> Self {
        match err {
            homedash_api::Error::Transport(ref e) if e.is_timeout() => {
                CoreError::Timeout { timeout_ms: 0 }
            }
            homedash_api::Error::Transport(e) => CoreError::Unreachable {
                reason: e.to_string(),
            },
            homedash_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            homedash_api::Error::Timeout { timeout_ms } => CoreError::Timeout { timeout_ms },
            homedash_api::Error::Api {
                status: 404,
                message,
            } => CoreError::NotFound { message },
            homedash_api::Error::Api { status, message } => {
                CoreError::Rejected { status, message }
            }
            homedash_api::Error::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("Deserialization error: {message}"))
            }
        }
    }
}
