use thiserror::Error;

/// Top-level error type for the `homedash-api` crate.
///
/// Covers network failures, the per-request timeout, non-2xx answers from the
/// SmartHome backend, and malformed bodies. `homedash-core` maps these into
/// the messages shown on screen.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The single request attempt exceeded the client timeout.
    #[error("Request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    // ── Backend ─────────────────────────────────────────────────────
    /// Non-2xx response. The backend answers errors with a plain-text body.
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` for failures where the server never answered.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::Timeout { .. } => true,
            _ => false,
        }
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// HTTP status of the failed response, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_and_not_found_follow_api_variant() {
        let err = Error::Api {
            status: 404,
            message: "Device not found".into(),
        };
        assert_eq!(err.status(), Some(404));
        assert!(err.is_not_found());
        assert!(!err.is_transient());
    }

    #[test]
    fn timeout_is_transient() {
        let err = Error::Timeout { timeout_ms: 1000 };
        assert!(err.is_transient());
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "Request timed out after 1000ms");
    }
}
