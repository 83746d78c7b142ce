// Shared transport configuration for building reqwest::Client instances.
//
// The backend client and the public weather client share timeout and
// header settings through this module.

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};

use crate::error::Error;

/// Per-request timeout used when nothing else is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

/// Shared transport configuration for building HTTP clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Applies to each request as a whole. There are no retries.
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("homedash/", env!("CARGO_PKG_VERSION")).into(),
        }
    }
}

impl TransportConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Timeout in whole milliseconds, as reported in [`Error::Timeout`].
    pub fn timeout_ms(&self) -> u64 {
        u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX)
    }

    /// Build a `reqwest::Client` that speaks JSON by default.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.as_str())
            .default_headers(headers)
            .build()?;
        Ok(client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timeout_is_one_second() {
        let config = TransportConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(1));
        assert_eq!(config.timeout_ms(), 1000);
    }

    #[test]
    fn with_timeout_overrides() {
        let config = TransportConfig::default().with_timeout(Duration::from_millis(250));
        assert_eq!(config.timeout_ms(), 250);
    }
}
