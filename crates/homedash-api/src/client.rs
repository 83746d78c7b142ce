// Async HTTP client for the SmartHome backend REST API.
//
// Base path: /api/v1/ (configurable)
// Every call is a single attempt bounded by the transport timeout.

use std::time::Duration;

use reqwest::RequestBuilder;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// Default backend location used by the dashboard.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/v1";

/// Async client for the SmartHome backend.
///
/// Resource services (rooms, devices, sensors, actuators, catalog,
/// readings, weather) are inherent methods defined in `resources/`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    timeout_ms: u64,
}

impl ApiClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build a client with its own `reqwest::Client` from a transport config.
    pub fn new(base_url: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url: Self::normalize_base_url(base_url)?,
            timeout_ms: transport.timeout_ms(),
        })
    }

    /// Wrap an existing `reqwest::Client`. `timeout` is the one the client
    /// was built with; it is only used to report [`Error::Timeout`].
    pub fn with_client(
        base_url: &str,
        http: reqwest::Client,
        timeout: Duration,
    ) -> Result<Self, Error> {
        Ok(Self {
            http,
            base_url: Self::normalize_base_url(base_url)?,
            timeout_ms: TransportConfig::default().with_timeout(timeout).timeout_ms(),
        })
    }

    /// Ensure the base path ends with `/` so relative joins stay under it.
    ///
    /// `http://host/api/v1` + `rooms/R1` → `http://host/api/v1/rooms/R1`
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        let path = url.path().trim_end_matches('/').to_owned();
        url.set_path(&format!("{path}/"));
        Ok(url)
    }

    /// The normalized base URL (always ends with `/`).
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builder ──────────────────────────────────────────────────

    fn url(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("GET {url}");

        let resp = self.send(self.http.get(url)).await?;
        handle_response(resp, self.timeout_ms).await
    }

    pub(crate) async fn get_with_params<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("GET {url} params={params:?}");

        let resp = self.send(self.http.get(url).query(params)).await?;
        handle_response(resp, self.timeout_ms).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("POST {url}");

        let resp = self.send(self.http.post(url).json(body)).await?;
        handle_response(resp, self.timeout_ms).await
    }

    pub(crate) async fn patch<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("PATCH {url}");

        let resp = self.send(self.http.patch(url).json(body)).await?;
        handle_response(resp, self.timeout_ms).await
    }

    /// PATCH with query parameters and no body.
    pub(crate) async fn patch_with_params<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("PATCH {url} params={params:?}");

        let resp = self.send(self.http.patch(url).query(params)).await?;
        handle_response(resp, self.timeout_ms).await
    }

    async fn send(&self, request: RequestBuilder) -> Result<reqwest::Response, Error> {
        request
            .send()
            .await
            .map_err(|e| transport_error(e, self.timeout_ms))
    }
}

/// Timeouts become [`Error::Timeout`] whether they hit while sending or
/// while reading the body.
pub(crate) fn transport_error(err: reqwest::Error, timeout_ms: u64) -> Error {
    if err.is_timeout() {
        Error::Timeout { timeout_ms }
    } else {
        Error::Transport(err)
    }
}

// ── Response handling ────────────────────────────────────────────────

pub(crate) async fn handle_response<T: DeserializeOwned>(
    resp: reqwest::Response,
    timeout_ms: u64,
) -> Result<T, Error> {
    let status = resp.status();
    if status.is_success() {
        let body = resp
            .text()
            .await
            .map_err(|e| transport_error(e, timeout_ms))?;
        serde_json::from_str(&body).map_err(|e| {
            let preview: String = body.chars().take(200).collect();
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body,
            }
        })
    } else {
        Err(parse_error(status, resp).await)
    }
}

async fn parse_error(status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
    let raw = resp.text().await.unwrap_or_default();
    let raw = raw.trim();
    Error::Api {
        status: status.as_u16(),
        message: if raw.is_empty() {
            status.to_string()
        } else {
            raw.to_owned()
        },
    }
}
