// ── Dashboard configuration ──
//
// Describes *what* backend to talk to and *where* the house is. Built by
// `homedash-config` from TOML + environment, or directly in tests.

use std::time::Duration;

use url::Url;

use homedash_api::client::DEFAULT_BASE_URL;
use homedash_api::transport::DEFAULT_TIMEOUT;
use homedash_api::weather::{DEFAULT_FORECAST_URL, DEFAULT_SUN_TIMES_URL};

/// House the dashboard lists rooms for.
pub const DEFAULT_HOUSE_ID: &str = "H1";

/// How often the home page re-fetches the temperature.
pub const DEFAULT_WEATHER_REFRESH: Duration = Duration::from_secs(15 * 60);

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Porto, where the house lives unless configured otherwise.
    pub const PORTO: Self = Self {
        latitude: 41.1496,
        longitude: -8.6110,
    };
}

/// Configuration for connecting the dashboard to a SmartHome backend.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Backend base URL (e.g., `http://localhost:8080/api/v1`).
    pub api_url: Url,
    /// Per-request timeout. Requests are never retried.
    pub timeout: Duration,
    pub house_id: String,
    pub location: GeoPoint,
    /// Public sun-time service used when the backend weather proxy fails.
    pub sun_times_url: Url,
    /// Public forecast service used when the backend weather proxy fails.
    pub forecast_url: Url,
    pub weather_refresh: Duration,
}

impl DashboardConfig {
    /// Default configuration pointed at another backend.
    pub fn with_api_url(api_url: Url) -> Self {
        Self {
            api_url,
            ..Self::default()
        }
    }
}

impl Default for DashboardConfig {
    #[allow(clippy::unwrap_used)] // constant URLs
    fn default() -> Self {
        Self {
            api_url: Url::parse(DEFAULT_BASE_URL).unwrap(),
            timeout: DEFAULT_TIMEOUT,
            house_id: DEFAULT_HOUSE_ID.into(),
            location: GeoPoint::PORTO,
            sun_times_url: Url::parse(DEFAULT_SUN_TIMES_URL).unwrap(),
            forecast_url: Url::parse(DEFAULT_FORECAST_URL).unwrap(),
            weather_refresh: DEFAULT_WEATHER_REFRESH,
        }
    }
}
