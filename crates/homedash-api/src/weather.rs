// Public weather and sun-time services
//
// Used as a fallback when the backend weather proxy is unavailable.
// sunrise-sunset.org answers sun times, open-meteo answers the current
// temperature. Both endpoints are configurable so tests can point them at
// a mock server.

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::client::{handle_response, transport_error};
use crate::error::Error;
use crate::transport::TransportConfig;

pub const DEFAULT_SUN_TIMES_URL: &str = "https://api.sunrise-sunset.org/json";
pub const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Sunrise and sunset as ISO-8601 timestamps (UTC).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SunTimes {
    pub sunrise: String,
    pub sunset: String,
}

#[derive(Deserialize)]
struct SunTimesEnvelope {
    results: SunTimes,
}

#[derive(Deserialize)]
struct ForecastEnvelope {
    current_weather: CurrentWeather,
}

#[derive(Deserialize)]
struct CurrentWeather {
    temperature: f64,
}

/// Client for the third-party weather fallbacks.
#[derive(Debug, Clone)]
pub struct PublicWeatherClient {
    http: reqwest::Client,
    sun_times_url: Url,
    forecast_url: Url,
    timeout_ms: u64,
}

impl PublicWeatherClient {
    pub fn new(
        sun_times_url: &str,
        forecast_url: &str,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        Ok(Self {
            http: transport.build_client()?,
            sun_times_url: Url::parse(sun_times_url)?,
            forecast_url: Url::parse(forecast_url)?,
            timeout_ms: transport.timeout_ms(),
        })
    }

    /// Client pointed at the public default endpoints.
    pub fn with_defaults(transport: &TransportConfig) -> Result<Self, Error> {
        Self::new(DEFAULT_SUN_TIMES_URL, DEFAULT_FORECAST_URL, transport)
    }

    /// `GET {sun_times_url}?lat=&lng=&formatted=0`
    pub async fn sun_times(&self, latitude: f64, longitude: f64) -> Result<SunTimes, Error> {
        let url = self.sun_times_url.clone();
        debug!("GET {url} (sun times fallback)");

        let resp = self
            .http
            .get(url)
            .query(&[
                ("lat", latitude.to_string()),
                ("lng", longitude.to_string()),
                ("formatted", "0".to_owned()),
            ])
            .send()
            .await
            .map_err(|e| transport_error(e, self.timeout_ms))?;
        let envelope: SunTimesEnvelope = handle_response(resp, self.timeout_ms).await?;
        Ok(envelope.results)
    }

    /// Current temperature in °C.
    ///
    /// `GET {forecast_url}?latitude=&longitude=&current_weather=true`
    pub async fn current_temperature(&self, latitude: f64, longitude: f64) -> Result<f64, Error> {
        let url = self.forecast_url.clone();
        debug!("GET {url} (temperature fallback)");

        let resp = self
            .http
            .get(url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("current_weather", "true".to_owned()),
            ])
            .send()
            .await
            .map_err(|e| transport_error(e, self.timeout_ms))?;
        let envelope: ForecastEnvelope = handle_response(resp, self.timeout_ms).await?;
        Ok(envelope.current_weather.temperature)
    }
}
