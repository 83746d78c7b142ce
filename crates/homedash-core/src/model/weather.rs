// ── Home page weather ──

use serde::{Deserialize, Serialize};

/// Where a weather value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WeatherSource {
    /// The backend's weather proxy.
    Backend,
    /// The public third-party fallback.
    Public,
    /// Neither answered.
    #[default]
    Unavailable,
}

/// Temperature and sun times, already formatted for display.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Weather {
    /// Degrees Celsius as text (`"18.4"`).
    pub temperature: Option<String>,
    pub temperature_source: WeatherSource,
    /// Local `HH:MM`.
    pub sunrise: Option<String>,
    pub sunset: Option<String>,
    pub sun_source: WeatherSource,
}
