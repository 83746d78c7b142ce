use std::fmt::Display;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Local, TimeZone};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use homedash_api::{ApiClient, PublicWeatherClient};

use super::until_cancelled;
use crate::config::GeoPoint;
use crate::error::CoreError;
use crate::model::{Weather, WeatherSource};
use crate::store::{LoadState, ViewStore};
use crate::stream::ViewStream;

/// Render an ISO-8601 instant as `HH:MM` in `tz`.
///
/// Returns `None` for anything that does not parse.
pub fn format_sun_time<Tz>(iso: &str, tz: &Tz) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    DateTime::parse_from_rfc3339(iso)
        .ok()
        .map(|t| t.with_timezone(tz).format("%H:%M").to_string())
}

/// Loads the home page weather: current temperature plus sunrise and
/// sunset, each from the backend first and the public services second.
///
/// Loading never fails; a value neither source answers is shown as
/// unavailable.
pub struct HomeFlow {
    api: Arc<ApiClient>,
    public: Arc<PublicWeatherClient>,
    location: GeoPoint,
    refresh: Duration,
    store: ViewStore<Weather>,
    cancel: CancellationToken,
}

impl HomeFlow {
    pub fn new(
        api: Arc<ApiClient>,
        public: Arc<PublicWeatherClient>,
        location: GeoPoint,
        refresh: Duration,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            api,
            public,
            location,
            refresh,
            store: ViewStore::new(),
            cancel,
        }
    }

    /// How often the temperature should be re-fetched while the page is open.
    pub fn refresh_interval(&self) -> Duration {
        self.refresh
    }

    pub fn state(&self) -> LoadState<Weather> {
        self.store.current()
    }

    pub fn subscribe(&self) -> ViewStream<Weather> {
        self.store.subscribe()
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub async fn load(&self) -> Result<Arc<Weather>, CoreError> {
        debug!("loading weather");
        if self.store.snapshot().is_none() {
            self.store.set_loading();
        }
        let weather = until_cancelled(&self.cancel, async { Ok(self.fetch().await) }).await?;
        Ok(self.store.set_ready(weather))
    }

    async fn fetch(&self) -> Weather {
        let ((temperature, temperature_source), (sunrise, sunset, sun_source)) =
            tokio::join!(self.temperature(), self.sun_times());
        Weather {
            temperature,
            temperature_source,
            sunrise,
            sunset,
            sun_source,
        }
    }

    async fn temperature(&self) -> (Option<String>, WeatherSource) {
        let GeoPoint {
            latitude,
            longitude,
        } = self.location;

        match self.api.current_temperature(latitude, longitude).await {
            Ok(measurement) => return (Some(measurement.as_text()), WeatherSource::Backend),
            Err(e) => debug!(error = %e, "backend temperature unavailable, using public fallback"),
        }

        match self.public.current_temperature(latitude, longitude).await {
            Ok(celsius) => (Some(format!("{celsius:.1}")), WeatherSource::Public),
            Err(e) => {
                warn!(error = %e, "temperature unavailable");
                (None, WeatherSource::Unavailable)
            }
        }
    }

    /// Sunrise and sunset come from the same source: both from the backend
    /// or both from the fallback.
    async fn sun_times(&self) -> (Option<String>, Option<String>, WeatherSource) {
        let GeoPoint {
            latitude,
            longitude,
        } = self.location;

        let (sunrise, sunset) = tokio::join!(
            self.api.sunrise(latitude, longitude),
            self.api.sunset(latitude, longitude),
        );
        match (sunrise, sunset) {
            (Ok(sunrise), Ok(sunset)) => {
                return (
                    Some(sunrise.as_text()),
                    Some(sunset.as_text()),
                    WeatherSource::Backend,
                );
            }
            (Err(e), _) | (_, Err(e)) => {
                debug!(error = %e, "backend sun times unavailable, using public fallback");
            }
        }

        match self.public.sun_times(latitude, longitude).await {
            Ok(times) => (
                format_sun_time(&times.sunrise, &Local),
                format_sun_time(&times.sunset, &Local),
                WeatherSource::Public,
            ),
            Err(e) => {
                warn!(error = %e, "sun times unavailable");
                (None, None, WeatherSource::Unavailable)
            }
        }
    }
}

impl Drop for HomeFlow {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
