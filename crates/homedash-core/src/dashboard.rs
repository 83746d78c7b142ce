// ── Dashboard facade ──
//
// Owns the two HTTP clients and hands out one flow per page. Each flow
// gets a child of the dashboard's cancellation token, so `shutdown()`
// stops every in-flight request at once.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use homedash_api::{ApiClient, PublicWeatherClient, TransportConfig};

use crate::config::DashboardConfig;
use crate::convert;
use crate::error::CoreError;
use crate::flow::{self, DeviceDetailsFlow, HomeFlow, RoomDevicesFlow, RoomsFlow};
use crate::model::{ActuatorModel, ActuatorType, SensorModel, SensorType};

/// The main entry point for consumers.
///
/// Cheaply cloneable via `Arc<DashboardInner>`.
#[derive(Clone)]
pub struct Dashboard {
    inner: Arc<DashboardInner>,
}

struct DashboardInner {
    config: DashboardConfig,
    api: Arc<ApiClient>,
    weather: Arc<PublicWeatherClient>,
    cancel: CancellationToken,
}

impl Dashboard {
    /// Build the HTTP clients described by `config`. Makes no requests.
    pub fn new(config: DashboardConfig) -> Result<Self, CoreError> {
        let transport = TransportConfig::default().with_timeout(config.timeout);
        let api = ApiClient::new(config.api_url.as_str(), &transport)?;
        let weather = PublicWeatherClient::new(
            config.sun_times_url.as_str(),
            config.forecast_url.as_str(),
            &transport,
        )?;
        info!(
            api_url = %config.api_url,
            timeout_ms = transport.timeout_ms(),
            "dashboard configured"
        );
        Ok(Self::from_clients(config, api, weather))
    }

    /// Assemble a dashboard around pre-built clients.
    pub fn from_clients(
        config: DashboardConfig,
        api: ApiClient,
        weather: PublicWeatherClient,
    ) -> Self {
        Self {
            inner: Arc::new(DashboardInner {
                config,
                api: Arc::new(api),
                weather: Arc::new(weather),
                cancel: CancellationToken::new(),
            }),
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.inner.config
    }

    /// Direct access to the backend client, for one-shot CLI queries.
    pub fn api(&self) -> &ApiClient {
        &self.inner.api
    }

    pub fn public_weather(&self) -> &PublicWeatherClient {
        &self.inner.weather
    }

    // ── Page flows ───────────────────────────────────────────────────

    pub fn home(&self) -> HomeFlow {
        HomeFlow::new(
            Arc::clone(&self.inner.api),
            Arc::clone(&self.inner.weather),
            self.inner.config.location,
            self.inner.config.weather_refresh,
            self.inner.cancel.child_token(),
        )
    }

    pub fn rooms(&self) -> RoomsFlow {
        RoomsFlow::new(
            Arc::clone(&self.inner.api),
            self.inner.config.house_id.clone(),
            self.inner.cancel.child_token(),
        )
    }

    pub fn room_devices(&self, room_id: &str) -> RoomDevicesFlow {
        RoomDevicesFlow::new(
            Arc::clone(&self.inner.api),
            room_id,
            self.inner.cancel.child_token(),
        )
    }

    pub fn device_details(&self, device_id: &str) -> DeviceDetailsFlow {
        DeviceDetailsFlow::new(
            Arc::clone(&self.inner.api),
            device_id,
            self.inner.cancel.child_token(),
        )
    }

    // ── Catalog ──────────────────────────────────────────────────────

    /// Every sensor type, with description and unit.
    pub async fn sensor_types(&self) -> Result<Vec<SensorType>, CoreError> {
        flow::fetch_sensor_types(&self.inner.api).await
    }

    pub async fn actuator_types(&self) -> Result<Vec<ActuatorType>, CoreError> {
        flow::fetch_actuator_types(&self.inner.api).await
    }

    pub async fn sensor_models(&self, type_id: &str) -> Result<Vec<SensorModel>, CoreError> {
        Ok(convert::all(self.inner.api.list_sensor_models(type_id).await?))
    }

    pub async fn actuator_models(&self, type_id: &str) -> Result<Vec<ActuatorModel>, CoreError> {
        Ok(convert::all(
            self.inner.api.list_actuator_models(type_id).await?,
        ))
    }

    /// Cancel every flow created from this dashboard.
    pub fn shutdown(&self) {
        debug!("shutting down dashboard");
        self.inner.cancel.cancel();
    }
}
