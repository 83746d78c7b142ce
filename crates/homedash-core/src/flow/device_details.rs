use std::future::Future;
use std::sync::Arc;

use futures_util::future::join_all;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use homedash_api::ApiClient;
use homedash_api::types::RollerBlindRequest;

use super::{guarded, until_cancelled};
use crate::blind::BlindRoller;
use crate::convert;
use crate::error::CoreError;
use crate::form::ComponentForm;
use crate::model::{
    Actuator, ActuatorModel, ActuatorType, Device, Room, Sensor, SensorModel, SensorReading,
    SensorType,
};
use crate::prompt::ConfirmPrompt;
use crate::store::{LoadState, ViewStore};
use crate::stream::ViewStream;

/// Everything the device-details page shows, plus its local UI state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceDetails {
    pub device: Device,
    pub room: Room,
    pub sensors: Vec<Sensor>,
    pub actuators: Vec<Actuator>,
    pub readings: Vec<SensorReading>,
    pub sensor_types: Vec<SensorType>,
    pub actuator_types: Vec<ActuatorType>,
    /// Models of the type picked in the add-sensor form.
    #[serde(skip)]
    pub sensor_models: Vec<SensorModel>,
    #[serde(skip)]
    pub actuator_models: Vec<ActuatorModel>,
    #[serde(skip)]
    pub blind: BlindRoller,
    #[serde(skip)]
    pub deactivate_prompt: ConfirmPrompt,
}

impl DeviceDetails {
    /// Newest reading by timestamp, whatever order the server sent.
    pub fn latest_reading(&self) -> Option<&SensorReading> {
        self.readings.iter().max_by(|a, b| a.cmp_recorded(b))
    }

    pub fn latest_reading_for(&self, sensor_id: &str) -> Option<&SensorReading> {
        self.readings
            .iter()
            .filter(|r| r.sensor_id == sensor_id)
            .max_by(|a, b| a.cmp_recorded(b))
    }

    /// Point the blind control at the first actuator and sensor when
    /// nothing (or something since removed) is selected.
    fn preselect_blind(&mut self) {
        self.blind
            .retain_actuators(self.actuators.iter().map(|a| a.id.as_str()));
        self.blind
            .retain_sensors(self.sensors.iter().map(|s| s.id.as_str()));

        let mut reseed = false;
        if self.blind.selected_actuator().is_none() {
            if let Some(first) = self.actuators.first() {
                self.blind.select_actuator(first.id.clone());
                reseed = true;
            }
        }
        let sensor = match self.blind.selected_sensor() {
            Some(_) if !reseed => return,
            Some(id) => id.to_owned(),
            None => match self.sensors.first() {
                Some(first) => first.id.clone(),
                None => return,
            },
        };
        let seed = self
            .latest_reading_for(&sensor)
            .and_then(SensorReading::as_percentage);
        self.blind.select_sensor(sensor, seed);
    }

    /// Add-sensor, add-actuator and the deactivate toggle are only offered
    /// while the device is active.
    pub fn forms_enabled(&self) -> bool {
        self.device.active
    }

    pub fn shows_blind_control(&self) -> bool {
        self.device.is_blind_roller()
    }
}

struct DeviceBundle {
    device: Device,
    room: Room,
    sensors: Vec<Sensor>,
    actuators: Vec<Actuator>,
    readings: Vec<SensorReading>,
}

/// Aggregates one device's page and runs its mutations.
///
/// Loading fans out to the device (then its room, sensors, actuators and
/// readings) and the two type catalogs concurrently. Mutations re-fetch
/// only the slices they touch.
pub struct DeviceDetailsFlow {
    api: Arc<ApiClient>,
    device_id: String,
    store: ViewStore<DeviceDetails>,
    cancel: CancellationToken,
}

impl DeviceDetailsFlow {
    pub fn new(
        api: Arc<ApiClient>,
        device_id: impl Into<String>,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            api,
            device_id: device_id.into(),
            store: ViewStore::new(),
            cancel,
        }
    }

    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    pub fn state(&self) -> LoadState<DeviceDetails> {
        self.store.current()
    }

    pub fn snapshot(&self) -> Option<Arc<DeviceDetails>> {
        self.store.snapshot()
    }

    pub fn subscribe(&self) -> ViewStream<DeviceDetails> {
        self.store.subscribe()
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    async fn run<T>(&self, fut: impl Future<Output = Result<T, CoreError>>) -> Result<T, CoreError> {
        until_cancelled(&self.cancel, fut).await
    }

    fn require_ready(&self) -> Result<Arc<DeviceDetails>, CoreError> {
        self.store
            .snapshot()
            .ok_or_else(|| CoreError::validation("device", "details are not loaded yet"))
    }

    // ── Loading ──────────────────────────────────────────────────────

    /// Fetch the whole page. Any failed branch puts the page in its error
    /// state; every failure is logged.
    pub async fn load(&self) -> Result<Arc<DeviceDetails>, CoreError> {
        debug!(device_id = %self.device_id, "loading device details");
        self.store.set_loading();
        match self.run(self.fetch_all()).await {
            Ok(details) => Ok(self.store.set_ready(details)),
            Err(CoreError::Cancelled) => Err(CoreError::Cancelled),
            Err(e) => {
                self.store.set_error(e.to_string());
                Err(e)
            }
        }
    }

    async fn fetch_all(&self) -> Result<DeviceDetails, CoreError> {
        let api = &*self.api;
        let (bundle, sensor_types, actuator_types) = tokio::join!(
            self.fetch_device_bundle(),
            fetch_sensor_types(api),
            fetch_actuator_types(api),
        );
        let bundle = bundle?;

        let mut details = DeviceDetails {
            device: bundle.device,
            room: bundle.room,
            sensors: bundle.sensors,
            actuators: bundle.actuators,
            readings: bundle.readings,
            sensor_types: sensor_types?,
            actuator_types: actuator_types?,
            sensor_models: Vec::new(),
            actuator_models: Vec::new(),
            blind: BlindRoller::default(),
            deactivate_prompt: ConfirmPrompt::default(),
        };
        details.preselect_blind();
        Ok(details)
    }

    async fn fetch_device_bundle(&self) -> Result<DeviceBundle, CoreError> {
        let api = &*self.api;
        let id = self.device_id.as_str();
        let device = Device::from(guarded("device", api.get_device(id).await)?);

        let (room, sensors, actuators, readings) = tokio::join!(
            api.get_room(&device.room_id),
            api.list_device_sensors(id),
            api.list_device_actuators(id),
            api.list_device_readings(id),
        );
        let room = guarded("room", room);
        let sensors = guarded("sensors", sensors);
        let actuators = guarded("actuators", actuators);
        let readings = guarded("readings", readings);

        Ok(DeviceBundle {
            device,
            room: room?.into(),
            sensors: convert::all(sensors?),
            actuators: convert::all(actuators?),
            readings: convert::all(readings?),
        })
    }

    /// Re-fetch the sensors and actuators slices.
    pub async fn resync_components(&self) -> Result<(), CoreError> {
        let id = self.device_id.as_str();
        let (sensors, actuators) = self
            .run(async {
                let (sensors, actuators) = tokio::join!(
                    self.api.list_device_sensors(id),
                    self.api.list_device_actuators(id),
                );
                let sensors = guarded("sensors", sensors);
                let actuators = guarded("actuators", actuators);
                Ok((
                    convert::all::<_, Sensor>(sensors?),
                    convert::all::<_, Actuator>(actuators?),
                ))
            })
            .await?;

        self.store.modify(|d| {
            d.sensors = sensors;
            d.actuators = actuators;
            d.preselect_blind();
        });
        Ok(())
    }

    async fn resync_blind_slices(&self) -> Result<(), CoreError> {
        let id = self.device_id.as_str();
        let (actuators, readings) = self
            .run(async {
                let (actuators, readings) = tokio::join!(
                    self.api.list_device_actuators(id),
                    self.api.list_device_readings(id),
                );
                let actuators = guarded("actuators", actuators);
                let readings = guarded("readings", readings);
                Ok((
                    convert::all::<_, Actuator>(actuators?),
                    convert::all::<_, SensorReading>(readings?),
                ))
            })
            .await?;

        self.store.modify(|d| {
            d.actuators = actuators;
            d.readings = readings;
            d.preselect_blind();
        });
        Ok(())
    }

    // ── Add sensor / actuator ────────────────────────────────────────

    /// Load the models of a sensor type into the add-sensor form.
    pub async fn select_sensor_type(&self, type_id: &str) -> Result<Vec<SensorModel>, CoreError> {
        self.require_ready()?;
        let models: Vec<SensorModel> = self
            .run(async {
                let wire = guarded("sensor models", self.api.list_sensor_models(type_id).await)?;
                Ok(convert::all(wire))
            })
            .await?;
        self.store.modify(|d| d.sensor_models.clone_from(&models));
        Ok(models)
    }

    /// Load the models of an actuator type into the add-actuator form.
    pub async fn select_actuator_type(
        &self,
        type_id: &str,
    ) -> Result<Vec<ActuatorModel>, CoreError> {
        self.require_ready()?;
        let models: Vec<ActuatorModel> = self
            .run(async {
                let wire = guarded(
                    "actuator models",
                    self.api.list_actuator_models(type_id).await,
                )?;
                Ok(convert::all(wire))
            })
            .await?;
        self.store.modify(|d| d.actuator_models.clone_from(&models));
        Ok(models)
    }

    pub async fn add_sensor(&self, form: &ComponentForm) -> Result<Sensor, CoreError> {
        let details = self.require_ready()?;
        require_active(&details)?;
        let body = form.sensor_request(&details.device.id)?;

        let created = self
            .run(async { Ok(Sensor::from(guarded("new sensor", self.api.add_sensor(&body).await)?)) })
            .await?;
        info!(sensor_id = %created.id, device_id = %self.device_id, "sensor added");

        self.store.modify(|d| d.sensors.push(created.clone()));
        if let Err(e) = self.resync_components().await {
            warn!(error = %e, "component resync after adding a sensor failed");
        }
        Ok(created)
    }

    pub async fn add_actuator(&self, form: &ComponentForm) -> Result<Actuator, CoreError> {
        let details = self.require_ready()?;
        require_active(&details)?;
        let body = form.actuator_request(&details.device.id)?;

        let created = self
            .run(async {
                Ok(Actuator::from(guarded(
                    "new actuator",
                    self.api.add_actuator(&body).await,
                )?))
            })
            .await?;
        info!(actuator_id = %created.id, device_id = %self.device_id, "actuator added");

        self.store.modify(|d| d.actuators.push(created.clone()));
        if let Err(e) = self.resync_components().await {
            warn!(error = %e, "component resync after adding an actuator failed");
        }
        Ok(created)
    }

    // ── Deactivation ─────────────────────────────────────────────────

    /// Show the confirmation prompt. No request is made.
    pub fn request_deactivate(&self) -> Result<(), CoreError> {
        let details = self.require_ready()?;
        require_active(&details)?;
        self.store.modify(|d| d.deactivate_prompt.show());
        Ok(())
    }

    /// Dismiss the prompt. Returns `false` when it was not showing.
    pub fn cancel_deactivate(&self) -> bool {
        self.store
            .modify(|d| d.deactivate_prompt.cancel())
            .unwrap_or(false)
    }

    /// Send the deactivation request; exactly one `PATCH` per confirmation.
    ///
    /// The displayed status only changes once the server accepts it.
    pub async fn confirm_deactivate(&self) -> Result<Device, CoreError> {
        let confirmed = self
            .store
            .modify(|d| d.deactivate_prompt.confirm())
            .unwrap_or(false);
        if !confirmed {
            return Err(CoreError::validation(
                "deactivation",
                "has not been requested",
            ));
        }

        let device = self
            .run(async {
                Ok(Device::from(guarded(
                    "deactivation",
                    self.api.deactivate_device(&self.device_id).await,
                )?))
            })
            .await?;
        info!(device_id = %device.id, active = device.active, "device deactivated");

        self.store.modify(|d| d.device = device.clone());
        Ok(device)
    }

    // ── Blind roller ─────────────────────────────────────────────────

    pub fn blind_increase(&self, actuator_id: &str) -> Option<u8> {
        self.store.modify(|d| d.blind.increase(actuator_id))
    }

    pub fn blind_decrease(&self, actuator_id: &str) -> Option<u8> {
        self.store.modify(|d| d.blind.decrease(actuator_id))
    }

    pub fn select_blind_actuator(&self, actuator_id: &str) {
        self.store.modify(|d| d.blind.select_actuator(actuator_id));
    }

    /// Select the paired sensor; its latest reading seeds the staged value.
    pub fn select_blind_sensor(&self, sensor_id: &str) {
        self.store.modify(|d| {
            let seed = d
                .latest_reading_for(sensor_id)
                .and_then(SensorReading::as_percentage);
            d.blind.select_sensor(sensor_id, seed);
        });
    }

    /// Send the staged value of the selected actuator, then refresh the
    /// actuators and readings. Returns the submitted percentage.
    pub async fn submit_blind(&self) -> Result<u8, CoreError> {
        let details = self.require_ready()?;
        let actuator_id = details
            .blind
            .selected_actuator()
            .ok_or_else(|| CoreError::validation("actuator", "is required"))?
            .to_owned();
        let sensor_id = details
            .blind
            .selected_sensor()
            .ok_or_else(|| CoreError::validation("sensor", "is required"))?
            .to_owned();
        let value = details.blind.value(&actuator_id);

        let body = RollerBlindRequest {
            actuator_id: actuator_id.clone(),
            sensor_id,
            input_value: value.to_string(),
        };
        self.run(async {
            guarded(
                "blind update",
                self.api.update_roller_blind(&actuator_id, &body).await,
            )?;
            Ok(())
        })
        .await?;
        info!(actuator_id = %actuator_id, value, "blind value submitted");

        if let Err(e) = self.resync_blind_slices().await {
            warn!(error = %e, "resync after blind update failed");
        }
        Ok(value)
    }
}

impl Drop for DeviceDetailsFlow {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

fn require_active(details: &DeviceDetails) -> Result<(), CoreError> {
    if details.forms_enabled() {
        Ok(())
    } else {
        Err(CoreError::validation("device", "is deactivated"))
    }
}

/// Sensor type ids, then each type's description and unit in parallel.
pub(crate) async fn fetch_sensor_types(api: &ApiClient) -> Result<Vec<SensorType>, CoreError> {
    let ids = guarded("sensor types", api.list_sensor_types().await)?;
    let details = join_all(ids.iter().map(|t| api.get_sensor_type(&t.sensor_type_id))).await;
    details
        .into_iter()
        .map(|result| guarded("sensor type", result).map(SensorType::from))
        .collect()
}

pub(crate) async fn fetch_actuator_types(api: &ApiClient) -> Result<Vec<ActuatorType>, CoreError> {
    let types = guarded("actuator types", api.list_actuator_types().await)?;
    Ok(convert::all(types))
}
