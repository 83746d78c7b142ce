// Device endpoints
//
// Device lookup and creation, deactivation, and the per-device sensor,
// actuator, and reading collections.

use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::types::{
    ActuatorResponse, DeviceRequest, DeviceResponse, ReadingResponse, SensorResponse,
};

impl ApiClient {
    /// `GET /devices/{id}`
    pub async fn get_device(&self, device_id: &str) -> Result<DeviceResponse, Error> {
        self.get(&format!("devices/{device_id}")).await
    }

    /// Create a device in a room. Returns the record the server stored.
    ///
    /// `POST /devices`
    pub async fn add_device(&self, body: &DeviceRequest) -> Result<DeviceResponse, Error> {
        debug!(room_id = %body.room_id, name = %body.device_name, "adding device");
        self.post("devices", body).await
    }

    /// Deactivate a device. There is no matching activate endpoint.
    ///
    /// `PATCH /devices?getBy=active&deviceID={id}`
    pub async fn deactivate_device(&self, device_id: &str) -> Result<DeviceResponse, Error> {
        debug!(device_id, "deactivating device");
        self.patch_with_params(
            "devices",
            &[("getBy", "active".to_owned()), ("deviceID", device_id.to_owned())],
        )
        .await
    }

    /// `GET /devices/{id}/sensors`
    pub async fn list_device_sensors(&self, device_id: &str) -> Result<Vec<SensorResponse>, Error> {
        self.get(&format!("devices/{device_id}/sensors")).await
    }

    /// `GET /devices/{id}/actuators`
    pub async fn list_device_actuators(
        &self,
        device_id: &str,
    ) -> Result<Vec<ActuatorResponse>, Error> {
        self.get(&format!("devices/{device_id}/actuators")).await
    }

    /// `GET /devices/{id}/sensor-readings`
    pub async fn list_device_readings(
        &self,
        device_id: &str,
    ) -> Result<Vec<ReadingResponse>, Error> {
        self.get(&format!("devices/{device_id}/sensor-readings")).await
    }
}
