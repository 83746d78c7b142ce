// Actuator endpoints
//
// Lookup, creation, and the blind-roller position update.

use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::types::{ActuatorRequest, ActuatorResponse, RollerBlindRequest};

impl ApiClient {
    /// `GET /actuators/{id}`
    pub async fn get_actuator(&self, actuator_id: &str) -> Result<ActuatorResponse, Error> {
        self.get(&format!("actuators/{actuator_id}")).await
    }

    /// Attach a new actuator of the given model to a device.
    ///
    /// `POST /actuators` with `{"deviceID": "...", "actuatorModelID": "..."}`
    pub async fn add_actuator(&self, body: &ActuatorRequest) -> Result<ActuatorResponse, Error> {
        debug!(device_id = %body.device_id, model = %body.actuator_model_id, "adding actuator");
        self.post("actuators", body).await
    }

    /// Push a blind-roller percentage.
    ///
    /// `PATCH /actuators/{id}` with `{"actuatorID", "sensorID", "inputValue"}`.
    /// The response shape varies by actuator model, so it is returned raw.
    pub async fn update_roller_blind(
        &self,
        actuator_id: &str,
        body: &RollerBlindRequest,
    ) -> Result<serde_json::Value, Error> {
        debug!(actuator_id, value = %body.input_value, "updating roller blind");
        self.patch(&format!("actuators/{actuator_id}"), body).await
    }
}
