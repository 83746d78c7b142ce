// Catalog endpoints
//
// Sensor/actuator types and the models available for each type. These feed
// the add-sensor and add-actuator forms.

use crate::client::ApiClient;
use crate::error::Error;
use crate::types::{
    ActuatorModelResponse, ActuatorTypeResponse, SensorModelResponse, SensorTypeResponse,
};

impl ApiClient {
    // ── Sensor types & models ────────────────────────────────────────

    /// `GET /sensor-types` (ids only)
    pub async fn list_sensor_types(&self) -> Result<Vec<SensorTypeResponse>, Error> {
        self.get("sensor-types").await
    }

    /// `GET /sensor-types/{id}` (with description and unit)
    pub async fn get_sensor_type(&self, type_id: &str) -> Result<SensorTypeResponse, Error> {
        self.get(&format!("sensor-types/{type_id}")).await
    }

    /// `GET /sensor-models?sensorTypeID={id}`
    pub async fn list_sensor_models(
        &self,
        sensor_type_id: &str,
    ) -> Result<Vec<SensorModelResponse>, Error> {
        self.get_with_params(
            "sensor-models",
            &[("sensorTypeID", sensor_type_id.to_owned())],
        )
        .await
    }

    // ── Actuator types & models ──────────────────────────────────────

    /// `GET /actuator-types`
    pub async fn list_actuator_types(&self) -> Result<Vec<ActuatorTypeResponse>, Error> {
        self.get("actuator-types").await
    }

    /// `GET /actuator-types/{id}`
    pub async fn get_actuator_type(&self, type_id: &str) -> Result<ActuatorTypeResponse, Error> {
        self.get(&format!("actuator-types/{type_id}")).await
    }

    /// `GET /actuator-models?actuatorTypeID={id}`
    pub async fn list_actuator_models(
        &self,
        actuator_type_id: &str,
    ) -> Result<Vec<ActuatorModelResponse>, Error> {
        self.get_with_params(
            "actuator-models",
            &[("actuatorTypeID", actuator_type_id.to_owned())],
        )
        .await
    }
}
