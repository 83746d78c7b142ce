// Sensor endpoints

use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::types::{SensorRequest, SensorResponse};

impl ApiClient {
    /// `GET /sensors/{id}`
    pub async fn get_sensor(&self, sensor_id: &str) -> Result<SensorResponse, Error> {
        self.get(&format!("sensors/{sensor_id}")).await
    }

    /// Attach a new sensor of the given model to a device.
    ///
    /// `POST /sensors` with `{"deviceID": "...", "sensorModelID": "..."}`
    pub async fn add_sensor(&self, body: &SensorRequest) -> Result<SensorResponse, Error> {
        debug!(device_id = %body.device_id, model = %body.sensor_model_id, "adding sensor");
        self.post("sensors", body).await
    }
}
