//! Wire types for the SmartHome backend.
//!
//! Field names follow the backend's JSON exactly, which mixes `camelCase`
//! (`roomId`) with upper-case id suffixes (`sensorModelID`). Hypermedia
//! `_links` blocks on responses are ignored during deserialization.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ── Rooms ────────────────────────────────────────────────────────────

/// Room id entry: from `GET /houses/{houseId}/rooms`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomRef {
    pub room_id: String,
}

/// Full room record: from `GET /rooms/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    pub room_id: String,
    #[serde(default)]
    pub room_name: String,
    #[serde(default)]
    pub floor_number: i32,
    #[serde(default)]
    pub length: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(default)]
    pub house_id: Option<String>,
    #[serde(default, alias = "isInside")]
    pub inside: Option<bool>,
}

// ── Devices ──────────────────────────────────────────────────────────

/// Device id entry: from `GET /rooms/{roomId}/devices`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceRef {
    #[serde(alias = "deviceId")]
    pub id: String,
}

/// Full device record: from `GET /devices/{id}`, and the body returned by
/// `POST /devices` and the deactivation `PATCH`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceResponse {
    pub device_id: String,
    pub room_id: String,
    #[serde(default)]
    pub device_name: String,
    #[serde(default)]
    pub device_model: String,
    pub activation_status: bool,
}

/// Body for `POST /devices`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceRequest {
    pub room_id: String,
    pub device_name: String,
    pub device_model: String,
    pub activation_status: bool,
}

// ── Sensors ──────────────────────────────────────────────────────────

/// Sensor record: from `GET /sensors/{id}` and `GET /devices/{id}/sensors`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorResponse {
    #[serde(rename = "sensorID", alias = "sensorId")]
    pub sensor_id: String,
    #[serde(rename = "sensorModelID")]
    pub sensor_model_id: String,
    #[serde(rename = "deviceID", alias = "deviceId", default)]
    pub device_id: Option<String>,
}

/// Body for `POST /sensors`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorRequest {
    #[serde(rename = "deviceID")]
    pub device_id: String,
    #[serde(rename = "sensorModelID")]
    pub sensor_model_id: String,
}

// ── Actuators ────────────────────────────────────────────────────────

/// Actuator record: from `GET /actuators/{id}` and `GET /devices/{id}/actuators`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActuatorResponse {
    #[serde(rename = "actuatorID", alias = "actuatorId")]
    pub actuator_id: String,
    #[serde(rename = "actuatorModelID")]
    pub actuator_model_id: String,
    #[serde(rename = "deviceID", alias = "deviceId", default)]
    pub device_id: Option<String>,
}

/// Body for `POST /actuators`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActuatorRequest {
    #[serde(rename = "deviceID")]
    pub device_id: String,
    #[serde(rename = "actuatorModelID")]
    pub actuator_model_id: String,
}

/// Body for `PATCH /actuators/{id}` on a blind roller.
///
/// `inputValue` travels as a decimal string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollerBlindRequest {
    #[serde(rename = "actuatorID")]
    pub actuator_id: String,
    #[serde(rename = "sensorID")]
    pub sensor_id: String,
    #[serde(rename = "inputValue")]
    pub input_value: String,
}

// ── Readings ─────────────────────────────────────────────────────────

/// Sensor reading: from `GET /devices/{id}/sensor-readings` and
/// `GET /sensor-readings/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingResponse {
    #[serde(rename = "sensorReadingID")]
    pub sensor_reading_id: String,
    pub reading: String,
    #[serde(rename = "deviceID", default)]
    pub device_id: Option<String>,
    #[serde(rename = "sensorID")]
    pub sensor_id: String,
    #[serde(rename = "timeStamp", default)]
    pub time_stamp: String,
}

// ── Catalog ──────────────────────────────────────────────────────────

/// Sensor type. The list endpoint only fills the id; `GET /sensor-types/{id}`
/// adds description and unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorTypeResponse {
    #[serde(rename = "sensorTypeID")]
    pub sensor_type_id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
}

/// Actuator type: from `GET /actuator-types[/{id}]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActuatorTypeResponse {
    #[serde(rename = "actuatorTypeID")]
    pub actuator_type_id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
}

/// Sensor model: from `GET /sensor-models?sensorTypeID=`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorModelResponse {
    #[serde(rename = "sensorModelID")]
    pub sensor_model_id: String,
}

/// Actuator model: from `GET /actuator-models?actuatorTypeID=`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActuatorModelResponse {
    #[serde(rename = "actuatorModelID")]
    pub actuator_model_id: String,
}

// ── Weather ──────────────────────────────────────────────────────────

/// Backend weather proxy answer. The measurement is a number for the
/// temperature and a time string for sunrise/sunset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementResponse {
    pub measurement: Value,
}

impl MeasurementResponse {
    /// Render the measurement as display text (`21.5`, `06:12`).
    pub fn as_text(&self) -> String {
        match &self.measurement {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        }
    }
}
