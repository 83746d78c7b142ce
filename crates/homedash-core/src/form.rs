// ── Form validation gate ──
//
// Every form validates before any request is built. A form that fails
// validation never reaches the network.

use serde::{Deserialize, Serialize};

use homedash_api::types::{ActuatorRequest, DeviceRequest, SensorRequest};

use crate::error::CoreError;

fn required(field: &str, value: &str) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(CoreError::validation(field, "is required"))
    } else {
        Ok(trimmed.to_owned())
    }
}

/// The add-device form on a room's device page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDeviceForm {
    pub device_name: String,
    pub device_model: String,
}

impl NewDeviceForm {
    pub fn new(device_name: impl Into<String>, device_model: impl Into<String>) -> Self {
        Self {
            device_name: device_name.into(),
            device_model: device_model.into(),
        }
    }

    /// Build the request body. New devices are always created active.
    pub fn validate(&self, room_id: &str) -> Result<DeviceRequest, CoreError> {
        Ok(DeviceRequest {
            room_id: required("roomId", room_id)?,
            device_name: required("deviceName", &self.device_name)?,
            device_model: required("deviceModel", &self.device_model)?,
            activation_status: true,
        })
    }
}

/// The add-sensor / add-actuator form: a type, then a model of that type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentForm {
    pub type_id: String,
    pub model_id: String,
}

impl ComponentForm {
    pub fn new(type_id: impl Into<String>, model_id: impl Into<String>) -> Self {
        Self {
            type_id: type_id.into(),
            model_id: model_id.into(),
        }
    }

    pub fn sensor_request(&self, device_id: &str) -> Result<SensorRequest, CoreError> {
        self.check()?;
        Ok(SensorRequest {
            device_id: device_id.to_owned(),
            sensor_model_id: self.model_id.trim().to_owned(),
        })
    }

    pub fn actuator_request(&self, device_id: &str) -> Result<ActuatorRequest, CoreError> {
        self.check()?;
        Ok(ActuatorRequest {
            device_id: device_id.to_owned(),
            actuator_model_id: self.model_id.trim().to_owned(),
        })
    }

    fn check(&self) -> Result<(), CoreError> {
        required("type", &self.type_id)?;
        required("model", &self.model_id)?;
        Ok(())
    }
}

/// The edit-device form. Editing is local only; saving navigates back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditDeviceForm {
    pub name: String,
    pub description: String,
}

impl EditDeviceForm {
    pub fn validate(&self) -> Result<(), CoreError> {
        required("name", &self.name).map(|_| ())
    }
}
