// ── Wire → domain conversions ──
//
// The backend's JSON names (`sensorModelID`, `activationStatus`, ...) stop
// here. Everything above this module works with the domain model.

use homedash_api::types::{
    ActuatorModelResponse, ActuatorResponse, ActuatorTypeResponse, DeviceResponse,
    ReadingResponse, RoomResponse, SensorModelResponse, SensorResponse, SensorTypeResponse,
};

use crate::model::{
    Actuator, ActuatorModel, ActuatorType, Device, Room, Sensor, SensorModel, SensorReading,
    SensorType,
};

impl From<RoomResponse> for Room {
    fn from(r: RoomResponse) -> Self {
        Self {
            id: r.room_id,
            name: r.room_name,
            floor_number: r.floor_number,
            length: r.length,
            width: r.width,
            height: r.height,
            house_id: r.house_id,
            inside: r.inside.unwrap_or(true),
        }
    }
}

impl From<DeviceResponse> for Device {
    fn from(d: DeviceResponse) -> Self {
        Self {
            id: d.device_id,
            room_id: d.room_id,
            name: d.device_name,
            model: d.device_model,
            active: d.activation_status,
        }
    }
}

impl From<SensorResponse> for Sensor {
    fn from(s: SensorResponse) -> Self {
        Self {
            id: s.sensor_id,
            model_id: s.sensor_model_id,
            device_id: s.device_id,
        }
    }
}

impl From<ActuatorResponse> for Actuator {
    fn from(a: ActuatorResponse) -> Self {
        Self {
            id: a.actuator_id,
            model_id: a.actuator_model_id,
            device_id: a.device_id,
        }
    }
}

impl From<ReadingResponse> for SensorReading {
    fn from(r: ReadingResponse) -> Self {
        Self {
            id: r.sensor_reading_id,
            sensor_id: r.sensor_id,
            device_id: r.device_id,
            value: r.reading,
            timestamp: r.time_stamp,
        }
    }
}

impl From<SensorTypeResponse> for SensorType {
    fn from(t: SensorTypeResponse) -> Self {
        Self {
            id: t.sensor_type_id,
            description: t.description,
            unit: t.unit,
        }
    }
}

impl From<ActuatorTypeResponse> for ActuatorType {
    fn from(t: ActuatorTypeResponse) -> Self {
        Self {
            id: t.actuator_type_id,
            description: t.description,
            unit: t.unit,
        }
    }
}

impl From<SensorModelResponse> for SensorModel {
    fn from(m: SensorModelResponse) -> Self {
        Self {
            id: m.sensor_model_id,
        }
    }
}

impl From<ActuatorModelResponse> for ActuatorModel {
    fn from(m: ActuatorModelResponse) -> Self {
        Self {
            id: m.actuator_model_id,
        }
    }
}

/// Convert a vector of wire records.
pub(crate) fn all<W, D: From<W>>(wire: Vec<W>) -> Vec<D> {
    wire.into_iter().map(D::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_defaults_to_inside() {
        let room: Room = RoomResponse {
            room_id: "R1".into(),
            room_name: "garden".into(),
            floor_number: 0,
            length: 1.0,
            width: 1.0,
            height: 1.0,
            house_id: None,
            inside: None,
        }
        .into();
        assert!(room.inside);
        assert_eq!(room.location_label(), "Inside");
    }

    #[test]
    fn device_activation_maps_to_active() {
        let device: Device = DeviceResponse {
            device_id: "D1".into(),
            room_id: "R1".into(),
            device_name: "Heater".into(),
            device_model: "H-2".into(),
            activation_status: false,
        }
        .into();
        assert!(!device.active);
        assert_eq!(device.room_id, "R1");
    }
}
