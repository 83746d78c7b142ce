// ── User-facing notices ──
//
// Texts shared by the terminal dashboard and the command line.

use crate::error::CoreError;

pub const DEVICE_ADDED: &str = "Device added successfully!";
pub const VALUE_UPDATED: &str = "Value updated successfully!";
pub const VALUE_UPDATE_FAILED: &str = "Failed to update value";
pub const SENSOR_ADDED: &str = "Sensor added successfully!";
pub const ACTUATOR_ADDED: &str = "Actuator added successfully!";
pub const DEVICE_DEACTIVATED: &str = "Device deactivated";
pub const CONFIRM_DEACTIVATE: &str = "Are you sure you want to deactivate the device?";
pub const LOADING: &str = "Loading...";
pub const NO_READINGS: &str = "No readings available";
pub const NO_DATA: &str = "No data available";

pub fn device_add_failed(err: &CoreError) -> String {
    format!("Failed to add device: {err}")
}

pub fn component_add_failed(kind: &str, err: &CoreError) -> String {
    format!("Failed to add {kind}: {err}")
}

pub fn deactivate_failed(err: &CoreError) -> String {
    format!("Failed to deactivate device: {err}")
}

/// Inline text for a page whose load failed.
pub fn error_line(message: &str) -> String {
    format!("Error: {message}")
}

/// Home page footer.
pub fn footer(year: i32) -> String {
    format!("© {year} SmartHome Grupo 2. All rights reserved.")
}
