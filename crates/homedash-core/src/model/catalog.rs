// ── Sensor/actuator catalog ──
//
// Types and models offered by the add-sensor and add-actuator forms.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorType {
    pub id: String,
    pub description: Option<String>,
    pub unit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActuatorType {
    pub id: String,
    pub description: Option<String>,
    pub unit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorModel {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActuatorModel {
    pub id: String,
}

impl SensorType {
    /// `Temperature (C)` style label for pickers.
    pub fn label(&self) -> String {
        label(&self.id, self.description.as_deref(), self.unit.as_deref())
    }
}

impl ActuatorType {
    pub fn label(&self) -> String {
        label(&self.id, self.description.as_deref(), self.unit.as_deref())
    }
}

fn label(id: &str, description: Option<&str>, unit: Option<&str>) -> String {
    let name = description.filter(|d| !d.is_empty()).unwrap_or(id);
    match unit.filter(|u| !u.is_empty()) {
        Some(unit) => format!("{name} ({unit})"),
        None => name.to_owned(),
    }
}
