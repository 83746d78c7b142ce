// ── Blind-roller percentage staging ──
//
// Percentages live here until explicitly submitted. Nothing in this module
// talks to the network.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Change applied by one increase/decrease click.
pub const STEP: u8 = 10;
pub const MIN_PERCENT: u8 = 0;
pub const MAX_PERCENT: u8 = 100;
/// Starting value when no reading is known.
pub const DEFAULT_PERCENT: u8 = 50;

/// Staged percentages, one per actuator, plus the actuator/sensor pair the
/// next submission targets.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BlindRoller {
    values: BTreeMap<String, u8>,
    selected_actuator: Option<String>,
    selected_sensor: Option<String>,
}

impl BlindRoller {
    /// Staged value for an actuator (default 50).
    pub fn value(&self, actuator_id: &str) -> u8 {
        self.values
            .get(actuator_id)
            .copied()
            .unwrap_or(DEFAULT_PERCENT)
    }

    pub fn increase(&mut self, actuator_id: &str) -> u8 {
        let next = self.value(actuator_id).saturating_add(STEP).min(MAX_PERCENT);
        self.values.insert(actuator_id.to_owned(), next);
        next
    }

    pub fn decrease(&mut self, actuator_id: &str) -> u8 {
        let next = self.value(actuator_id).saturating_sub(STEP).max(MIN_PERCENT);
        self.values.insert(actuator_id.to_owned(), next);
        next
    }

    /// Stage an explicit value, clamped to `[0, 100]`.
    pub fn set(&mut self, actuator_id: &str, value: i64) -> u8 {
        let clamped = u8::try_from(value.clamp(0, i64::from(MAX_PERCENT))).unwrap_or(MAX_PERCENT);
        self.values.insert(actuator_id.to_owned(), clamped);
        clamped
    }

    pub fn select_actuator(&mut self, actuator_id: impl Into<String>) {
        self.selected_actuator = Some(actuator_id.into());
    }

    /// Select the sensor whose reading accompanies the submission.
    ///
    /// The selected actuator's staged value restarts from `seed`, the
    /// sensor's latest percentage, or from 50 when it has none.
    pub fn select_sensor(&mut self, sensor_id: impl Into<String>, seed: Option<u8>) {
        self.selected_sensor = Some(sensor_id.into());
        if let Some(actuator) = self.selected_actuator.clone() {
            self.set(&actuator, i64::from(seed.unwrap_or(DEFAULT_PERCENT)));
        }
    }

    pub fn selected_actuator(&self) -> Option<&str> {
        self.selected_actuator.as_deref()
    }

    pub fn selected_sensor(&self) -> Option<&str> {
        self.selected_sensor.as_deref()
    }

    /// Drop staged values for actuators that no longer exist.
    pub fn retain_actuators<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        let keep: Vec<&str> = ids.into_iter().collect();
        self.values.retain(|id, _| keep.contains(&id.as_str()));
        if let Some(selected) = &self.selected_actuator {
            if !keep.contains(&selected.as_str()) {
                self.selected_actuator = None;
            }
        }
    }

    /// Forget the selected sensor if it no longer exists.
    pub fn retain_sensors<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        let keep: Vec<&str> = ids.into_iter().collect();
        if let Some(selected) = &self.selected_sensor {
            if !keep.contains(&selected.as_str()) {
                self.selected_sensor = None;
            }
        }
    }
}
