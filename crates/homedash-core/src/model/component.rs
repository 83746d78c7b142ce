// ── Sensors, actuators, and readings ──

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Local timestamp layouts the backend has been seen to send.
const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// A device sub-component that produces readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sensor {
    pub id: String,
    pub model_id: String,
    pub device_id: Option<String>,
}

/// A device sub-component that can be commanded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actuator {
    pub id: String,
    pub model_id: String,
    pub device_id: Option<String>,
}

/// One value reported by a sensor. Read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub id: String,
    pub sensor_id: String,
    pub device_id: Option<String>,
    /// Raw value as reported (`"21.5"`, `"40"`, `"true"`).
    pub value: String,
    pub timestamp: String,
}

impl SensorReading {
    /// The value as a blind-roller percentage, if it is numeric.
    pub fn as_percentage(&self) -> Option<u8> {
        let value: f64 = self.value.trim().parse().ok()?;
        if !value.is_finite() {
            return None;
        }
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            clippy::as_conversions
        )]
        let pct = value.round().clamp(0.0, 100.0) as u8;
        Some(pct)
    }

    /// The reading's timestamp, if it parses as RFC 3339 or a local
    /// date-time.
    pub fn recorded_at(&self) -> Option<NaiveDateTime> {
        let raw = self.timestamp.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.naive_utc());
        }
        NAIVE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    }

    /// Chronological order. Unparseable timestamps sort before parsed ones
    /// and fall back to comparing the raw text.
    pub fn cmp_recorded(&self, other: &Self) -> Ordering {
        self.recorded_at()
            .cmp(&other.recorded_at())
            .then_with(|| self.timestamp.cmp(&other.timestamp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(value: &str) -> SensorReading {
        stamped(value, "")
    }

    fn stamped(value: &str, timestamp: &str) -> SensorReading {
        SensorReading {
            id: "SR1".into(),
            sensor_id: "S1".into(),
            device_id: None,
            value: value.into(),
            timestamp: timestamp.into(),
        }
    }

    #[test]
    fn percentage_parsing_clamps() {
        assert_eq!(reading("40").as_percentage(), Some(40));
        assert_eq!(reading("72.6").as_percentage(), Some(73));
        assert_eq!(reading("140").as_percentage(), Some(100));
        assert_eq!(reading("-3").as_percentage(), Some(0));
        assert_eq!(reading("open").as_percentage(), None);
    }

    #[test]
    fn timestamps_order_chronologically() {
        let morning = stamped("10", "2026-01-01T09:00");
        let noon = stamped("90", "2026-01-01T11:00:30");
        let utc = stamped("50", "2026-01-01T12:00:00Z");
        assert_eq!(morning.cmp_recorded(&noon), Ordering::Less);
        assert_eq!(utc.cmp_recorded(&noon), Ordering::Greater);
        assert_eq!(stamped("1", "whenever").recorded_at(), None);
        assert_eq!(stamped("1", "whenever").cmp_recorded(&morning), Ordering::Less);
    }
}
