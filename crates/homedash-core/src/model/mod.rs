// ── Domain model ──
//
// Plain records keyed by the ids the backend assigns. Nothing here is
// persisted between sessions.

mod catalog;
mod component;
mod device;
mod room;
mod weather;

pub use catalog::{ActuatorModel, ActuatorType, SensorModel, SensorType};
pub use component::{Actuator, Sensor, SensorReading};
pub use device::Device;
pub use room::Room;
pub use weather::{Weather, WeatherSource};
