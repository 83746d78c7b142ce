//! View-state and aggregation layer between `homedash-api` and the UIs
//! (CLI / TUI).
//!
//! - **[`Dashboard`]**: Facade owning the backend and public-weather
//!   clients. Hands out one flow per page, each with a child cancellation
//!   token so leaving a page (or [`Dashboard::shutdown`]) stops its requests.
//!
//! - **Flows** ([`flow`]): [`HomeFlow`], [`RoomsFlow`], [`RoomDevicesFlow`]
//!   and [`DeviceDetailsFlow`]. Each fans out the requests its page needs,
//!   stores the result, and re-fetches only the slices a mutation touched.
//!
//! - **[`ViewStore<T>`]**: One page's snapshot behind a
//!   `tokio::sync::watch` channel, as a [`LoadState`]
//!   (`Idle` / `Loading` / `Ready` / `Error`).
//!
//! - **[`ViewStream<T>`]**: Subscription handle for reactive rendering.
//!
//! - **Local state**: [`BlindRoller`] percentage staging, [`ConfirmPrompt`]
//!   for deactivation, and the validated [`form`]s.
//!
//! - **Domain model** ([`model`]): Rooms, devices, sensors, actuators,
//!   readings, catalog entries and weather, free of backend JSON naming.

pub mod blind;
pub mod config;
pub mod convert;
pub mod dashboard;
pub mod error;
pub mod flow;
pub mod form;
pub mod model;
pub mod notice;
pub mod prompt;
pub mod route;
pub mod store;
pub mod stream;

// ── Primary re-exports ──────────────────────────────────────────────
pub use blind::BlindRoller;
pub use config::{DashboardConfig, GeoPoint};
pub use dashboard::Dashboard;
pub use error::CoreError;
pub use flow::{
    DeviceDetails, DeviceDetailsFlow, HomeFlow, RoomDevices, RoomDevicesFlow, RoomsFlow,
    RoomsOverview,
};
pub use form::{ComponentForm, EditDeviceForm, NewDeviceForm};
pub use prompt::ConfirmPrompt;
pub use route::Route;
pub use store::{LoadState, ViewStore};
pub use stream::ViewStream;

pub use model::{
    Actuator, ActuatorModel, ActuatorType, Device, Room, Sensor, SensorModel, SensorReading,
    SensorType, Weather, WeatherSource,
};
