//! All possible UI actions. Actions are the sole mechanism for state mutation.

use homedash_core::{DeviceDetails, LoadState, Route, RoomDevices, RoomsOverview, Weather};

/// Notification severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A toast notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
}

impl Notification {
    pub fn success(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            level: NotificationLevel::Success,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            level: NotificationLevel::Error,
        }
    }

    pub fn warning(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            level: NotificationLevel::Warning,
        }
    }

    pub fn info(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            level: NotificationLevel::Info,
        }
    }
}

/// Kind of component added from the device-details page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Sensor,
    Actuator,
}

impl ComponentKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Sensor => "sensor",
            Self::Actuator => "actuator",
        }
    }
}

/// Every state transition in the TUI is expressed as an Action.
#[derive(Debug, Clone)]
pub enum Action {
    // ── Lifecycle ──────────────────────────────────────────────────
    Quit,
    Tick,
    Render,
    Resize(u16, u16),

    // ── Navigation ────────────────────────────────────────────────
    Navigate(Route),
    GoBack,
    ToggleHelp,

    // ── Page data (forwarded from the page's flow) ───────────────
    WeatherUpdated(LoadState<Weather>),
    RoomsUpdated(LoadState<RoomsOverview>),
    RoomDevicesUpdated(LoadState<RoomDevices>),
    DeviceDetailsUpdated(LoadState<DeviceDetails>),

    // ── Operation results ─────────────────────────────────────────
    /// Add-device form submitted; `Err` carries the message to show.
    DeviceAddResult(Result<(), String>),
    /// Models for the chosen type were fetched into the page state.
    ModelsLoaded(ComponentKind, Result<(), String>),
    ComponentAddResult(ComponentKind, Result<(), String>),
    /// Blind-roller value sent; `Ok` carries the submitted percentage.
    BlindSubmitted(Result<u8, String>),

    // ── Notifications ─────────────────────────────────────────────
    Notify(Notification),
}
