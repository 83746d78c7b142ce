// ── Client-side routes ──

use std::fmt;

/// Pages the dashboard can navigate to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/`
    Home,
    /// `/rooms`
    Rooms,
    /// `/rooms/{roomId}/devices`
    RoomDevices { room_id: String },
    /// `/devices/{deviceId}/details`
    DeviceDetails { device_id: String },
    /// `/devices/{deviceId}/edit-device`
    EditDevice { device_id: String },
    /// Anything else; renders the error page.
    NotFound { path: String },
}

impl Route {
    /// Match a path against the route table. Never fails: unknown paths
    /// become [`Route::NotFound`].
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let segments: Vec<&str> = trimmed
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Self::Home,
            ["rooms"] => Self::Rooms,
            ["rooms", room_id, "devices"] => Self::RoomDevices {
                room_id: (*room_id).to_owned(),
            },
            ["devices", device_id, "details"] => Self::DeviceDetails {
                device_id: (*device_id).to_owned(),
            },
            ["devices", device_id, "edit-device"] => Self::EditDevice {
                device_id: (*device_id).to_owned(),
            },
            _ => Self::NotFound {
                path: trimmed.to_owned(),
            },
        }
    }

    /// Where "back" leads from this page.
    pub fn parent(&self) -> Self {
        match self {
            Self::Home | Self::Rooms | Self::NotFound { .. } => Self::Home,
            Self::RoomDevices { .. } | Self::DeviceDetails { .. } => Self::Rooms,
            Self::EditDevice { device_id } => Self::DeviceDetails {
                device_id: device_id.clone(),
            },
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => f.write_str("/"),
            Self::Rooms => f.write_str("/rooms"),
            Self::RoomDevices { room_id } => write!(f, "/rooms/{room_id}/devices"),
            Self::DeviceDetails { device_id } => write!(f, "/devices/{device_id}/details"),
            Self::EditDevice { device_id } => write!(f, "/devices/{device_id}/edit-device"),
            Self::NotFound { path } => f.write_str(path),
        }
    }
}
