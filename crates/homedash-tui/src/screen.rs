//! Screen identifiers and their mapping from routes.

use std::fmt;

use homedash_core::Route;

/// Identifies which page a route renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScreenId {
    #[default]
    Home, // 1
    Rooms, // 2
    RoomDevices,
    DeviceDetails,
    EditDevice,
    NotFound,
}

impl ScreenId {
    /// Pages reachable from the tab bar, in order.
    pub const TABS: [ScreenId; 2] = [Self::Home, Self::Rooms];

    pub fn of(route: &Route) -> Self {
        match route {
            Route::Home => Self::Home,
            Route::Rooms => Self::Rooms,
            Route::RoomDevices { .. } => Self::RoomDevices,
            Route::DeviceDetails { .. } => Self::DeviceDetails,
            Route::EditDevice { .. } => Self::EditDevice,
            Route::NotFound { .. } => Self::NotFound,
        }
    }

    /// Number key for tab pages; 0 for pages reached by drilling down.
    pub fn number(self) -> u8 {
        match self {
            Self::Home => 1,
            Self::Rooms => 2,
            Self::RoomDevices | Self::DeviceDetails | Self::EditDevice | Self::NotFound => 0,
        }
    }

    /// Route for a number key. `None` for anything outside the tab bar.
    pub fn route_for_number(n: u8) -> Option<Route> {
        match n {
            1 => Some(Route::Home),
            2 => Some(Route::Rooms),
            _ => None,
        }
    }

    /// The tab a page belongs to, for highlighting.
    pub fn tab(self) -> Self {
        match self {
            Self::Home | Self::NotFound => Self::Home,
            Self::Rooms | Self::RoomDevices | Self::DeviceDetails | Self::EditDevice => {
                Self::Rooms
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Rooms => "Rooms",
            Self::RoomDevices => "Devices",
            Self::DeviceDetails => "Device",
            Self::EditDevice => "Edit",
            Self::NotFound => "Not found",
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn drill_down_pages_highlight_rooms_tab() {
        let route = Route::parse("/devices/D1/details");
        assert_eq!(ScreenId::of(&route), ScreenId::DeviceDetails);
        assert_eq!(ScreenId::of(&route).tab(), ScreenId::Rooms);
        assert_eq!(ScreenId::of(&Route::parse("/nope")).tab(), ScreenId::Home);
    }

    #[test]
    fn number_keys_round_trip_for_tabs() {
        for id in ScreenId::TABS {
            let route = ScreenId::route_for_number(id.number());
            assert_eq!(route.as_ref().map(ScreenId::of), Some(id));
        }
        assert!(ScreenId::route_for_number(3).is_none());
    }
}
