//! Page implementations. One page is mounted at a time; navigating away
//! drops it, which cancels its flow.

pub mod device_details;
pub mod edit_device;
pub mod home;
pub mod not_found;
pub mod room_devices;
pub mod rooms;

use std::future::Future;

use ratatui::widgets::TableState;
use tracing::debug;

use homedash_core::{CoreError, Dashboard, Route};

use crate::component::Component;

/// Build the page for `route`, with a fresh flow from `dashboard`.
pub fn create_screen(route: &Route, dashboard: &Dashboard) -> Box<dyn Component> {
    match route {
        Route::Home => Box::new(home::HomeScreen::new(dashboard.home())),
        Route::Rooms => Box::new(rooms::RoomsScreen::new(dashboard.rooms())),
        Route::RoomDevices { room_id } => Box::new(room_devices::RoomDevicesScreen::new(
            dashboard.room_devices(room_id),
        )),
        Route::DeviceDetails { device_id } => Box::new(
            device_details::DeviceDetailsScreen::new(dashboard.device_details(device_id)),
        ),
        Route::EditDevice { device_id } => {
            Box::new(edit_device::EditDeviceScreen::new(device_id.clone()))
        }
        Route::NotFound { path } => Box::new(not_found::NotFoundScreen::new(path.clone())),
    }
}

/// Run a page load in the background. Failures are already published to
/// the page's state by the flow, so they are only logged here.
pub(crate) fn spawn_load<F>(fut: F, page: &'static str)
where
    F: Future<Output = Result<(), CoreError>> + Send + 'static,
{
    tokio::spawn(async move {
        if let Err(e) = fut.await {
            debug!(page, error = %e, "page load did not complete");
        }
    });
}

/// Move a table selection by `delta` rows, clamped to `len`. A delta of 0
/// only re-clamps (after the rows changed).
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss, clippy::as_conversions)]
pub(crate) fn move_selection(state: &mut TableState, len: usize, delta: isize) {
    if len == 0 {
        state.select(Some(0));
        return;
    }
    let current = state.selected().unwrap_or(0) as isize;
    let next = (current + delta).clamp(0, len as isize - 1);
    state.select(Some(next as usize));
}
