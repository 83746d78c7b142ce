// ── Aggregation flows ──
//
// One flow per page. A flow is created on navigation, fetches everything
// its page needs into a `ViewStore`, and re-fetches only the slices a
// mutation touched. Nothing is cached across pages.

mod device_details;
mod home;
mod room_devices;
mod rooms;

use std::future::Future;

use tokio_util::sync::CancellationToken;
use tracing::warn;

use crate::error::CoreError;

pub use device_details::{DeviceDetails, DeviceDetailsFlow};
pub(crate) use device_details::{fetch_actuator_types, fetch_sensor_types};
pub use home::{HomeFlow, format_sun_time};
pub use room_devices::{RoomDevices, RoomDevicesFlow};
pub use rooms::{RoomsFlow, RoomsOverview};

/// Race `fut` against the page's cancellation token.
pub(crate) async fn until_cancelled<T>(
    cancel: &CancellationToken,
    fut: impl Future<Output = Result<T, CoreError>>,
) -> Result<T, CoreError> {
    tokio::select! {
        biased;
        () = cancel.cancelled() => Err(CoreError::Cancelled),
        result = fut => result,
    }
}

/// Log a failed fetch and translate its error.
///
/// Every branch of a fan-out goes through here so each failure is
/// reported on its own, even when several fail together.
pub(crate) fn guarded<T>(
    what: &str,
    result: Result<T, homedash_api::Error>,
) -> Result<T, CoreError> {
    result.map_err(|e| {
        warn!(error = %e, "failed to fetch {what}");
        CoreError::from(e)
    })
}
