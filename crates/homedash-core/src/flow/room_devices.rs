use std::sync::Arc;

use futures_util::future::join_all;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use homedash_api::ApiClient;

use super::{guarded, until_cancelled};
use crate::error::CoreError;
use crate::form::NewDeviceForm;
use crate::model::{Device, Room};
use crate::store::{LoadState, ViewStore};
use crate::stream::ViewStream;

/// A room and the devices installed in it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomDevices {
    pub room: Room,
    pub devices: Vec<Device>,
}

impl RoomDevices {
    /// Page heading, e.g. `Devices in Kitchen`.
    pub fn title(&self) -> String {
        format!("Devices in {}", self.room.display_name())
    }
}

/// Loads one room's devices and adds new ones to it.
pub struct RoomDevicesFlow {
    api: Arc<ApiClient>,
    room_id: String,
    store: ViewStore<RoomDevices>,
    cancel: CancellationToken,
}

impl RoomDevicesFlow {
    pub fn new(api: Arc<ApiClient>, room_id: impl Into<String>, cancel: CancellationToken) -> Self {
        Self {
            api,
            room_id: room_id.into(),
            store: ViewStore::new(),
            cancel,
        }
    }

    pub fn room_id(&self) -> &str {
        &self.room_id
    }

    pub fn state(&self) -> LoadState<RoomDevices> {
        self.store.current()
    }

    pub fn subscribe(&self) -> ViewStream<RoomDevices> {
        self.store.subscribe()
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub async fn load(&self) -> Result<Arc<RoomDevices>, CoreError> {
        debug!(room_id = %self.room_id, "loading room devices");
        self.store.set_loading();
        match until_cancelled(&self.cancel, self.fetch()).await {
            Ok(page) => Ok(self.store.set_ready(page)),
            Err(CoreError::Cancelled) => Err(CoreError::Cancelled),
            Err(e) => {
                self.store.set_error(e.to_string());
                Err(e)
            }
        }
    }

    async fn fetch(&self) -> Result<RoomDevices, CoreError> {
        let api = &*self.api;
        let (room, refs) = tokio::join!(
            api.get_room(&self.room_id),
            api.list_room_devices(&self.room_id),
        );

        // The title falls back to the room id.
        let room = match room {
            Ok(room) => Room::from(room),
            Err(e) => {
                warn!(room_id = %self.room_id, error = %e, "room name unavailable");
                Room::placeholder(&self.room_id)
            }
        };
        let refs = guarded("room devices", refs)?;

        let devices = join_all(refs.iter().map(|r| api.get_device(&r.id)))
            .await
            .into_iter()
            .zip(&refs)
            .filter_map(|(result, r)| match result {
                Ok(device) => Some(Device::from(device)),
                Err(e) => {
                    warn!(device_id = %r.id, error = %e, "device details unavailable");
                    None
                }
            })
            .collect();

        Ok(RoomDevices { room, devices })
    }

    /// Create a device in this room.
    ///
    /// Empty fields fail validation before any request is made. On success
    /// the record the server returned joins the list.
    pub async fn add_device(&self, form: &NewDeviceForm) -> Result<Device, CoreError> {
        let body = form.validate(&self.room_id)?;

        let created = until_cancelled(&self.cancel, async {
            Ok(Device::from(guarded("new device", self.api.add_device(&body).await)?))
        })
        .await?;

        info!(device_id = %created.id, room_id = %self.room_id, "device added");
        self.store.modify(|page| page.devices.push(created.clone()));
        Ok(created)
    }
}

impl Drop for RoomDevicesFlow {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
