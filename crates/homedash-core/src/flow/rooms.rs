use std::sync::Arc;

use futures_util::future::join_all;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use homedash_api::ApiClient;

use super::{guarded, until_cancelled};
use crate::error::CoreError;
use crate::model::Room;
use crate::store::{LoadState, ViewStore};
use crate::stream::ViewStream;

/// Every room of the configured house.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomsOverview {
    pub house_id: String,
    pub rooms: Vec<Room>,
}

/// Loads the rooms page: the house's room ids, then each room in parallel.
///
/// A room whose details fail to load is still listed under its id.
pub struct RoomsFlow {
    api: Arc<ApiClient>,
    house_id: String,
    store: ViewStore<RoomsOverview>,
    cancel: CancellationToken,
}

impl RoomsFlow {
    pub fn new(api: Arc<ApiClient>, house_id: impl Into<String>, cancel: CancellationToken) -> Self {
        Self {
            api,
            house_id: house_id.into(),
            store: ViewStore::new(),
            cancel,
        }
    }

    pub fn house_id(&self) -> &str {
        &self.house_id
    }

    pub fn state(&self) -> LoadState<RoomsOverview> {
        self.store.current()
    }

    pub fn subscribe(&self) -> ViewStream<RoomsOverview> {
        self.store.subscribe()
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub async fn load(&self) -> Result<Arc<RoomsOverview>, CoreError> {
        debug!(house_id = %self.house_id, "loading rooms");
        self.store.set_loading();
        match until_cancelled(&self.cancel, self.fetch()).await {
            Ok(overview) => Ok(self.store.set_ready(overview)),
            Err(CoreError::Cancelled) => Err(CoreError::Cancelled),
            Err(e) => {
                self.store.set_error(e.to_string());
                Err(e)
            }
        }
    }

    async fn fetch(&self) -> Result<RoomsOverview, CoreError> {
        let api = &*self.api;
        let refs = guarded("rooms", api.list_rooms(&self.house_id).await)?;

        let rooms = join_all(refs.iter().map(|r| async move {
            match api.get_room(&r.room_id).await {
                Ok(room) => Room::from(room),
                Err(e) => {
                    warn!(room_id = %r.room_id, error = %e, "room details unavailable");
                    Room::placeholder(&r.room_id)
                }
            }
        }))
        .await;

        debug!(count = rooms.len(), "rooms loaded");
        Ok(RoomsOverview {
            house_id: self.house_id.clone(),
            rooms,
        })
    }
}

impl Drop for RoomsFlow {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
