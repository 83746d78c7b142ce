// Room endpoints
//
// House-scoped room listing, room lookup, and the devices installed in a room.

use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::types::{DeviceRef, RoomRef, RoomResponse};

impl ApiClient {
    /// List the rooms of a house (ids only).
    ///
    /// `GET /houses/{houseId}/rooms`
    pub async fn list_rooms(&self, house_id: &str) -> Result<Vec<RoomRef>, Error> {
        debug!(house_id, "listing rooms");
        self.get(&format!("houses/{house_id}/rooms")).await
    }

    /// `GET /rooms/{id}`
    pub async fn get_room(&self, room_id: &str) -> Result<RoomResponse, Error> {
        self.get(&format!("rooms/{room_id}")).await
    }

    /// List the devices installed in a room (ids only).
    ///
    /// `GET /rooms/{roomId}/devices?RoomID={roomId}`
    pub async fn list_room_devices(&self, room_id: &str) -> Result<Vec<DeviceRef>, Error> {
        self.get_with_params(
            &format!("rooms/{room_id}/devices"),
            &[("RoomID", room_id.to_owned())],
        )
        .await
    }
}
