use crate::client::ApiClient;
use crate::error::Error;
use crate::types::ReadingResponse;

impl ApiClient {
    /// `GET /sensor-readings/{id}`
    pub async fn get_reading(&self, reading_id: &str) -> Result<ReadingResponse, Error> {
        self.get(&format!("sensor-readings/{reading_id}")).await
    }
}
