// Backend weather proxy
//
// The backend forwards to a weather service for a coordinate pair. Callers
// fall back to `PublicWeatherClient` when these fail.

use crate::client::ApiClient;
use crate::error::Error;
use crate::types::MeasurementResponse;

fn coordinates(latitude: f64, longitude: f64) -> [(&'static str, String); 2] {
    [
        ("latitude", latitude.to_string()),
        ("longitude", longitude.to_string()),
    ]
}

impl ApiClient {
    /// `GET /weather/currentTemperature?latitude=&longitude=`
    pub async fn current_temperature(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<MeasurementResponse, Error> {
        self.get_with_params("weather/currentTemperature", &coordinates(latitude, longitude))
            .await
    }

    /// `GET /weather/sunrise?latitude=&longitude=`
    pub async fn sunrise(&self, latitude: f64, longitude: f64) -> Result<MeasurementResponse, Error> {
        self.get_with_params("weather/sunrise", &coordinates(latitude, longitude))
            .await
    }

    /// `GET /weather/sunset?latitude=&longitude=`
    pub async fn sunset(&self, latitude: f64, longitude: f64) -> Result<MeasurementResponse, Error> {
        self.get_with_params("weather/sunset", &coordinates(latitude, longitude))
            .await
    }
}
