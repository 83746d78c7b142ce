#![allow(clippy::unwrap_used)]
// Integration tests for `ApiClient` using wiremock.

use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use homedash_api::types::{ActuatorRequest, DeviceRequest, RollerBlindRequest, SensorRequest};
use homedash_api::{ApiClient, Error, PublicWeatherClient, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let base = format!("{}/api/v1", server.uri());
    let client = ApiClient::new(&base, &TransportConfig::default()).unwrap();
    (server, client)
}

fn api(suffix: &str) -> String {
    format!("/api/v1/{suffix}")
}

// ── Rooms ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_rooms_of_house() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api("houses/H1/rooms")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "roomId": "R1", "_links": { "self": { "href": "x" } } },
            { "roomId": "R2" }
        ])))
        .mount(&server)
        .await;

    let rooms = client.list_rooms("H1").await.unwrap();
    let ids: Vec<_> = rooms.iter().map(|r| r.room_id.as_str()).collect();
    assert_eq!(ids, vec!["R1", "R2"]);
}

#[tokio::test]
async fn test_get_room() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api("rooms/R1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "roomId": "R1",
            "roomName": "kitchen",
            "floorNumber": 1,
            "length": 5.0,
            "width": 4.0,
            "height": 2.5,
            "houseId": "H1"
        })))
        .mount(&server)
        .await;

    let room = client.get_room("R1").await.unwrap();
    assert_eq!(room.room_name, "kitchen");
    assert_eq!(room.floor_number, 1);
}

#[tokio::test]
async fn test_list_room_devices_sends_room_param() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api("rooms/R1/devices")))
        .and(query_param("RoomID", "R1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "D1" },
            { "deviceId": "D2" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let devices = client.list_room_devices("R1").await.unwrap();
    assert_eq!(devices.len(), 2);
    assert_eq!(devices[1].id, "D2");
}

// ── Devices ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_add_device_returns_created_record() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(api("devices")))
        .and(body_json(json!({
            "roomId": "R1",
            "deviceName": "Lamp",
            "deviceModel": "L-100",
            "activationStatus": true
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "deviceId": "D9",
            "roomId": "R1",
            "deviceName": "Lamp",
            "deviceModel": "L-100",
            "activationStatus": true
        })))
        .mount(&server)
        .await;

    let created = client
        .add_device(&DeviceRequest {
            room_id: "R1".into(),
            device_name: "Lamp".into(),
            device_model: "L-100".into(),
            activation_status: true,
        })
        .await
        .unwrap();
    assert_eq!(created.device_id, "D9");
}

#[tokio::test]
async fn test_deactivate_device_uses_query_params() {
    let (server, client) = setup().await;

    Mock::given(method("PATCH"))
        .and(path(api("devices")))
        .and(query_param("getBy", "active"))
        .and(query_param("deviceID", "D1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "deviceId": "D1",
            "roomId": "R1",
            "deviceName": "Heater",
            "deviceModel": "H-2",
            "activationStatus": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let device = client.deactivate_device("D1").await.unwrap();
    assert!(!device.activation_status);
}

#[tokio::test]
async fn test_not_found_carries_plain_text_message() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api("devices/nope")))
        .respond_with(ResponseTemplate::new(404).set_body_string("Device not found"))
        .mount(&server)
        .await;

    let err = client.get_device("nope").await.unwrap_err();
    assert!(err.is_not_found());
    assert!(
        matches!(&err, Error::Api { status: 404, message } if message == "Device not found"),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn test_device_collections() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api("devices/D1/sensors")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "sensorID": "S1", "sensorModelID": "SM-TEMP", "deviceID": "D1" }
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(api("devices/D1/actuators")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "actuatorID": "A1", "actuatorModelID": "AM-BLIND", "deviceID": "D1" }
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(api("devices/D1/sensor-readings")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "sensorReadingID": "SR1",
            "reading": "40",
            "deviceID": "D1",
            "sensorID": "S1",
            "timeStamp": "2024-05-01T10:00:00"
        }])))
        .mount(&server)
        .await;

    let sensors = client.list_device_sensors("D1").await.unwrap();
    let actuators = client.list_device_actuators("D1").await.unwrap();
    let readings = client.list_device_readings("D1").await.unwrap();

    assert_eq!(sensors[0].sensor_model_id, "SM-TEMP");
    assert_eq!(actuators[0].actuator_id, "A1");
    assert_eq!(readings[0].reading, "40");
}

// ── Sensors & actuators ─────────────────────────────────────────────

#[tokio::test]
async fn test_add_sensor_and_actuator_bodies() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(api("sensors")))
        .and(body_json(json!({ "deviceID": "D1", "sensorModelID": "SM-1" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "sensorID": "S7", "sensorModelID": "SM-1", "deviceID": "D1"
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(api("actuators")))
        .and(body_json(json!({ "deviceID": "D1", "actuatorModelID": "AM-1" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "actuatorID": "A7", "actuatorModelID": "AM-1", "deviceID": "D1"
        })))
        .mount(&server)
        .await;

    let sensor = client
        .add_sensor(&SensorRequest {
            device_id: "D1".into(),
            sensor_model_id: "SM-1".into(),
        })
        .await
        .unwrap();
    let actuator = client
        .add_actuator(&ActuatorRequest {
            device_id: "D1".into(),
            actuator_model_id: "AM-1".into(),
        })
        .await
        .unwrap();

    assert_eq!(sensor.sensor_id, "S7");
    assert_eq!(actuator.actuator_id, "A7");
}

#[tokio::test]
async fn test_update_roller_blind() {
    let (server, client) = setup().await;

    Mock::given(method("PATCH"))
        .and(path(api("actuators/A1")))
        .and(body_json(json!({
            "actuatorID": "A1", "sensorID": "S1", "inputValue": "60"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "actuatorID": "A1" })))
        .expect(1)
        .mount(&server)
        .await;

    client
        .update_roller_blind(
            "A1",
            &RollerBlindRequest {
                actuator_id: "A1".into(),
                sensor_id: "S1".into(),
                input_value: "60".into(),
            },
        )
        .await
        .unwrap();
}

// ── Catalog ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_models_are_filtered_by_type() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api("sensor-models")))
        .and(query_param("sensorTypeID", "Temperature"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "sensorModelID": "TSY01" }
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(api("actuator-models")))
        .and(query_param("actuatorTypeID", "BlindRoller"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "actuatorModelID": "BR-1" }
        ])))
        .mount(&server)
        .await;

    let sensor_models = client.list_sensor_models("Temperature").await.unwrap();
    let actuator_models = client.list_actuator_models("BlindRoller").await.unwrap();
    assert_eq!(sensor_models[0].sensor_model_id, "TSY01");
    assert_eq!(actuator_models[0].actuator_model_id, "BR-1");
}

#[tokio::test]
async fn test_sensor_type_details() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api("sensor-types/Temperature")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sensorTypeID": "Temperature", "description": "Temperature", "unit": "C"
        })))
        .mount(&server)
        .await;

    let st = client.get_sensor_type("Temperature").await.unwrap();
    assert_eq!(st.unit.as_deref(), Some("C"));
}

// ── Weather ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_backend_weather_measurement() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api("weather/currentTemperature")))
        .and(query_param("latitude", "41.1496"))
        .and(query_param("longitude", "-8.611"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "measurement": 17.5 })))
        .mount(&server)
        .await;

    let temp = client.current_temperature(41.1496, -8.611).await.unwrap();
    assert_eq!(temp.as_text(), "17.5");
}

#[tokio::test]
async fn test_public_weather_fallback_endpoints() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/json"))
        .and(query_param("formatted", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": {
                "sunrise": "2024-06-21T05:02:11+00:00",
                "sunset": "2024-06-21T20:06:03+00:00"
            },
            "status": "OK"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("current_weather", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "current_weather": { "temperature": 22.3, "windspeed": 5.0 }
        })))
        .mount(&server)
        .await;

    let weather = PublicWeatherClient::new(
        &format!("{}/json", server.uri()),
        &format!("{}/v1/forecast", server.uri()),
        &TransportConfig::default(),
    )
    .unwrap();

    let sun = weather.sun_times(41.1496, -8.611).await.unwrap();
    let temp = weather.current_temperature(41.1496, -8.611).await.unwrap();
    assert_eq!(sun.sunrise, "2024-06-21T05:02:11+00:00");
    assert!((temp - 22.3).abs() < f64::EPSILON);
}

// ── Transport ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_slow_response_times_out() {
    let server = MockServer::start().await;
    let base = format!("{}/api/v1", server.uri());
    let transport = TransportConfig::default().with_timeout(Duration::from_millis(100));
    let client = ApiClient::new(&base, &transport).unwrap();

    Mock::given(method("GET"))
        .and(path(api("rooms/R1")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "roomId": "R1" }))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let err = client.get_room("R1").await.unwrap_err();
    assert!(
        matches!(err, Error::Timeout { timeout_ms: 100 }),
        "expected timeout, got: {err:?}"
    );
}

#[tokio::test]
async fn test_wrapped_client_reports_its_own_timeout() {
    let server = MockServer::start().await;
    let base = format!("{}/api/v1", server.uri());
    let timeout = Duration::from_millis(150);
    let http = TransportConfig::default()
        .with_timeout(timeout)
        .build_client()
        .unwrap();
    let client = ApiClient::with_client(&base, http, timeout).unwrap();

    Mock::given(method("GET"))
        .and(path(api("rooms/R1")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "roomId": "R1" }))
                .set_delay(Duration::from_millis(600)),
        )
        .mount(&server)
        .await;

    let err = client.get_room("R1").await.unwrap_err();
    assert!(
        matches!(err, Error::Timeout { timeout_ms: 150 }),
        "expected a 150ms timeout, got: {err:?}"
    );
}

#[tokio::test]
async fn test_public_weather_timeout_is_reported() {
    let server = MockServer::start().await;
    let transport = TransportConfig::default().with_timeout(Duration::from_millis(100));
    let client = PublicWeatherClient::new(
        &format!("{}/sun", server.uri()),
        &format!("{}/forecast", server.uri()),
        &transport,
    )
    .unwrap();

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "current_weather": { "temperature": 17.0 } }))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let err = client.current_temperature(41.1, -8.6).await.unwrap_err();
    assert!(matches!(err, Error::Timeout { timeout_ms: 100 }), "got: {err:?}");
}

#[tokio::test]
async fn test_malformed_body_is_deserialization_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api("rooms/R1")))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client.get_room("R1").await.unwrap_err();
    assert!(matches!(err, Error::Deserialization { .. }));
}
