#![allow(clippy::unwrap_used)]
// Integration tests for the page flows using wiremock.

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use url::Url;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use homedash_core::{
    ComponentForm, CoreError, Dashboard, DashboardConfig, LoadState, NewDeviceForm, WeatherSource,
};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, Dashboard) {
    let server = MockServer::start().await;
    let config = DashboardConfig {
        sun_times_url: Url::parse(&format!("{}/public/sun", server.uri())).unwrap(),
        forecast_url: Url::parse(&format!("{}/public/forecast", server.uri())).unwrap(),
        ..DashboardConfig::with_api_url(
            Url::parse(&format!("{}/api/v1", server.uri())).unwrap(),
        )
    };
    let dashboard = Dashboard::new(config).unwrap();
    (server, dashboard)
}

fn api(suffix: &str) -> String {
    format!("/api/v1/{suffix}")
}

async fn mount_get(server: &MockServer, suffix: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(api(suffix)))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

fn device_json(id: &str, name: &str, active: bool) -> Value {
    json!({
        "deviceId": id,
        "roomId": "R1",
        "deviceName": name,
        "deviceModel": "M-100",
        "activationStatus": active
    })
}

/// Everything the device-details page fetches, except the sensors list.
async fn mount_device_page_without_sensors(server: &MockServer, name: &str, active: bool) {
    mount_get(server, "devices/D1", device_json("D1", name, active)).await;
    mount_get(
        server,
        "rooms/R1",
        json!({ "roomId": "R1", "roomName": "living room", "floorNumber": 0 }),
    )
    .await;
    mount_get(
        server,
        "devices/D1/actuators",
        json!([{ "actuatorID": "A1", "actuatorModelID": "AM1", "deviceID": "D1" }]),
    )
    .await;
    mount_get(
        server,
        "devices/D1/sensor-readings",
        json!([
            { "sensorReadingID": "SR1", "reading": "20", "sensorID": "S1", "deviceID": "D1", "timeStamp": "2026-01-01T10:00" },
            { "sensorReadingID": "SR2", "reading": "70", "sensorID": "S1", "deviceID": "D1", "timeStamp": "2026-01-01T11:00" }
        ]),
    )
    .await;
    mount_get(server, "sensor-types", json!([{ "sensorTypeID": "Temperature" }])).await;
    mount_get(
        server,
        "sensor-types/Temperature",
        json!({ "sensorTypeID": "Temperature", "description": "Temperature", "unit": "Celsius" }),
    )
    .await;
    mount_get(
        server,
        "actuator-types",
        json!([{ "actuatorTypeID": "BlindRoller", "description": "Roller blind" }]),
    )
    .await;
}

async fn mount_device_page(server: &MockServer, name: &str, active: bool) {
    mount_device_page_without_sensors(server, name, active).await;
    mount_get(
        server,
        "devices/D1/sensors",
        json!([{ "sensorID": "S1", "sensorModelID": "SM1", "deviceID": "D1" }]),
    )
    .await;
}

// ── Rooms ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_rooms_fall_back_to_placeholder() {
    let (server, dashboard) = setup().await;

    mount_get(&server, "houses/H1/rooms", json!([{ "roomId": "R1" }, { "roomId": "R2" }])).await;
    mount_get(
        &server,
        "rooms/R1",
        json!({ "roomId": "R1", "roomName": "kitchen", "floorNumber": 1 }),
    )
    .await;
    Mock::given(method("GET"))
        .and(path(api("rooms/R2")))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let flow = dashboard.rooms();
    let overview = flow.load().await.unwrap();

    assert_eq!(overview.rooms.len(), 2);
    assert_eq!(overview.rooms[0].display_name(), "Kitchen");
    assert_eq!(overview.rooms[1].id, "R2");
    assert_eq!(overview.rooms[1].display_name(), "R2");
}

#[tokio::test]
async fn test_rooms_list_failure_sets_error_state() {
    let (server, dashboard) = setup().await;

    Mock::given(method("GET"))
        .and(path(api("houses/H1/rooms")))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let flow = dashboard.rooms();
    let err = flow.load().await.unwrap_err();

    assert_eq!(
        err,
        CoreError::Rejected {
            status: 503,
            message: "maintenance".into()
        }
    );
    match flow.state() {
        LoadState::Error(message) => assert!(message.contains("maintenance")),
        other => panic!("expected error state, got {other:?}"),
    }
}

// ── Room devices ────────────────────────────────────────────────────

#[tokio::test]
async fn test_room_devices_title_and_ids() {
    let (server, dashboard) = setup().await;

    mount_get(
        &server,
        "rooms/R1",
        json!({ "roomId": "R1", "roomName": "kitchen", "floorNumber": 1 }),
    )
    .await;
    mount_get(&server, "rooms/R1/devices", json!([{ "id": "D1" }])).await;
    mount_get(&server, "devices/D1", device_json("D1", "Heater", true)).await;

    let flow = dashboard.room_devices("R1");
    let page = flow.load().await.unwrap();

    assert_eq!(page.title(), "Devices in Kitchen");
    assert_eq!(page.devices.len(), 1);
    assert_eq!(page.devices[0].room_id, "R1");
    assert_eq!(page.devices[0].status_label(), "Activated");
}

#[tokio::test]
async fn test_add_device_with_empty_form_sends_nothing() {
    let (server, dashboard) = setup().await;

    Mock::given(method("POST"))
        .and(path(api("devices")))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let flow = dashboard.room_devices("R1");
    let err = flow.add_device(&NewDeviceForm::new("  ", "")).await.unwrap_err();
    assert!(err.is_validation());
}

#[tokio::test]
async fn test_add_device_appends_server_record() {
    let (server, dashboard) = setup().await;

    mount_get(
        &server,
        "rooms/R1",
        json!({ "roomId": "R1", "roomName": "kitchen", "floorNumber": 1 }),
    )
    .await;
    mount_get(&server, "rooms/R1/devices", json!([])).await;
    Mock::given(method("POST"))
        .and(path(api("devices")))
        .and(body_json(json!({
            "roomId": "R1",
            "deviceName": "Fridge",
            "deviceModel": "F-1",
            "activationStatus": true
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(device_json("D7", "Fridge", true)))
        .expect(1)
        .mount(&server)
        .await;

    let flow = dashboard.room_devices("R1");
    flow.load().await.unwrap();
    let created = flow.add_device(&NewDeviceForm::new("Fridge", "F-1")).await.unwrap();

    assert_eq!(created.id, "D7");
    let page = flow.state().ready().cloned().unwrap();
    assert_eq!(page.devices.len(), 1);
    assert_eq!(page.devices[0].id, "D7");
}

// ── Device details ──────────────────────────────────────────────────

#[tokio::test]
async fn test_device_details_aggregates_everything() {
    let (server, dashboard) = setup().await;
    mount_device_page(&server, "BlindRoller", true).await;

    let flow = dashboard.device_details("D1");
    let details = flow.load().await.unwrap();

    assert_eq!(details.device.room_id, details.room.id);
    assert_eq!(details.room.display_name(), "Living room");
    assert_eq!(details.sensors.len(), 1);
    assert_eq!(details.actuators.len(), 1);
    assert_eq!(details.latest_reading().unwrap().value, "70");
    assert_eq!(details.sensor_types[0].unit.as_deref(), Some("Celsius"));
    assert_eq!(details.actuator_types[0].id, "BlindRoller");
    assert!(details.shows_blind_control());
    assert!(details.forms_enabled());
}

#[tokio::test]
async fn test_device_details_failed_branch_sets_error_state() {
    let (server, dashboard) = setup().await;
    mount_device_page_without_sensors(&server, "Heater", true).await;
    Mock::given(method("GET"))
        .and(path(api("devices/D1/sensors")))
        .respond_with(ResponseTemplate::new(500).set_body_string("sensor store down"))
        .mount(&server)
        .await;

    let flow = dashboard.device_details("D1");
    assert!(flow.load().await.is_err());
    assert_eq!(flow.state().error(), Some("Request rejected (HTTP 500): sensor store down"));
}

#[tokio::test]
async fn test_confirmed_deactivation_sends_one_patch() {
    let (server, dashboard) = setup().await;
    mount_device_page(&server, "Heater", true).await;
    Mock::given(method("PATCH"))
        .and(path(api("devices")))
        .and(query_param("getBy", "active"))
        .and(query_param("deviceID", "D1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(device_json("D1", "Heater", false)))
        .expect(1)
        .mount(&server)
        .await;

    let flow = dashboard.device_details("D1");
    flow.load().await.unwrap();
    flow.request_deactivate().unwrap();
    assert!(flow.snapshot().unwrap().deactivate_prompt.is_visible());

    let device = flow.confirm_deactivate().await.unwrap();
    assert!(!device.active);

    let details = flow.snapshot().unwrap();
    assert_eq!(details.device.status_label(), "Deactivated");
    assert!(!details.deactivate_prompt.is_visible());
    assert!(!details.forms_enabled());

    // A second confirmation without a new request is refused locally.
    assert!(flow.confirm_deactivate().await.unwrap_err().is_validation());
}

#[tokio::test]
async fn test_cancelled_deactivation_sends_nothing() {
    let (server, dashboard) = setup().await;
    mount_device_page(&server, "Heater", true).await;
    Mock::given(method("PATCH"))
        .and(path(api("devices")))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let flow = dashboard.device_details("D1");
    flow.load().await.unwrap();
    flow.request_deactivate().unwrap();
    assert!(flow.cancel_deactivate());

    let details = flow.snapshot().unwrap();
    assert!(details.device.active);
    assert!(!details.deactivate_prompt.is_visible());
}

#[tokio::test]
async fn test_failed_deactivation_keeps_status() {
    let (server, dashboard) = setup().await;
    mount_device_page(&server, "Heater", true).await;
    Mock::given(method("PATCH"))
        .and(path(api("devices")))
        .respond_with(ResponseTemplate::new(500).set_body_string("nope"))
        .expect(1)
        .mount(&server)
        .await;

    let flow = dashboard.device_details("D1");
    flow.load().await.unwrap();
    flow.request_deactivate().unwrap();
    let err = flow.confirm_deactivate().await.unwrap_err();

    assert!(!err.is_validation());
    assert!(flow.snapshot().unwrap().device.active);
}

#[tokio::test]
async fn test_add_sensor_resyncs_sensor_list() {
    let (server, dashboard) = setup().await;
    mount_device_page_without_sensors(&server, "Heater", true).await;

    // First fetch (page load) sees no sensors, the resync sees the new one.
    Mock::given(method("GET"))
        .and(path(api("devices/D1/sensors")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_get(
        &server,
        "devices/D1/sensors",
        json!([{ "sensorID": "S9", "sensorModelID": "SM-TEMP", "deviceID": "D1" }]),
    )
    .await;
    Mock::given(method("GET"))
        .and(path(api("sensor-models")))
        .and(query_param("sensorTypeID", "Temperature"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "sensorModelID": "SM-TEMP" }])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(api("sensors")))
        .and(body_json(json!({ "deviceID": "D1", "sensorModelID": "SM-TEMP" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "sensorID": "S9", "sensorModelID": "SM-TEMP", "deviceID": "D1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let flow = dashboard.device_details("D1");
    let before = flow.load().await.unwrap();
    assert!(before.sensors.is_empty());

    let models = flow.select_sensor_type("Temperature").await.unwrap();
    assert_eq!(models[0].id, "SM-TEMP");

    let created = flow
        .add_sensor(&ComponentForm::new("Temperature", "SM-TEMP"))
        .await
        .unwrap();
    assert_eq!(created.model_id, "SM-TEMP");

    let after = flow.snapshot().unwrap();
    assert_eq!(after.sensors.len(), before.sensors.len() + 1);
    assert_eq!(after.sensors[0].model_id, "SM-TEMP");
    // The new sensor's model is one of the picked type's models.
    assert!(after.sensor_models.iter().any(|m| m.id == after.sensors[0].model_id));
}

#[tokio::test]
async fn test_add_actuator_resyncs_actuator_list() {
    let (server, dashboard) = setup().await;
    mount_device_page(&server, "Blind Roller", true).await;

    // Page load sees A1 only, the resync also sees the new actuator.
    Mock::given(method("GET"))
        .and(path(api("devices/D1/actuators")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "actuatorID": "A1", "actuatorModelID": "AM1", "deviceID": "D1" }
        ])))
        .with_priority(1)
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(api("devices/D1/actuators")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "actuatorID": "A1", "actuatorModelID": "AM1", "deviceID": "D1" },
            { "actuatorID": "A9", "actuatorModelID": "AM-BLIND", "deviceID": "D1" }
        ])))
        .with_priority(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(api("actuator-models")))
        .and(query_param("actuatorTypeID", "BlindRoller"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{ "actuatorModelID": "AM-BLIND" }])),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(api("actuators")))
        .and(body_json(json!({ "deviceID": "D1", "actuatorModelID": "AM-BLIND" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "actuatorID": "A9", "actuatorModelID": "AM-BLIND", "deviceID": "D1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let flow = dashboard.device_details("D1");
    let before = flow.load().await.unwrap();
    assert_eq!(before.actuators.len(), 1);

    let models = flow.select_actuator_type("BlindRoller").await.unwrap();
    assert_eq!(models[0].id, "AM-BLIND");

    let created = flow
        .add_actuator(&ComponentForm::new("BlindRoller", "AM-BLIND"))
        .await
        .unwrap();
    assert_eq!(created.model_id, "AM-BLIND");

    let after = flow.snapshot().unwrap();
    assert_eq!(after.actuators.len(), before.actuators.len() + 1);
    let added = after.actuators.iter().find(|a| a.id == "A9").unwrap();
    assert_eq!(added.model_id, "AM-BLIND");
    assert!(after.actuator_models.iter().any(|m| m.id == added.model_id));
}

#[tokio::test]
async fn test_add_actuator_requires_model() {
    let (server, dashboard) = setup().await;
    mount_device_page(&server, "Heater", true).await;
    Mock::given(method("POST"))
        .and(path(api("actuators")))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let flow = dashboard.device_details("D1");
    flow.load().await.unwrap();
    let err = flow
        .add_actuator(&ComponentForm::new("BlindRoller", ""))
        .await
        .unwrap_err();
    assert!(err.is_validation());
}

#[tokio::test]
async fn test_inactive_device_refuses_new_sensors() {
    let (server, dashboard) = setup().await;
    mount_device_page(&server, "Heater", false).await;

    let flow = dashboard.device_details("D1");
    flow.load().await.unwrap();

    let err = flow
        .add_sensor(&ComponentForm::new("Temperature", "SM1"))
        .await
        .unwrap_err();
    assert!(err.is_validation());
    assert!(flow.request_deactivate().is_err());
}

#[tokio::test]
async fn test_blind_submit_sends_staged_value() {
    let (server, dashboard) = setup().await;
    mount_device_page(&server, "Blind Roller", true).await;
    Mock::given(method("PATCH"))
        .and(path(api("actuators/A1")))
        .and(body_json(json!({ "actuatorID": "A1", "sensorID": "S1", "inputValue": "80" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "actuatorID": "A1" })))
        .expect(1)
        .mount(&server)
        .await;

    let flow = dashboard.device_details("D1");
    flow.load().await.unwrap();

    flow.select_blind_actuator("A1");
    // Seeded from the latest reading of S1 (70).
    flow.select_blind_sensor("S1");
    assert_eq!(flow.snapshot().unwrap().blind.value("A1"), 70);
    assert_eq!(flow.blind_increase("A1"), Some(80));

    assert_eq!(flow.submit_blind().await.unwrap(), 80);
}

#[tokio::test]
async fn test_blind_preselects_first_components_from_newest_reading() {
    let (server, dashboard) = setup().await;
    // Newest reading first; the page must not rely on server order.
    Mock::given(method("GET"))
        .and(path(api("devices/D1/sensor-readings")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "sensorReadingID": "SR2", "reading": "90", "sensorID": "S1", "deviceID": "D1", "timeStamp": "2026-01-01T11:00" },
            { "sensorReadingID": "SR1", "reading": "10", "sensorID": "S1", "deviceID": "D1", "timeStamp": "2026-01-01T09:00" }
        ])))
        .with_priority(1)
        .mount(&server)
        .await;
    mount_device_page(&server, "Blind Roller", true).await;
    Mock::given(method("PATCH"))
        .and(path(api("actuators/A1")))
        .and(body_json(json!({ "actuatorID": "A1", "sensorID": "S1", "inputValue": "90" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "actuatorID": "A1" })))
        .expect(1)
        .mount(&server)
        .await;

    let flow = dashboard.device_details("D1");
    let details = flow.load().await.unwrap();

    assert_eq!(details.latest_reading_for("S1").unwrap().value, "90");
    assert_eq!(details.blind.selected_actuator(), Some("A1"));
    assert_eq!(details.blind.selected_sensor(), Some("S1"));
    assert_eq!(details.blind.value("A1"), 90);

    // Submittable without picking anything by hand.
    assert_eq!(flow.submit_blind().await.unwrap(), 90);
}

#[tokio::test]
async fn test_blind_submit_without_sensor_is_refused() {
    let (server, dashboard) = setup().await;
    mount_device_page_without_sensors(&server, "BlindRoller", true).await;
    mount_get(&server, "devices/D1/sensors", json!([])).await;

    let flow = dashboard.device_details("D1");
    let details = flow.load().await.unwrap();
    assert_eq!(details.blind.selected_sensor(), None);
    flow.select_blind_actuator("A1");

    let err = flow.submit_blind().await.unwrap_err();
    assert_eq!(err.to_string(), "sensor: is required");
}

// ── Home ────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_home_prefers_backend_weather() {
    let (server, dashboard) = setup().await;
    mount_get(&server, "weather/currentTemperature", json!({ "measurement": 18.4 })).await;
    mount_get(&server, "weather/sunrise", json!({ "measurement": "06:12" })).await;
    mount_get(&server, "weather/sunset", json!({ "measurement": "20:41" })).await;

    let weather = dashboard.home().load().await.unwrap();

    assert_eq!(weather.temperature.as_deref(), Some("18.4"));
    assert_eq!(weather.temperature_source, WeatherSource::Backend);
    assert_eq!(weather.sunrise.as_deref(), Some("06:12"));
    assert_eq!(weather.sunset.as_deref(), Some("20:41"));
    assert_eq!(weather.sun_source, WeatherSource::Backend);
}

#[tokio::test]
async fn test_home_falls_back_to_public_services() {
    let (server, dashboard) = setup().await;
    Mock::given(method("GET"))
        .and(path("/public/forecast"))
        .and(query_param("current_weather", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "current_weather": { "temperature": 17.0 }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/public/sun"))
        .and(query_param("formatted", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": {
                "sunrise": "2026-06-21T05:12:00+00:00",
                "sunset": "2026-06-21T20:05:00+00:00"
            },
            "status": "OK"
        })))
        .mount(&server)
        .await;

    let weather = dashboard.home().load().await.unwrap();

    assert_eq!(weather.temperature.as_deref(), Some("17.0"));
    assert_eq!(weather.temperature_source, WeatherSource::Public);
    assert_eq!(weather.sun_source, WeatherSource::Public);
    assert!(weather.sunrise.is_some());
    assert!(weather.sunset.is_some());
}

#[tokio::test]
async fn test_home_without_any_source_is_unavailable() {
    let (_server, dashboard) = setup().await;

    let weather = dashboard.home().load().await.unwrap();

    assert_eq!(weather.temperature, None);
    assert_eq!(weather.temperature_source, WeatherSource::Unavailable);
    assert_eq!(weather.sun_source, WeatherSource::Unavailable);
}

// ── Cancellation ────────────────────────────────────────────────────

#[tokio::test]
async fn test_shutdown_cancels_flows() {
    let (server, dashboard) = setup().await;
    mount_get(&server, "houses/H1/rooms", json!([])).await;

    let flow = dashboard.rooms();
    dashboard.shutdown();

    assert_eq!(flow.load().await.unwrap_err(), CoreError::Cancelled);
}
