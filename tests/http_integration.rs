// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the Eolia session and climate device using wiremock.

use eolia_lib::protocol::{EoliaConfig, LOGIN_PATH, Protocol, Session};
use eolia_lib::{AuthError, ClimateDevice, Error, HttpError, HvacMode, ValueError};
use reqwest::Method;
use serde_json::{Value, json};
use wiremock::matchers::{any, body_json, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const STATUS_PATH: &str = "/eolia/v2/devices/AC%2001/status";

fn config(server: &MockServer) -> EoliaConfig {
    EoliaConfig::new("user@example.com", "secret", "AC 01").with_base_url(server.uri())
}

fn session(server: &MockServer) -> Session {
    config(server).into_session().unwrap()
}

fn device(server: &MockServer) -> ClimateDevice<Session> {
    ClimateDevice::builder(config(server))
        .build_without_login()
        .unwrap()
}

fn status_document() -> Value {
    json!({
        "operation_status": true,
        "operation_mode": "Heating",
        "temperature": 24.0,
        "wind_volume": 2,
        "wind_direction_horizon": "front",
        "nanoex": false,
        "inside_temp": 20,
        "outside_temp": 999,
        "inside_humidity": 40,
        "timer_value": 0,
    })
}

async fn mount_login(server: &MockServer, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path(LOGIN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(expected_calls)
        .mount(server)
        .await;
}

async fn put_bodies(server: &MockServer) -> Vec<Value> {
    server
        .received_requests()
        .await
        .unwrap()
        .into_iter()
        .filter(|request| request.method.as_str() == "PUT")
        .map(|request| request.body_json::<Value>().unwrap())
        .collect()
}

// ============================================================================
// Session Tests
// ============================================================================

mod session {
    use super::*;

    #[tokio::test]
    async fn login_posts_credentials_with_vendor_headers() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(LOGIN_PATH))
            .and(body_json(json!({
                "idpw": {
                    "id": "user@example.com",
                    "pass": "secret",
                    "terminal_type": 3,
                    "next_easy": "true"
                }
            })))
            .and(header("accept", "application/json"))
            .and(header("content-type", "application/Json; charset=UTF-8"))
            .and(header("accept-language", "ja-jp"))
            .and(header("user-agent", EoliaConfig::DEFAULT_USER_AGENT))
            .and(header_exists("x-eolia-date"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let session = session(&mock_server);
        session.login().await.unwrap();

        assert!(session.is_authenticated());
        assert_eq!(session.login_count(), 1);
    }

    #[tokio::test]
    async fn eolia_date_header_has_whole_seconds() {
        let mock_server = MockServer::start().await;
        mount_login(&mock_server, 1).await;

        session(&mock_server).login().await.unwrap();

        let requests = mock_server.received_requests().await.unwrap();
        let date = requests[0].headers.get("x-eolia-date").unwrap();
        let date = date.to_str().unwrap();
        assert_eq!(date.len(), "2024-01-01T00:00:00".len());
        assert_eq!(&date[10..11], "T");
        assert!(!date.contains('.'));
    }

    #[tokio::test]
    async fn login_rejected() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(LOGIN_PATH))
            .respond_with(ResponseTemplate::new(403).set_body_string("bad password"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let session = session(&mock_server);
        let err = session.login().await.unwrap_err();

        assert!(matches!(
            err,
            Error::Auth(AuthError::LoginRejected { status: 403, ref body }) if body == "bad password"
        ));
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn unauthorized_request_logs_in_once_and_retries() {
        let mock_server = MockServer::start().await;
        mount_login(&mock_server, 1).await;

        Mock::given(method("GET"))
            .and(path(STATUS_PATH))
            .respond_with(ResponseTemplate::new(401))
            .up_to_n_times(1)
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path(STATUS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(status_document()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let session = session(&mock_server);
        let response = session
            .request(Method::GET, STATUS_PATH, None)
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        assert_eq!(session.login_count(), 1);
        assert!(session.is_authenticated());
    }

    #[tokio::test]
    async fn second_unauthorized_is_terminal() {
        let mock_server = MockServer::start().await;
        mount_login(&mock_server, 1).await;

        Mock::given(method("GET"))
            .and(path(STATUS_PATH))
            .respond_with(ResponseTemplate::new(401))
            .expect(2)
            .mount(&mock_server)
            .await;

        let session = session(&mock_server);
        let err = session
            .request(Method::GET, STATUS_PATH, None)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Auth(AuthError::SessionExpired)));
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn rejected_relogin_stops_the_request() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(LOGIN_PATH))
            .respond_with(ResponseTemplate::new(401))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path(STATUS_PATH))
            .respond_with(ResponseTemplate::new(401))
            .expect(1)
            .mount(&mock_server)
            .await;

        let err = session(&mock_server)
            .request(Method::GET, STATUS_PATH, None)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Auth(AuthError::LoginRejected { status: 401, .. })
        ));
    }

    #[tokio::test]
    async fn server_error_is_not_retried() {
        let mock_server = MockServer::start().await;
        mount_login(&mock_server, 0).await;

        Mock::given(method("GET"))
            .and(path(STATUS_PATH))
            .respond_with(ResponseTemplate::new(500).set_body_string("maintenance"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let err = session(&mock_server)
            .request(Method::GET, STATUS_PATH, None)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Http(HttpError::Status { status: 500, ref body }) if body == "maintenance"
        ));
    }

    #[tokio::test]
    async fn connection_failure_is_transport_error() {
        let session = EoliaConfig::new("user", "pass", "AC-01")
            .with_base_url("http://127.0.0.1:1")
            .into_session()
            .unwrap();

        let err = session
            .request(Method::GET, STATUS_PATH, None)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Http(HttpError::Transport(_))));
    }
}

// ============================================================================
// ClimateDevice Tests
// ============================================================================

mod climate_device {
    use super::*;

    #[tokio::test]
    async fn build_logs_in_and_fetches_status() {
        let mock_server = MockServer::start().await;
        mount_login(&mock_server, 1).await;

        Mock::given(method("GET"))
            .and(path(STATUS_PATH))
            .and(header("accept-language", "ja-jp"))
            .respond_with(ResponseTemplate::new(200).set_body_json(status_document()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let device = ClimateDevice::builder(config(&mock_server))
            .build()
            .await
            .unwrap();

        assert_eq!(device.mode(), HvacMode::Heat);
        assert_eq!(device.preset(), Some("暖房"));
        assert_eq!(device.fan_speed(), Some("1"));
        assert_eq!(device.swing_position(), Some("中央"));
        assert_eq!(device.target_temperature(), 24.0);
        assert_eq!(device.current_temperature(), Some(20.0));
        assert_eq!(device.outside_temperature(), None);
        assert_eq!(device.humidity(), Some(40.0));
    }

    #[tokio::test]
    async fn write_sends_whitelisted_fields_and_token() {
        let mock_server = MockServer::start().await;

        let mut document = status_document();
        document["operation_token"] = json!("abc");
        document["device_name"] = json!("living room");
        document["firmware"] = json!({"version": "2.1"});

        Mock::given(method("GET"))
            .and(path(STATUS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(document.clone()))
            .mount(&mock_server)
            .await;

        Mock::given(method("PUT"))
            .and(path(STATUS_PATH))
            .and(body_json(json!({
                "operation_status": true,
                "operation_mode": "Cooling",
                "temperature": "24.0",
                "wind_volume": 2,
                "wind_direction_horizon": "front",
                "nanoex": false,
                "timer_value": 0,
                "operation_token": "abc",
                "appliance_id": "AC%2001"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(document))
            .expect(1)
            .mount(&mock_server)
            .await;

        let device = device(&mock_server);
        device.refresh().await.unwrap();
        device.set_mode(HvacMode::Cool).await.unwrap();
    }

    #[tokio::test]
    async fn write_without_token_omits_token_fields() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(STATUS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(status_document()))
            .mount(&mock_server)
            .await;

        Mock::given(method("PUT"))
            .and(path(STATUS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(status_document()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let device = device(&mock_server);
        device.refresh().await.unwrap();
        device.set_target_temperature(10.0).await.unwrap();

        let puts = put_bodies(&mock_server).await;
        assert_eq!(puts[0]["temperature"], "16.0");
        assert!(puts[0].get("operation_token").is_none());
        assert!(puts[0].get("appliance_id").is_none());
    }

    #[tokio::test]
    async fn expired_session_during_write_retries_same_body() {
        let mock_server = MockServer::start().await;
        mount_login(&mock_server, 1).await;

        Mock::given(method("PUT"))
            .and(path(STATUS_PATH))
            .respond_with(ResponseTemplate::new(401))
            .up_to_n_times(1)
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("PUT"))
            .and(path(STATUS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "operation_status": true,
                "operation_mode": "Nanoe",
                "temperature": 0,
                "wind_direction_horizon": "to_left"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let device = device(&mock_server);
        let state = device.set_swing_position("左").await.unwrap();

        let puts = put_bodies(&mock_server).await;
        assert_eq!(puts.len(), 2);
        assert_eq!(puts[0], puts[1]);
        assert_eq!(puts[0]["wind_direction_horizon"], "to_left");
        assert_eq!(state.mode, HvacMode::FanOnly);
        assert_eq!(state.swing_position, Some("左"));
        assert_eq!(device.target_temperature(), 25.0);
    }

    #[tokio::test]
    async fn commands_reach_the_service_in_order() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(STATUS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(status_document()))
            .mount(&mock_server)
            .await;

        let mut cooling = status_document();
        cooling["operation_mode"] = json!("Cooling");
        Mock::given(method("PUT"))
            .and(path(STATUS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(cooling))
            .expect(2)
            .mount(&mock_server)
            .await;

        let device = device(&mock_server);
        device.refresh().await.unwrap();

        let (mode, temperature) = tokio::join!(
            device.set_mode(HvacMode::Cool),
            device.set_target_temperature(20.0)
        );
        mode.unwrap();
        temperature.unwrap();

        let puts = put_bodies(&mock_server).await;
        assert_eq!(puts[0]["operation_mode"], "Cooling");
        assert_eq!(puts[0]["temperature"], "24.0");
        assert_eq!(puts[1]["temperature"], "20.0");
    }

    #[tokio::test]
    async fn invalid_body_keeps_previous_state() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(STATUS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(status_document()))
            .up_to_n_times(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path(STATUS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let device = device(&mock_server);
        device.refresh().await.unwrap();
        let before = device.raw();

        let err = device.refresh().await.unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
        assert_eq!(device.raw(), before);
    }

    #[tokio::test]
    async fn unknown_label_makes_no_request() {
        let mock_server = MockServer::start().await;

        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let device = device(&mock_server);
        let err = device.set_preset("turbo").await.unwrap_err();

        assert!(matches!(err, Error::Value(ValueError::UnknownPreset(_))));
    }
}
