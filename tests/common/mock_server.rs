use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

use super::setup::{AUTH_HEADER, TABLE_PATH};

pub async fn setup_create_mock(record: Value) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TABLE_PATH))
        .and(header("Authorization", AUTH_HEADER))
        .respond_with(ResponseTemplate::new(200).set_body_json(record))
        .mount(&mock_server)
        .await;

    mock_server
}

pub async fn setup_list_mock(page: Value) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(TABLE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(page))
        .mount(&mock_server)
        .await;

    mock_server
}

pub async fn setup_error_mock(status_code: u16, error_type: &str, message: &str) -> MockServer {
    let mock_server = MockServer::start().await;

    let error_body = json!({
        "error": {
            "type": error_type,
            "message": message
        }
    });

    Mock::given(path(TABLE_PATH))
        .respond_with(ResponseTemplate::new(status_code).set_body_json(error_body))
        .mount(&mock_server)
        .await;

    mock_server
}
