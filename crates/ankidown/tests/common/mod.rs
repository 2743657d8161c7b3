//! Common test utilities for AnkiConnect tests.

use serde::Serialize;
use wiremock::matchers::{body_partial_json, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Start a new mock server for testing.
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Create a successful AnkiConnect response.
pub fn mock_anki_response<T: Serialize>(result: T) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "result": result,
        "error": null
    }))
}

/// Create an error AnkiConnect response.
#[allow(dead_code)] // Not all test files use this
pub fn mock_anki_error(error: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "result": null,
        "error": error
    }))
}

/// Mount a mock for a specific action, expected to be called once.
pub async fn mock_action(server: &MockServer, action: &str, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(body_partial_json(serde_json::json!({
            "action": action,
            "version": 6
        })))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

/// Mount a mock that only matches when the request carries these params.
#[allow(dead_code)]
pub async fn mock_action_with_params(
    server: &MockServer,
    action: &str,
    params: serde_json::Value,
    response: ResponseTemplate,
) {
    Mock::given(method("POST"))
        .and(body_partial_json(serde_json::json!({
            "action": action,
            "version": 6,
            "params": params
        })))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

/// A `notesInfo` entry with Front/Back fields.
#[allow(dead_code)]
pub fn note_json(note_id: i64, front: &str, back: &str) -> serde_json::Value {
    serde_json::json!({
        "noteId": note_id,
        "modelName": "Basic",
        "tags": [],
        "fields": {
            "Front": {"value": front, "order": 0},
            "Back": {"value": back, "order": 1}
        },
        "cards": []
    })
}
