//! Common test utilities for export workflow tests.

use ankidown_engine::{Engine, ExportOptions, MarkdownExport};
use serde::Serialize;
use wiremock::matchers::{body_partial_json, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Start a new mock server for testing.
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Create an Engine connected to the mock server.
pub fn engine_for_mock(server: &MockServer) -> Engine {
    let client = ankidown_engine::ClientBuilder::new().url(server.uri()).build();
    Engine::from_client(client)
}

/// An export into `output_dir` using the engine's client.
#[allow(dead_code)]
pub fn export_into<'a>(engine: &'a Engine, output_dir: &std::path::Path) -> MarkdownExport<'a> {
    engine.markdown(ExportOptions::new(output_dir))
}

/// Create a successful AnkiConnect response.
pub fn mock_anki_response<T: Serialize>(result: T) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "result": result,
        "error": null
    }))
}

/// Create an error AnkiConnect response.
#[allow(dead_code)]
pub fn mock_anki_error(error: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "result": null,
        "error": error
    }))
}

/// Mount a mock for `deckNames`.
pub async fn mock_decks(server: &MockServer, decks: &[&str]) {
    Mock::given(method("POST"))
        .and(body_partial_json(serde_json::json!({
            "action": "deckNames",
            "version": 6
        })))
        .respond_with(mock_anki_response(decks))
        .expect(1)
        .mount(server)
        .await;
}

/// Mount `findNotes` and, if any notes are given, `notesInfo` for one deck.
///
/// Each note is `(id, front, back)`.
#[allow(dead_code)]
pub async fn mock_deck_notes(server: &MockServer, deck: &str, notes: &[(i64, &str, &str)]) {
    let ids: Vec<i64> = notes.iter().map(|(id, _, _)| *id).collect();

    Mock::given(method("POST"))
        .and(body_partial_json(serde_json::json!({
            "action": "findNotes",
            "params": { "query": format!("deck:\"{}\"", deck) }
        })))
        .respond_with(mock_anki_response(&ids))
        .expect(1)
        .mount(server)
        .await;

    if notes.is_empty() {
        return;
    }

    let infos: Vec<serde_json::Value> = notes
        .iter()
        .map(|(id, front, back)| {
            serde_json::json!({
                "noteId": id,
                "modelName": "Basic",
                "tags": [],
                "fields": {
                    "Front": {"value": front, "order": 0},
                    "Back": {"value": back, "order": 1}
                },
                "cards": []
            })
        })
        .collect();

    Mock::given(method("POST"))
        .and(body_partial_json(serde_json::json!({
            "action": "notesInfo",
            "params": { "notes": ids }
        })))
        .respond_with(mock_anki_response(infos))
        .expect(1)
        .mount(server)
        .await;
}

/// Mount a raw `notesInfo` response for the given ids.
#[allow(dead_code)]
pub async fn mock_notes_info(server: &MockServer, ids: &[i64], infos: serde_json::Value) {
    Mock::given(method("POST"))
        .and(body_partial_json(serde_json::json!({
            "action": "notesInfo",
            "params": { "notes": ids }
        })))
        .respond_with(mock_anki_response(infos))
        .expect(1)
        .mount(server)
        .await;
}

/// Mount a raw `findNotes` response for a deck.
#[allow(dead_code)]
pub async fn mock_find_notes(server: &MockServer, deck: &str, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(body_partial_json(serde_json::json!({
            "action": "findNotes",
            "params": { "query": format!("deck:\"{}\"", deck) }
        })))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}
