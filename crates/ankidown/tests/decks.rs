//! Tests for deck AnkiConnect actions and transport failures.

mod common;

use ankidown::{AnkiClient, Error};
use common::{mock_action, mock_anki_error, mock_anki_response, setup_mock_server};
use wiremock::ResponseTemplate;

#[tokio::test]
async fn test_deck_names() {
    let server = setup_mock_server().await;
    mock_action(
        &server,
        "deckNames",
        mock_anki_response(vec!["Default", "Math::Algebra"]),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let decks = client.decks().names().await.unwrap();

    assert_eq!(decks, vec!["Default", "Math::Algebra"]);
}

#[tokio::test]
async fn test_deck_names_empty() {
    let server = setup_mock_server().await;
    mock_action(&server, "deckNames", mock_anki_response(Vec::<String>::new())).await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let decks = client.decks().names().await.unwrap();

    assert!(decks.is_empty());
}

#[tokio::test]
async fn test_deck_error() {
    let server = setup_mock_server().await;
    mock_action(&server, "deckNames", mock_anki_error("collection is not available")).await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let result = client.decks().names().await;

    let err = result.unwrap_err();
    assert!(matches!(err, Error::AnkiConnect(_)));
    assert_eq!(
        err.to_string(),
        "AnkiConnect error: collection is not available"
    );
}

#[tokio::test]
async fn test_missing_result_is_empty_response() {
    let server = setup_mock_server().await;
    mock_action(
        &server,
        "deckNames",
        ResponseTemplate::new(200).set_body_json(serde_json::json!({ "error": null })),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let result = client.decks().names().await;

    assert!(matches!(result, Err(Error::EmptyResponse)));
}

#[tokio::test]
async fn test_server_error_status() {
    let server = setup_mock_server().await;
    mock_action(&server, "deckNames", ResponseTemplate::new(500)).await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let result = client.decks().names().await;

    assert!(matches!(result, Err(Error::Http(_))));
}

#[tokio::test]
async fn test_malformed_body() {
    let server = setup_mock_server().await;
    mock_action(
        &server,
        "deckNames",
        ResponseTemplate::new(200).set_body_string("definitely not json"),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let result = client.decks().names().await;

    assert!(matches!(result, Err(Error::Json(_))));
}

#[tokio::test]
async fn test_connection_refused() {
    // Nothing listens on port 1
    let client = AnkiClient::builder().url("http://127.0.0.1:1").build();
    let result = client.decks().names().await;

    assert!(matches!(result, Err(Error::ConnectionRefused)));
}
