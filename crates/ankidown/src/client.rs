//! The AnkiConnect client and builder.

use std::time::Duration;

use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};

use crate::actions::{DeckActions, NoteActions};
use crate::error::{Error, Result};
use crate::request::{AnkiRequest, AnkiResponse};

/// Default URL for AnkiConnect.
pub const DEFAULT_URL: &str = "http://localhost:8765";

/// The main client for talking to AnkiConnect.
///
/// # Example
///
/// ```no_run
/// use ankidown::AnkiClient;
///
/// # async fn example() -> ankidown::Result<()> {
/// let client = AnkiClient::new();
///
/// let decks = client.decks().names().await?;
/// println!("Decks: {:?}", decks);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AnkiClient {
    http_client: Client,
    base_url: String,
}

impl AnkiClient {
    /// Create a new client with default settings.
    ///
    /// Connects to `http://localhost:8765` without a request timeout.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a builder for custom client configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// The URL requests are sent to.
    pub fn url(&self) -> &str {
        &self.base_url
    }

    /// Access deck operations.
    pub fn decks(&self) -> DeckActions<'_> {
        DeckActions { client: self }
    }

    /// Access note operations.
    pub fn notes(&self) -> NoteActions<'_> {
        NoteActions { client: self }
    }

    /// Execute an action without parameters.
    pub(crate) async fn invoke_without_params<R>(&self, action: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let request = AnkiRequest::<()>::without_params(action);
        self.send_request(&request).await
    }

    /// Execute an action with parameters.
    pub(crate) async fn invoke<P, R>(&self, action: &str, params: P) -> Result<R>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let request = AnkiRequest::new(action, params);
        self.send_request(&request).await
    }

    /// Send a request to AnkiConnect and process the response.
    async fn send_request<T, R>(&self, request: &AnkiRequest<'_, T>) -> Result<R>
    where
        T: Serialize,
        R: DeserializeOwned,
    {
        let response = self
            .http_client
            .post(&self.base_url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    Error::ConnectionRefused
                } else {
                    Error::Http(e)
                }
            })?
            .error_for_status()?;

        let body = response.bytes().await?;
        let anki_response: AnkiResponse<R> = serde_json::from_slice(&body)?;

        anki_response.into_result()
    }
}

impl Default for AnkiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating a customized [`AnkiClient`].
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use ankidown::AnkiClient;
///
/// let client = AnkiClient::builder()
///     .url("http://127.0.0.1:8765")
///     .timeout(Duration::from_secs(60))
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    base_url: String,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_URL.to_string(),
            timeout: None,
        }
    }

    /// Set the AnkiConnect URL.
    ///
    /// Defaults to `http://localhost:8765`.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Without one, requests wait as long as the transport allows.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Build the client.
    pub fn build(self) -> AnkiClient {
        let mut http_client = Client::builder();
        if let Some(timeout) = self.timeout {
            http_client = http_client.timeout(timeout);
        }

        AnkiClient {
            http_client: http_client.build().expect("Failed to build HTTP client"),
            base_url: self.base_url,
        }
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
