//! Error types for the ankidown client.
//!
//! Every failure of a request, whether the transport broke or AnkiConnect
//! answered with an error marker, surfaces as the single [`Error`] type.
//!
//! # Example
//!
//! ```no_run
//! use ankidown::{AnkiClient, Error};
//!
//! # async fn example() {
//! let client = AnkiClient::new();
//!
//! match client.decks().names().await {
//!     Ok(decks) => println!("Found {} decks", decks.len()),
//!     Err(Error::ConnectionRefused) => {
//!         eprintln!("Please start Anki with AnkiConnect installed");
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! # }
//! ```

use thiserror::Error;

/// The error type for AnkiConnect requests.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP/network error from reqwest, including non-success status codes.
    ///
    /// For refused connections, see [`Error::ConnectionRefused`].
    #[error("Failed to connect to AnkiConnect: {0}")]
    Http(#[from] reqwest::Error),

    /// AnkiConnect returned an error message.
    ///
    /// Common messages include "deck was not found" or a search syntax error.
    #[error("AnkiConnect error: {0}")]
    AnkiConnect(String),

    /// Response carried neither a result nor an error.
    #[error("AnkiConnect returned empty response")]
    EmptyResponse,

    /// JSON serialization/deserialization error.
    ///
    /// May occur if AnkiConnect returns unexpected data formats.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Connection refused - Anki is likely not running.
    ///
    /// This error occurs when:
    /// - Anki is not running
    /// - The AnkiConnect add-on is not installed
    /// - AnkiConnect is configured on a different port
    #[error("Could not connect to Anki. Is Anki running with AnkiConnect installed?")]
    ConnectionRefused,
}

/// A specialized Result type for AnkiConnect requests.
pub type Result<T> = std::result::Result<T, Error>;
