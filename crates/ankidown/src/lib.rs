//! A small async client for the read side of the AnkiConnect API.
//!
//! `ankidown` covers what an exporter needs: listing decks and pulling the
//! notes of a deck with their field values.
//!
//! # Quick Start
//!
//! ```no_run
//! use ankidown::AnkiClient;
//!
//! # async fn example() -> ankidown::Result<()> {
//! // Create a client with default settings (localhost:8765)
//! let client = AnkiClient::new();
//!
//! for deck in client.decks().names().await? {
//!     let notes = client.notes().in_deck(&deck).await?;
//!     println!("{}: {} notes", deck, notes.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Client Configuration
//!
//! Use the builder to point the client somewhere else:
//!
//! ```no_run
//! use std::time::Duration;
//! use ankidown::AnkiClient;
//!
//! let client = AnkiClient::builder()
//!     .url("http://127.0.0.1:8765")
//!     .timeout(Duration::from_secs(60))
//!     .build();
//! ```
//!
//! # Requirements
//!
//! - Anki must be running with the [AnkiConnect](https://ankiweb.net/shared/info/2055492159) add-on installed
//! - By default, the client connects to `http://localhost:8765`

pub mod actions;
pub mod client;
pub mod error;
mod request;
pub mod types;

pub use actions::DECK_SEPARATOR;
pub use client::{AnkiClient, ClientBuilder, DEFAULT_URL};
pub use error::{Error, Result};
pub use types::{NoteField, NoteInfo};
