//! Export Anki decks to Markdown files.
//!
//! Built on the [`ankidown`] client: decks and notes are read over
//! AnkiConnect, fields are converted from HTML to Markdown, and each note is
//! written to its own file in a directory tree mirroring the deck hierarchy.
//!
//! # Quick Start
//!
//! ```no_run
//! use ankidown_engine::{Engine, ExportOptions};
//!
//! # async fn example() -> ankidown_engine::Result<()> {
//! let engine = Engine::new();
//!
//! let report = engine.markdown(ExportOptions::default()).run().await?;
//! for deck in report.skipped_decks() {
//!     println!("{} had no notes", deck);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`transform`] - HTML to Markdown, titles and filename sanitizing
//! - [`export`] - the export workflow itself

mod error;

pub mod export;
pub mod transform;

pub use error::{Error, Result};
pub use export::{DeckReport, ExportOptions, ExportReport, ExportedFile, MarkdownExport};

// Re-export ankidown types for convenience
pub use ankidown::{AnkiClient, ClientBuilder, DEFAULT_URL, NoteField, NoteInfo};

/// Export engine for Anki collections.
///
/// The engine wraps an [`AnkiClient`] and hands out export workflows that
/// borrow it.
///
/// # Example
///
/// ```no_run
/// use ankidown_engine::{Engine, ExportOptions};
///
/// # async fn example() -> ankidown_engine::Result<()> {
/// let client = ankidown_engine::AnkiClient::builder()
///     .url("http://127.0.0.1:8765")
///     .build();
/// let engine = Engine::from_client(client);
///
/// let report = engine
///     .markdown(ExportOptions::new("cards").max_title_len(80))
///     .run()
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    client: AnkiClient,
}

impl Engine {
    /// Create a new engine with default client settings.
    ///
    /// Connects to AnkiConnect at `http://localhost:8765`.
    pub fn new() -> Self {
        Self {
            client: AnkiClient::new(),
        }
    }

    /// Create an engine from an existing client.
    pub fn from_client(client: AnkiClient) -> Self {
        Self { client }
    }

    /// Get a reference to the underlying client.
    pub fn client(&self) -> &AnkiClient {
        &self.client
    }

    /// Access the Markdown export workflow.
    pub fn markdown(&self, options: ExportOptions) -> MarkdownExport<'_> {
        MarkdownExport::new(&self.client, options)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
