//! Note-related AnkiConnect actions.
//!
//! # Example
//!
//! ```no_run
//! use ankidown::AnkiClient;
//!
//! # async fn example() -> ankidown::Result<()> {
//! let client = AnkiClient::new();
//!
//! let note_ids = client.notes().find("deck:Default").await?;
//! let notes = client.notes().info(&note_ids).await?;
//! # Ok(())
//! # }
//! ```

use serde::Serialize;

use crate::client::AnkiClient;
use crate::error::Result;
use crate::types::NoteInfo;

/// Provides access to note-related AnkiConnect operations.
///
/// Obtained via [`AnkiClient::notes()`].
#[derive(Debug)]
pub struct NoteActions<'a> {
    pub(crate) client: &'a AnkiClient,
}

#[derive(Serialize)]
struct FindNotesParams<'a> {
    query: &'a str,
}

#[derive(Serialize)]
struct NotesInfoParams<'a> {
    notes: &'a [i64],
}

/// Build the search query selecting every note of a deck.
pub fn deck_query(deck_name: &str) -> String {
    format!("deck:\"{}\"", deck_name)
}

impl<'a> NoteActions<'a> {
    /// Find notes matching a query.
    ///
    /// Returns a list of note IDs. Use [`info()`](Self::info) to get full note details.
    /// The query uses Anki's search syntax, e.g. `deck:"Japanese" tag:verb`.
    pub async fn find(&self, query: &str) -> Result<Vec<i64>> {
        self.client
            .invoke("findNotes", FindNotesParams { query })
            .await
    }

    /// Get detailed information about notes.
    pub async fn info(&self, note_ids: &[i64]) -> Result<Vec<NoteInfo>> {
        self.client
            .invoke("notesInfo", NotesInfoParams { notes: note_ids })
            .await
    }

    /// Get every note of a deck with its fields.
    ///
    /// Returns an empty list, without a second request, when the deck has
    /// no notes. Anki's `deck:` search also matches notes of child decks.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use ankidown::AnkiClient;
    /// # async fn example() -> ankidown::Result<()> {
    /// let client = AnkiClient::new();
    ///
    /// for note in client.notes().in_deck("Math::Algebra").await? {
    ///     println!("{}: {:?}", note.note_id, note.field("Front"));
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn in_deck(&self, deck_name: &str) -> Result<Vec<NoteInfo>> {
        let note_ids = self.find(&deck_query(deck_name)).await?;
        if note_ids.is_empty() {
            return Ok(Vec::new());
        }
        self.info(&note_ids).await
    }
}
