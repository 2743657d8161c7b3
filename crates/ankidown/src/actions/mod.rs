//! Action modules for AnkiConnect operations.
//!
//! Each module provides a set of related operations grouped by domain.

mod decks;
mod notes;

pub use decks::{DECK_SEPARATOR, DeckActions};
pub use notes::{NoteActions, deck_query};
