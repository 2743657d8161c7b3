//! Domain types for AnkiConnect.

mod note;

pub use note::{NoteField, NoteInfo};
