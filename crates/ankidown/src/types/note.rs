//! Note-related types.

use std::collections::HashMap;

use serde::Deserialize;

/// Information about an existing note, as returned by `notesInfo`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteInfo {
    /// The note ID.
    pub note_id: i64,
    /// The note type (model) name.
    #[serde(default)]
    pub model_name: String,
    /// Tags on the note.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Field values and metadata.
    #[serde(default)]
    pub fields: HashMap<String, NoteField>,
    /// Card IDs generated from this note.
    #[serde(default)]
    pub cards: Vec<i64>,
}

impl NoteInfo {
    /// The HTML value of a field, if the note has it.
    ///
    /// Field names are case-sensitive.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(|field| field.value.as_str())
    }
}

/// A field value with metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct NoteField {
    /// The field value (HTML).
    pub value: String,
    /// The field's position in the note type.
    #[serde(default)]
    pub order: i32,
}
