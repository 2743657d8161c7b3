//! Markdown export of whole collections.
//!
//! Every deck becomes a directory under the output root, nested the same way
//! the deck names are (`Math::Algebra` -> `Math/Algebra`), and every note
//! becomes one `.md` file in it: a level-1 heading made from the `Front`
//! field followed by the rendered `Back` field.
//!
//! # Example
//!
//! ```no_run
//! use ankidown_engine::{Engine, ExportOptions};
//!
//! # async fn example() -> ankidown_engine::Result<()> {
//! let engine = Engine::new();
//!
//! let report = engine.markdown(ExportOptions::new("notes")).run().await?;
//! println!("Wrote {} files", report.file_count());
//! # Ok(())
//! # }
//! ```

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use ankidown::{AnkiClient, DECK_SEPARATOR, NoteInfo};
use serde::Serialize;
use tracing::{debug, info};

use crate::transform::{
    fit_filename_bytes, render_field, render_title, sanitize_filename, truncate_title,
};
use crate::{Error, Result};

/// Default output root, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "markdown_output";

/// Default limit, in characters, for the title part of a filename.
pub const DEFAULT_MAX_TITLE_LEN: usize = 200;

/// Field used for the heading and filename.
pub const FRONT_FIELD: &str = "Front";

/// Field used for the body.
pub const BACK_FIELD: &str = "Back";

/// Longest filename stem or directory name written, in bytes. Leaves room
/// for a `_<n>.md` suffix under the usual 255-byte name limit.
pub const MAX_NAME_BYTES: usize = 240;

const EXTENSION: &str = "md";

/// Where and how to write the export.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Root directory; deck directories are created below it.
    pub output_dir: PathBuf,
    /// Maximum title length used for filenames. Headings are never truncated.
    pub max_title_len: usize,
}

impl ExportOptions {
    /// Options writing to `output_dir` with the default title limit.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            max_title_len: DEFAULT_MAX_TITLE_LEN,
        }
    }

    /// Set the maximum title length used for filenames.
    pub fn max_title_len(mut self, max_title_len: usize) -> Self {
        self.max_title_len = max_title_len;
        self
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR)
    }
}

/// A file written for one note.
#[derive(Debug, Clone, Serialize)]
pub struct ExportedFile {
    /// The note ID.
    pub note_id: i64,
    /// Full path of the written file.
    pub path: PathBuf,
}

/// Outcome of exporting one deck.
#[derive(Debug, Clone, Serialize)]
pub struct DeckReport {
    /// The deck name as reported by Anki.
    pub deck_name: String,
    /// Directory the notes were written to; `None` if the deck had no notes.
    pub directory: Option<PathBuf>,
    /// Files written, in note order.
    pub files: Vec<ExportedFile>,
}

impl DeckReport {
    /// Whether the deck was skipped for having no notes.
    pub fn is_skipped(&self) -> bool {
        self.directory.is_none()
    }
}

/// Outcome of a full export run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExportReport {
    /// One entry per deck, in the order Anki listed them.
    pub decks: Vec<DeckReport>,
}

impl ExportReport {
    /// Total number of files written.
    pub fn file_count(&self) -> usize {
        self.decks.iter().map(|deck| deck.files.len()).sum()
    }

    /// Names of decks that had no notes.
    pub fn skipped_decks(&self) -> impl Iterator<Item = &str> {
        self.decks
            .iter()
            .filter(|deck| deck.is_skipped())
            .map(|deck| deck.deck_name.as_str())
    }
}

/// A note rendered to its file contents, before a filename is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedNote {
    /// Full title used for the heading.
    pub title: String,
    /// Sanitized, truncated title; the filename without suffix or extension.
    pub base_name: String,
    /// Rendered body.
    pub body: String,
}

impl RenderedNote {
    /// Render a note's `Front` and `Back` fields.
    ///
    /// The title falls back to `Note_<id>` when `Front` is missing, empty,
    /// or renders to nothing.
    pub fn from_note(note: &NoteInfo, max_title_len: usize) -> Self {
        let title = note
            .field(FRONT_FIELD)
            .map(render_title)
            .filter(|title| !title.is_empty())
            .unwrap_or_else(|| format!("Note_{}", note.note_id));

        let stem = sanitize_filename(truncate_title(&title, max_title_len));
        let base_name = fit_filename_bytes(&stem, MAX_NAME_BYTES).to_string();
        let body = render_field(note.field(BACK_FIELD));

        Self {
            title,
            base_name,
            body,
        }
    }

    /// The file contents: heading, blank line, body.
    pub fn contents(&self) -> String {
        format!("# {}\n\n{}\n", self.title, self.body)
    }
}

/// Hands out unique filenames within one directory.
///
/// The first use of a base name gets `<base>.md`, later uses get
/// `<base>_1.md`, `<base>_2.md`, ... A candidate that is already taken
/// (because another base produced the same name) is skipped.
#[derive(Debug, Default)]
pub struct FileNameAllocator {
    next_suffix: HashMap<String, usize>,
    taken: HashSet<String>,
}

impl FileNameAllocator {
    /// An allocator with no names handed out yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the next free filename for `base`.
    pub fn allocate(&mut self, base: &str) -> String {
        let next = self.next_suffix.entry(base.to_string()).or_insert(0);
        loop {
            let candidate = match *next {
                0 => format!("{}.{}", base, EXTENSION),
                n => format!("{}_{}.{}", base, n, EXTENSION),
            };
            *next += 1;
            if self.taken.insert(candidate.clone()) {
                return candidate;
            }
        }
    }
}

/// Directory for a deck: one sanitized path segment per non-empty level.
pub fn deck_directory(root: &Path, deck_name: &str) -> PathBuf {
    deck_name
        .split(DECK_SEPARATOR)
        .filter(|part| !part.is_empty())
        .map(sanitize_filename)
        .fold(root.to_path_buf(), |dir, segment| {
            dir.join(fit_filename_bytes(&segment, MAX_NAME_BYTES))
        })
}

/// Markdown export workflow.
#[derive(Debug)]
pub struct MarkdownExport<'a> {
    client: &'a AnkiClient,
    options: ExportOptions,
}

impl<'a> MarkdownExport<'a> {
    pub(crate) fn new(client: &'a AnkiClient, options: ExportOptions) -> Self {
        Self { client, options }
    }

    /// The options this export runs with.
    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Export every deck.
    ///
    /// Returns early, without creating the output root, when Anki reports
    /// no decks at all. The first failure aborts the run; files written
    /// before it are left in place.
    pub async fn run(&self) -> Result<ExportReport> {
        let deck_names = self.client.decks().names().await?;
        if deck_names.is_empty() {
            info!("No decks found in Anki.");
            return Ok(ExportReport::default());
        }

        let root = &self.options.output_dir;
        fs::create_dir_all(root).map_err(|e| Error::io(root, e))?;

        // decks whose names sanitize alike share a directory and its names
        let mut allocators: HashMap<PathBuf, FileNameAllocator> = HashMap::new();
        let mut report = ExportReport::default();
        for deck_name in &deck_names {
            report
                .decks
                .push(self.export_deck(deck_name, &mut allocators).await?);
        }

        info!(
            decks = report.decks.len(),
            files = report.file_count(),
            "Export finished"
        );
        Ok(report)
    }

    /// Export a single deck.
    ///
    /// A deck without notes is skipped and leaves no directory behind.
    pub async fn deck(&self, deck_name: &str) -> Result<DeckReport> {
        self.export_deck(deck_name, &mut HashMap::new()).await
    }

    async fn export_deck(
        &self,
        deck_name: &str,
        allocators: &mut HashMap<PathBuf, FileNameAllocator>,
    ) -> Result<DeckReport> {
        info!("Processing deck: {}", deck_name);

        let notes = self.client.notes().in_deck(deck_name).await?;
        if notes.is_empty() {
            info!("No notes found in deck: {}", deck_name);
            return Ok(DeckReport {
                deck_name: deck_name.to_string(),
                directory: None,
                files: Vec::new(),
            });
        }

        let directory = deck_directory(&self.options.output_dir, deck_name);
        fs::create_dir_all(&directory).map_err(|e| Error::io(&directory, e))?;
        debug!(deck = deck_name, notes = notes.len(), dir = %directory.display(), "Writing deck");

        if allocators.contains_key(&directory) {
            debug!(deck = deck_name, dir = %directory.display(), "Directory shared with an earlier deck");
        }
        let names = allocators.entry(directory.clone()).or_default();
        let mut files = Vec::with_capacity(notes.len());
        for note in &notes {
            let file = write_note(&directory, note, self.options.max_title_len, names)?;
            info!("Saved note {} to {}", file.note_id, file.path.display());
            files.push(file);
        }

        Ok(DeckReport {
            deck_name: deck_name.to_string(),
            directory: Some(directory),
            files,
        })
    }
}

fn write_note(
    directory: &Path,
    note: &NoteInfo,
    max_title_len: usize,
    names: &mut FileNameAllocator,
) -> Result<ExportedFile> {
    let rendered = RenderedNote::from_note(note, max_title_len);
    let path = directory.join(names.allocate(&rendered.base_name));

    fs::write(&path, rendered.contents()).map_err(|e| Error::io(&path, e))?;

    Ok(ExportedFile {
        note_id: note.note_id,
        path,
    })
}
