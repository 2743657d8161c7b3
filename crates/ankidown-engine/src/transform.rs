//! Field rendering and filename derivation.
//!
//! Anki stores field values as HTML. These helpers turn a field into
//! Markdown for the body of an exported file, into a single-line title for
//! its heading, and into a filename that is safe on every common filesystem.
//!
//! # Example
//!
//! ```
//! use ankidown_engine::transform::{
//!     render_field, render_markdown, render_title, sanitize_filename, truncate_title,
//! };
//!
//! assert_eq!(render_markdown("<ul><li>4</li></ul>"), "• 4");
//! assert_eq!(render_field(None), "");
//! assert_eq!(render_title("<b>2+2</b>"), "2+2");
//! assert_eq!(sanitize_filename("2+2"), "2_2");
//! assert_eq!(truncate_title("hello brave world", 12), "hello brave");
//! ```

use std::sync::LazyLock;

use regex_lite::Regex;

/// Character used for unordered list items.
pub const BULLET: char = '•';

/// Filename used when nothing usable survives sanitizing.
pub const PLACEHOLDER_NAME: &str = "unnamed";

static IMAGE_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<img\b[^>]*>").unwrap());

static TABLE_CELL_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</t[dh]\s*>").unwrap());

static TABLE_ROW_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</tr\s*>").unwrap());

static TABLE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</?(?:table|thead|tbody|tfoot|tr|td|th|caption|colgroup|col)\b[^>]*>")
        .unwrap()
});

static INLINE_STYLE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</?(?:b|strong|i|em|u|s|strike|del|mark|span|font)\b[^>]*>").unwrap()
});

static BLOCK_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:\s*</?(?:div|p)\b[^>]*>\s*)+").unwrap());

// escapes the converter adds to running text, which plain-text output never has
static TEXT_ESCAPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\\([\\_*<>])").unwrap());

static MARKDOWN_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\([\\`*_{}\[\]()#+\-.!~<>|=])").unwrap());

/// Convert an HTML field to Markdown.
///
/// - images are dropped
/// - table markup is dropped, cell text is kept one row per line
/// - links become `[text](href)`
/// - unordered list items start with [`BULLET`]
/// - `<div>`/`<p>` boundaries are single line breaks, as Anki's editor
///   writes one `<div>` per line
/// - blank lines are collapsed and the result is trimmed
/// - `_`, `*`, `<`, `>` and `\` in text are left unescaped
///
/// Empty input yields an empty string.
pub fn render_markdown(html: &str) -> String {
    TEXT_ESCAPE.replace_all(&convert(html), "$1").into_owned()
}

/// [`render_markdown`] for a field that may be missing from the note.
pub fn render_field(html: Option<&str>) -> String {
    html.map(render_markdown).unwrap_or_default()
}

/// Convert an HTML field to a single line of plain text for a heading.
///
/// Emphasis is removed rather than rendered, line breaks become spaces and
/// Markdown escapes are undone, so `<b>2+2</b>` yields `2+2`.
pub fn render_title(html: &str) -> String {
    let plain = INLINE_STYLE_TAG.replace_all(html, "");
    let markdown = convert(&plain);
    let unescaped = MARKDOWN_ESCAPE.replace_all(&markdown, "$1");

    unescaped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Turn arbitrary text into a filename stem.
///
/// Whitespace and every character outside ASCII letters, digits, `-`, `_`,
/// `.` and the Latin-1 Supplement / Latin Extended-A letters
/// (`U+00C0..=U+017F`) become `_`. Runs of `_` are collapsed and stripped
/// from both ends. Returns [`PLACEHOLDER_NAME`] if nothing is left, or if
/// only dots are left.
pub fn sanitize_filename(text: &str) -> String {
    let mut sanitized = String::with_capacity(text.len());
    for c in text.chars() {
        let c = if is_filename_char(c) { c } else { '_' };
        if c == '_' && sanitized.ends_with('_') {
            continue;
        }
        sanitized.push(c);
    }

    let trimmed = sanitized.trim_matches('_');
    if trimmed.is_empty() || trimmed.chars().all(|c| c == '.') {
        PLACEHOLDER_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

fn is_filename_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '\u{00C0}'..='\u{017F}')
}

/// Shorten `title` to at most `max_len` characters.
///
/// Cuts at the last space within the limit when there is one, otherwise
/// exactly at the limit. The result is always a prefix of `title`.
pub fn truncate_title(title: &str, max_len: usize) -> &str {
    let Some((limit, _)) = title.char_indices().nth(max_len) else {
        return title;
    };

    let head = &title[..limit];
    match head.rfind(' ') {
        Some(space) => &head[..space],
        None => head,
    }
}

/// Shorten a filename stem to at most `max_bytes` bytes of UTF-8.
///
/// Cuts on a char boundary and drops `_` left dangling at the cut, so a
/// [`sanitize_filename`] result stays valid. Falls back to
/// [`PLACEHOLDER_NAME`] if the cut leaves nothing.
pub fn fit_filename_bytes(stem: &str, max_bytes: usize) -> &str {
    if stem.len() <= max_bytes {
        return stem;
    }

    let mut end = max_bytes;
    while !stem.is_char_boundary(end) {
        end -= 1;
    }

    match stem[..end].trim_end_matches('_') {
        "" => PLACEHOLDER_NAME,
        fitted => fitted,
    }
}

/// HTML to tidied Markdown, escapes still in place.
fn convert(html: &str) -> String {
    if html.trim().is_empty() {
        return String::new();
    }

    let html = IMAGE_TAG.replace_all(html, "");
    let html = TABLE_CELL_END.replace_all(&html, " ");
    let html = TABLE_ROW_END.replace_all(&html, "<br>");
    let html = TABLE_TAG.replace_all(&html, "");
    let html = BLOCK_BOUNDARY.replace_all(&html, "<br>");

    tidy(&html2md::parse_html(&html))
}

/// Normalize the raw converter output line by line.
fn tidy(markdown: &str) -> String {
    let mut lines: Vec<String> = Vec::new();

    for raw in markdown.lines() {
        let line = bulletize(raw.trim_end());

        if line.is_empty() {
            if lines.last().is_some_and(|last| !last.is_empty()) {
                lines.push(line);
            }
            continue;
        }

        // no blank line between two items of the same list
        if is_bullet(&line) && lines.len() >= 2 {
            let n = lines.len();
            if lines[n - 1].is_empty() && is_bullet(&lines[n - 2]) {
                lines.pop();
            }
        }

        lines.push(line);
    }

    lines.join("\n").trim().to_string()
}

fn bulletize(line: &str) -> String {
    let body = line.trim_start();
    let indent = &line[..line.len() - body.len()];

    ["* ", "- ", "+ "]
        .iter()
        .find_map(|marker| body.strip_prefix(marker))
        .map(|rest| format!("{}{} {}", indent, BULLET, rest))
        .unwrap_or_else(|| line.to_string())
}

fn is_bullet(line: &str) -> bool {
    line.trim_start().starts_with(BULLET)
}
