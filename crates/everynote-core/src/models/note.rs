//! Note model

use std::fmt;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::Category;
use crate::editor::strip_markup;
use crate::util::format_display_date;

/// Title used until a note has any content
pub const UNTITLED_NOTE: &str = "Untitled Note";

/// Number of body characters copied into the title
pub const TITLE_MAX_CHARS: usize = 50;

/// Number of stripped body characters shown in a list preview
pub const PREVIEW_MAX_CHARS: usize = 100;

const EMPTY_PREVIEW: &str = "No content";

/// Opaque note identifier derived from the creation timestamp (Unix ms).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    /// Build an identifier from a Unix millisecond timestamp
    #[must_use]
    pub fn from_timestamp(millis: i64) -> Self {
        Self(millis.to_string())
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NoteId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A user-authored note.
///
/// Field names serialize in camelCase so the stored `notes` payload keeps
/// the `createdAt` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Unique identifier within the collection
    pub id: NoteId,
    /// First [`TITLE_MAX_CHARS`] characters of the body, markup included
    pub title: String,
    /// Marked-up body, opaque to the application
    pub content: String,
    pub category: Category,
    /// Display date formatted at creation time
    pub date: String,
    /// Creation timestamp (Unix ms)
    pub created_at: i64,
}

impl Note {
    /// Create an empty note in `category`, stamped with `now`.
    #[must_use]
    pub fn new_at(category: Category, now: DateTime<Local>) -> Self {
        let created_at = now.timestamp_millis();
        Self {
            id: NoteId::from_timestamp(created_at),
            title: UNTITLED_NOTE.to_string(),
            content: String::new(),
            category,
            date: format_display_date(now.date_naive()),
            created_at,
        }
    }

    /// Create an empty note in `category`, stamped with the current local time.
    #[must_use]
    pub fn new(category: Category) -> Self {
        Self::new_at(category, Local::now())
    }

    /// Overwrite the body and recompute the title from it.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.title = derive_title(&self.content);
    }

    /// Body with markup stripped, cut to [`PREVIEW_MAX_CHARS`] characters.
    ///
    /// Returns `"No content"` when nothing is left after stripping.
    #[must_use]
    pub fn preview(&self) -> String {
        let preview: String = strip_markup(&self.content)
            .chars()
            .take(PREVIEW_MAX_CHARS)
            .collect();
        if preview.is_empty() {
            EMPTY_PREVIEW.to_string()
        } else {
            preview
        }
    }
}

/// Title for a body: its first [`TITLE_MAX_CHARS`] characters, unstripped.
#[must_use]
pub fn derive_title(content: &str) -> String {
    let title: String = content.chars().take(TITLE_MAX_CHARS).collect();
    if title.is_empty() {
        UNTITLED_NOTE.to_string()
    } else {
        title
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_note_new_at() {
        let now = fixed_now();
        let note = Note::new_at(Category::Meeting, now);

        assert_eq!(note.id, NoteId::from_timestamp(now.timestamp_millis()));
        assert_eq!(note.title, UNTITLED_NOTE);
        assert_eq!(note.content, "");
        assert_eq!(note.category, Category::Meeting);
        assert_eq!(note.date, "16 Oct 2026");
        assert_eq!(note.created_at, now.timestamp_millis());
    }

    #[test]
    fn test_set_content_recomputes_title() {
        let mut note = Note::new_at(Category::General, fixed_now());
        note.set_content("<b>Groceries</b>");
        assert_eq!(note.content, "<b>Groceries</b>");
        assert_eq!(note.title, "<b>Groceries</b>");

        note.set_content("");
        assert_eq!(note.title, UNTITLED_NOTE);
    }

    #[test]
    fn test_derive_title_truncates_by_chars() {
        let long = "é".repeat(80);
        let title = derive_title(&long);
        assert_eq!(title.chars().count(), TITLE_MAX_CHARS);
        assert_eq!(derive_title("short"), "short");
    }

    #[test]
    fn test_preview_strips_markup() {
        let mut note = Note::new_at(Category::General, fixed_now());
        note.set_content("<h1>Plan</h1><ul><li>ship it</li></ul>");
        assert_eq!(note.preview(), "Planship it");

        note.set_content("<br>");
        assert_eq!(note.preview(), "No content");

        note.set_content("x".repeat(150));
        assert_eq!(note.preview().len(), PREVIEW_MAX_CHARS);
    }

    #[test]
    fn test_serializes_with_stored_field_names() {
        let note = Note::new_at(Category::ToDo, fixed_now());
        let value = serde_json::to_value(&note).unwrap();

        assert_eq!(value["id"], note.id.as_str());
        assert_eq!(value["category"], "To-Do");
        assert_eq!(value["createdAt"], note.created_at);
        assert!(value.get("created_at").is_none());
    }

    #[test]
    fn test_deserializes_browser_payload() {
        let payload = r#"{
            "id": "1760607000000",
            "title": "Standup",
            "content": "Standup",
            "category": "Meeting",
            "date": "16 Oct 2025",
            "createdAt": 1760607000000
        }"#;

        let note: Note = serde_json::from_str(payload).unwrap();
        assert_eq!(note.id, NoteId::from("1760607000000"));
        assert_eq!(note.category, Category::Meeting);
        assert_eq!(note.created_at, 1_760_607_000_000);
    }
}
