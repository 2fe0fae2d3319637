//! Note list filtering (category + search)

use crate::models::{Category, Note};

/// Which notes the list shows: one category, optionally narrowed by a query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NoteFilter {
    pub category: Category,
    pub query: String,
}

impl NoteFilter {
    pub fn new(category: Category, query: impl Into<String>) -> Self {
        Self {
            category,
            query: query.into(),
        }
    }

    /// Category must match exactly; a non-empty query must appear
    /// case-insensitively in the title or the raw body.
    #[must_use]
    pub fn matches(&self, note: &Note) -> bool {
        if note.category != self.category {
            return false;
        }
        if self.query.is_empty() {
            return true;
        }
        let query = self.query.to_lowercase();
        note.title.to_lowercase().contains(&query) || note.content.to_lowercase().contains(&query)
    }

    /// Visible notes, in collection order
    #[must_use]
    pub fn apply<'a>(&self, notes: &'a [Note]) -> Vec<&'a Note> {
        notes.iter().filter(|note| self.matches(note)).collect()
    }
}
