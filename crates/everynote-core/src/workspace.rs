//! Home screen state: the note collection, selection, and list filters.
//!
//! Every change to the collection is written back to local storage before
//! the mutating call returns.

use chrono::{DateTime, Local};

use crate::error::{Error, Result};
use crate::filter::NoteFilter;
use crate::models::{Category, Note, NoteId};
use crate::storage::{LocalStorage, NotePersistence};

/// Notes plus everything the home screen tracks about them.
pub struct NotesWorkspace<S> {
    storage: S,
    notes: Vec<Note>,
    active_note_id: Option<NoteId>,
    editor_content: String,
    search_query: String,
    selected_category: Category,
}

impl<S: LocalStorage> NotesWorkspace<S> {
    /// Load the stored collection.
    ///
    /// The first (most recently created) note becomes active.
    pub fn load(storage: S) -> Result<Self> {
        let notes = storage.load_notes()?;
        tracing::info!("Loaded {} notes from local storage", notes.len());

        let mut workspace = Self::empty(storage);
        if let Some(first) = notes.first() {
            workspace.active_note_id = Some(first.id.clone());
            workspace.editor_content.clone_from(&first.content);
        }
        workspace.notes = notes;
        Ok(workspace)
    }

    /// A workspace with no notes that has not touched storage yet
    pub fn empty(storage: S) -> Self {
        Self {
            storage,
            notes: Vec::new(),
            active_note_id: None,
            editor_content: String::new(),
            search_query: String::new(),
            selected_category: Category::default(),
        }
    }

    /// All notes, most recently created first
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub const fn active_note_id(&self) -> Option<&NoteId> {
        self.active_note_id.as_ref()
    }

    /// The note bound to the editor, if it still exists
    pub fn active_note(&self) -> Option<&Note> {
        let id = self.active_note_id.as_ref()?;
        self.notes.iter().find(|note| &note.id == id)
    }

    /// Content currently shown in the editor
    pub fn editor_content(&self) -> &str {
        &self.editor_content
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub const fn selected_category(&self) -> Category {
        self.selected_category
    }

    pub fn filter(&self) -> NoteFilter {
        NoteFilter::new(self.selected_category, self.search_query.clone())
    }

    /// Notes visible under the current category and search query
    pub fn visible_notes(&self) -> Vec<&Note> {
        self.filter().apply(&self.notes)
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn select_category(&mut self, category: Category) {
        self.selected_category = category;
    }

    /// Create an empty note in the selected category and make it active.
    pub fn create_note(&mut self) -> Result<NoteId> {
        self.create_note_at(Local::now())
    }

    /// [`Self::create_note`] with an explicit creation time.
    ///
    /// If another note already uses the timestamp as its id, the timestamp
    /// is bumped one millisecond at a time until it is free.
    pub fn create_note_at(&mut self, now: DateTime<Local>) -> Result<NoteId> {
        let mut note = Note::new_at(self.selected_category, now);
        while self.notes.iter().any(|existing| existing.id == note.id) {
            note.created_at += 1;
            note.id = NoteId::from_timestamp(note.created_at);
        }

        let id = note.id.clone();
        tracing::info!("Created note {} in {}", id, note.category);
        self.notes.insert(0, note);
        self.active_note_id = Some(id.clone());
        self.editor_content.clear();
        self.persist()?;
        Ok(id)
    }

    /// Apply an input event read from the editor while `source` was active.
    ///
    /// Overwrites the active note's body and title. Without an active note
    /// only the editor content changes. Editor reads complete asynchronously,
    /// so an edit whose `source` is no longer the active note is dropped and
    /// `Ok(false)` is returned.
    pub fn edit_note(
        &mut self,
        source: Option<&NoteId>,
        content: impl Into<String>,
    ) -> Result<bool> {
        if source != self.active_note_id.as_ref() {
            tracing::debug!("Dropping stale edit for note {:?}", source);
            return Ok(false);
        }
        self.editor_content = content.into();

        let Some(id) = source else {
            return Ok(true);
        };
        if let Some(note) = self.notes.iter_mut().find(|note| &note.id == id) {
            note.set_content(self.editor_content.clone());
        }
        self.persist()?;
        Ok(true)
    }

    /// Bind `id` to the editor and load its stored body.
    pub fn select_note(&mut self, id: &NoteId) -> Result<()> {
        let note = self
            .notes
            .iter()
            .find(|note| &note.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;

        self.editor_content.clone_from(&note.content);
        self.active_note_id = Some(note.id.clone());
        Ok(())
    }

    /// Write the whole collection to local storage
    pub fn persist(&self) -> Result<()> {
        self.storage.save_notes(&self.notes)?;
        tracing::debug!("Persisted {} notes", self.notes.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UNTITLED_NOTE;
    use crate::storage::{MemoryStorage, SqliteLocalStorage, NOTES_KEY};
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn at(millis: i64) -> DateTime<Local> {
        Local.timestamp_millis_opt(millis).unwrap()
    }

    fn type_into<S: LocalStorage>(ws: &mut NotesWorkspace<S>, content: impl Into<String>) {
        let active = ws.active_note_id().cloned();
        assert!(ws.edit_note(active.as_ref(), content).unwrap());
    }

    fn workspace() -> (NotesWorkspace<MemoryStorage>, MemoryStorage) {
        let storage = MemoryStorage::new();
        (NotesWorkspace::load(storage.clone()).unwrap(), storage)
    }

    #[test]
    fn create_note_prepends_and_activates() {
        let (mut ws, storage) = workspace();
        ws.select_category(Category::Ideas);

        let first = ws.create_note_at(at(1_000)).unwrap();
        type_into(&mut ws, "draft");
        let second = ws.create_note_at(at(2_000)).unwrap();

        let ids: Vec<&NoteId> = ws.notes().iter().map(|note| &note.id).collect();
        assert_eq!(ids, vec![&second, &first]);
        assert_eq!(ws.active_note_id(), Some(&second));
        assert_eq!(ws.editor_content(), "");

        let created = ws.active_note().unwrap();
        assert_eq!(created.title, UNTITLED_NOTE);
        assert_eq!(created.category, Category::Ideas);

        assert_eq!(storage.load_notes().unwrap(), ws.notes().to_vec());
    }

    #[test]
    fn colliding_timestamps_get_unique_ids() {
        let (mut ws, _) = workspace();

        let a = ws.create_note_at(at(5_000)).unwrap();
        let b = ws.create_note_at(at(5_000)).unwrap();
        let c = ws.create_note_at(at(5_000)).unwrap();

        assert_eq!(a, NoteId::from_timestamp(5_000));
        assert_eq!(b, NoteId::from_timestamp(5_001));
        assert_eq!(c, NoteId::from_timestamp(5_002));
        assert_eq!(ws.notes()[0].created_at, 5_002);
    }

    #[test]
    fn creating_n_notes_shows_n_in_category() {
        let (mut ws, _) = workspace();
        ws.select_category(Category::Meeting);
        for i in 0..4 {
            ws.create_note_at(at(10_000 + i)).unwrap();
        }
        ws.select_category(Category::General);
        ws.create_note_at(at(20_000)).unwrap();

        ws.select_category(Category::Meeting);
        assert_eq!(ws.visible_notes().len(), 4);
        ws.select_category(Category::General);
        assert_eq!(ws.visible_notes().len(), 1);
        ws.select_category(Category::Personal);
        assert!(ws.visible_notes().is_empty());
    }

    #[test]
    fn editing_changes_only_active_note() {
        let (mut ws, _) = workspace();
        let first = ws.create_note_at(at(1_000)).unwrap();
        type_into(&mut ws, "first body");
        let second = ws.create_note_at(at(2_000)).unwrap();
        type_into(&mut ws, "second body");

        let untouched = ws.notes()[0].clone();
        ws.select_note(&first).unwrap();
        assert_eq!(ws.editor_content(), "first body");

        let long = format!("<b>{}</b>", "x".repeat(60));
        type_into(&mut ws, long.clone());

        let edited = ws.active_note().unwrap();
        assert_eq!(edited.id, first);
        assert_eq!(edited.content, long);
        assert_eq!(edited.title, long.chars().take(50).collect::<String>());
        assert_eq!(ws.notes()[0], untouched);
        assert_eq!(ws.notes()[0].id, second);
    }

    #[test]
    fn edit_without_active_note_only_updates_editor() {
        let (mut ws, storage) = workspace();
        type_into(&mut ws, "orphan text");

        assert_eq!(ws.editor_content(), "orphan text");
        assert!(ws.notes().is_empty());
        assert_eq!(storage.get_item(NOTES_KEY).unwrap(), None);
    }

    #[test]
    fn late_edit_from_previous_note_is_dropped() {
        let (mut ws, storage) = workspace();
        let alpha = ws.create_note_at(at(1_000)).unwrap();
        type_into(&mut ws, "alpha");
        let bravo = ws.create_note_at(at(2_000)).unwrap();
        type_into(&mut ws, "bravo");

        ws.select_note(&alpha).unwrap();
        ws.select_note(&bravo).unwrap();
        // A read of alpha's region that was still pending when bravo got selected
        let applied = ws.edit_note(Some(&alpha), "alpha!").unwrap();

        assert!(!applied);
        assert_eq!(ws.editor_content(), "bravo");
        let bodies: Vec<&str> = ws.notes().iter().map(|n| n.content.as_str()).collect();
        assert_eq!(bodies, vec!["bravo", "alpha"]);
        assert_eq!(storage.load_notes().unwrap(), ws.notes().to_vec());
    }

    #[test]
    fn select_unknown_note_is_not_found() {
        let (mut ws, _) = workspace();
        let error = ws.select_note(&NoteId::from("missing")).unwrap_err();
        assert!(matches!(error, Error::NotFound(_)));
    }

    #[test]
    fn filter_inputs_recompute_visible_set() {
        let (mut ws, _) = workspace();
        ws.create_note_at(at(1_000)).unwrap();
        type_into(&mut ws, "Quarterly planning");
        ws.create_note_at(at(2_000)).unwrap();
        type_into(&mut ws, "Grocery list");

        ws.set_search_query("PLAN");
        let titles: Vec<&str> = ws.visible_notes().iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["Quarterly planning"]);

        ws.set_search_query("grocery");
        let titles: Vec<&str> = ws.visible_notes().iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["Grocery list"]);

        ws.select_category(Category::Ideas);
        assert!(ws.visible_notes().is_empty());

        ws.select_category(Category::General);
        ws.set_search_query("");
        assert_eq!(ws.visible_notes().len(), 2);
    }

    #[test]
    fn load_activates_first_note() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("local_storage.db");

        let saved = {
            let mut ws = NotesWorkspace::load(SqliteLocalStorage::open(&path).unwrap()).unwrap();
            ws.create_note_at(at(1_000)).unwrap();
            type_into(&mut ws, "older");
            ws.create_note_at(at(2_000)).unwrap();
            type_into(&mut ws, "<p>newest</p>");
            ws.notes().to_vec()
        };

        let reloaded = NotesWorkspace::load(SqliteLocalStorage::open(&path).unwrap()).unwrap();
        assert_eq!(reloaded.notes(), saved.as_slice());
        assert_eq!(reloaded.active_note_id(), Some(&NoteId::from_timestamp(2_000)));
        assert_eq!(reloaded.editor_content(), "<p>newest</p>");
        assert_eq!(reloaded.selected_category(), Category::General);
        assert_eq!(reloaded.search_query(), "");
    }

    #[test]
    fn malformed_notes_fail_to_load() {
        let storage = MemoryStorage::new();
        storage.set_item(NOTES_KEY, "{\"oops\":").unwrap();

        let result = NotesWorkspace::load(storage);
        assert!(matches!(result, Err(Error::Serialization(_))));
    }
}
