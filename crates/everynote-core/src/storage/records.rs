//! Typed JSON records stored under fixed keys

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::LocalStorage;
use crate::error::Result;
use crate::models::{Note, User};

/// Key holding the JSON-encoded signed-in user
pub const USER_KEY: &str = "user";

/// Key holding the JSON-encoded note array
pub const NOTES_KEY: &str = "notes";

/// Persistence of the signed-in identity
pub trait UserPersistence {
    /// Load the stored user; `Ok(None)` when the key is absent
    fn load_user(&self) -> Result<Option<User>>;
    fn save_user(&self, user: &User) -> Result<()>;
    fn clear_user(&self) -> Result<()>;
}

/// Persistence of the note collection
pub trait NotePersistence {
    /// Load the stored collection; an absent key is an empty collection
    fn load_notes(&self) -> Result<Vec<Note>>;
    fn save_notes(&self, notes: &[Note]) -> Result<()>;
}

impl<S: LocalStorage> UserPersistence for S {
    fn load_user(&self) -> Result<Option<User>> {
        read_json(self, USER_KEY)
    }

    fn save_user(&self, user: &User) -> Result<()> {
        write_json(self, USER_KEY, user)
    }

    fn clear_user(&self) -> Result<()> {
        self.remove_item(USER_KEY)
    }
}

impl<S: LocalStorage> NotePersistence for S {
    fn load_notes(&self) -> Result<Vec<Note>> {
        Ok(read_json(self, NOTES_KEY)?.unwrap_or_default())
    }

    fn save_notes(&self, notes: &[Note]) -> Result<()> {
        write_json(self, NOTES_KEY, notes)
    }
}

fn read_json<T: DeserializeOwned>(storage: &impl LocalStorage, key: &str) -> Result<Option<T>> {
    storage
        .get_item(key)?
        .map(|raw| serde_json::from_str(&raw))
        .transpose()
        .map_err(Into::into)
}

fn write_json<T: Serialize + ?Sized>(
    storage: &impl LocalStorage,
    key: &str,
    value: &T,
) -> Result<()> {
    let serialized = serde_json::to_string(value)?;
    storage.set_item(key, &serialized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::models::Category;
    use crate::storage::{MemoryStorage, SqliteLocalStorage};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_user_round_trip_and_clear() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.load_user().unwrap(), None);

        let user = User::new("Ada", "ada@example.com").with_avatar("https://example.com/a.png");
        storage.save_user(&user).unwrap();
        assert_eq!(storage.load_user().unwrap(), Some(user));

        storage.clear_user().unwrap();
        assert_eq!(storage.load_user().unwrap(), None);
        assert_eq!(storage.get_item(USER_KEY).unwrap(), None);
    }

    #[test]
    fn test_malformed_user_is_serialization_error() {
        let storage = MemoryStorage::new();
        storage.set_item(USER_KEY, "{not json").unwrap();

        assert!(matches!(storage.load_user(), Err(Error::Serialization(_))));
    }

    #[test]
    fn test_absent_notes_load_empty() {
        let storage = MemoryStorage::new();
        assert!(storage.load_notes().unwrap().is_empty());
    }

    #[test]
    fn test_notes_round_trip_through_reopened_file() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("local_storage.db");

        let mut first = Note::new(Category::Ideas);
        first.set_content("<i>Solar</i> kettle");
        let mut second = Note::new(Category::ToDo);
        second.created_at -= 1;
        second.id = crate::models::NoteId::from_timestamp(second.created_at);
        let notes = vec![first, second];

        SqliteLocalStorage::open(&path)
            .unwrap()
            .save_notes(&notes)
            .unwrap();

        let reloaded = SqliteLocalStorage::open(&path).unwrap().load_notes().unwrap();
        assert_eq!(reloaded, notes);
    }

    #[test]
    fn test_notes_payload_is_json_array() {
        let storage = MemoryStorage::new();
        storage.save_notes(&[]).unwrap();
        assert_eq!(storage.get_item(NOTES_KEY).unwrap().as_deref(), Some("[]"));
    }
}
