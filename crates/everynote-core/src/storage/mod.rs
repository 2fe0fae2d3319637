//! Local storage layer for EveryNote
//!
//! A synchronous string key/value store, the desktop stand-in for a
//! browser's `localStorage`, plus typed JSON accessors for the two keys the
//! app persists.

mod connection;
mod local_storage;
mod migrations;
mod records;

pub use connection::Database;
pub use local_storage::{LocalStorage, MemoryStorage, SqliteLocalStorage};
pub use records::{NotePersistence, UserPersistence, NOTES_KEY, USER_KEY};
