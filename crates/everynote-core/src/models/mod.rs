//! Data models for EveryNote

mod category;
mod note;
mod user;

pub use category::Category;
pub use note::{derive_title, Note, NoteId, PREVIEW_MAX_CHARS, TITLE_MAX_CHARS, UNTITLED_NOTE};
pub use user::{avatar_initial, User};
