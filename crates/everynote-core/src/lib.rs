//! everynote-core - Core library for EveryNote
//!
//! This crate contains the models, local storage layer, and screen state
//! shared by the EveryNote desktop shell. Nothing in here knows about
//! rendering; the shell drives these types from UI events.

pub mod auth;
pub mod config;
pub mod editor;
pub mod error;
pub mod filter;
pub mod models;
pub mod session;
pub mod storage;
pub mod util;
pub mod workspace;

pub use error::{Error, Result};
pub use models::{Category, Note, NoteId, User};
pub use session::{Screen, Session};
pub use workspace::NotesWorkspace;
