//! Application state management
//!
//! Shared state accessible via Dioxus context providers.

use dioxus::prelude::*;

use everynote_core::storage::SqliteLocalStorage;
use everynote_core::{NotesWorkspace, Session};

/// Local storage backend used by the desktop shell
pub type Storage = SqliteLocalStorage;

/// Root state, provided by [`crate::app::App`]
#[derive(Clone, Copy)]
pub struct AppState {
    /// Signed-in user and the storage handle it persists to
    pub session: Signal<Session<Storage>>,
}

/// Home screen state, provided by [`crate::views::Home`]
#[derive(Clone, Copy)]
pub struct HomeState {
    /// Notes, selection, and list filters
    pub workspace: Signal<NotesWorkspace<Storage>>,
}

impl HomeState {
    /// Run a mutating workspace operation, logging persistence failures.
    ///
    /// The in-memory change stands even when the write fails.
    pub fn update(
        &mut self,
        action: &str,
        op: impl FnOnce(&mut NotesWorkspace<Storage>) -> everynote_core::Result<()>,
    ) {
        if let Err(e) = op(&mut self.workspace.write()) {
            tracing::error!("Failed to {}: {}", action, e);
        }
    }
}
