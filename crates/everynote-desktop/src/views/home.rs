//! Home view - main application screen

use dioxus::prelude::*;

use everynote_core::NotesWorkspace;

use crate::components::{CategoryBar, Header, NoteEditor, NoteList};
use crate::state::{AppState, HomeState};

/// Home view component - header, category bar, note list, and editor.
///
/// Loads the stored notes when mounted.
#[component]
pub fn Home() -> Element {
    let state = use_context::<AppState>();
    let workspace = use_signal(move || {
        let storage = state.session.read().storage().clone();
        match NotesWorkspace::load(storage.clone()) {
            Ok(workspace) => workspace,
            Err(e) => {
                tracing::error!("Failed to load stored notes: {}", e);
                NotesWorkspace::empty(storage)
            }
        }
    });

    use_context_provider(|| HomeState { workspace });

    rsx! {
        div {
            class: "home-container",
            style: "min-height: 100vh; display: flex; flex-direction: column;",

            Header {}
            CategoryBar {}

            div {
                class: "content-area",
                style: "
                    flex: 1;
                    display: flex;
                    gap: 24px;
                    padding: 24px;
                    max-width: 80rem;
                    width: 100%;
                    margin: 0 auto;
                    box-sizing: border-box;
                    height: calc(100vh - 200px);
                ",

                NoteList {}
                NoteEditor {}
            }
        }
    }
}
