//! Note editor panel

use chrono::Local;
use dioxus::prelude::*;

use everynote_core::editor::EDITOR_PLACEHOLDER;
use everynote_core::util::format_long_date;
use everynote_core::NoteId;

use super::RichTextEditor;
use crate::state::HomeState;
use crate::theme::PALETTE;

/// Editor for the active note, or a hint when nothing is selected
#[component]
pub fn NoteEditor() -> Element {
    let mut home = use_context::<HomeState>();
    let colors = &PALETTE;

    let (active_note_id, content) = {
        let workspace = home.workspace.read();
        (
            workspace.active_note().map(|note| note.id.clone()),
            workspace.editor_content().to_string(),
        )
    };
    let today = format_long_date(Local::now().date_naive());

    rsx! {
        div {
            class: "note-editor",
            style: "
                flex: 1;
                display: flex;
                flex-direction: column;
                padding: 24px;
                border: 1px solid {colors.border};
                border-radius: 8px;
                background: {colors.bg_panel};
            ",

            if let Some(note_id) = active_note_id {
                p {
                    style: "color: {colors.text_secondary}; font-size: 14px; margin-bottom: 16px;",
                    "{today}"
                }
                RichTextEditor {
                    note_id,
                    content,
                    placeholder: EDITOR_PLACEHOLDER,
                    on_change: move |(source, content): (NoteId, String)| {
                        home.update("save note", move |workspace| {
                            workspace.edit_note(Some(&source), content).map(drop)
                        });
                    },
                }
            } else {
                div {
                    class: "editor-placeholder",
                    style: "
                        flex: 1;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        color: {colors.text_muted};
                    ",
                    p { style: "font-size: 18px;", "Select a note to start editing" }
                    p { style: "font-size: 14px; margin-top: 4px;", "Or create a new note to get started" }
                }
            }
        }
    }
}
