//! Note list component

use dioxus::prelude::*;

use everynote_core::Note;

use super::NoteCard;
use crate::state::HomeState;
use crate::theme::PALETTE;

/// Visible notes for the selected category, newest first
#[component]
pub fn NoteList() -> Element {
    let mut home = use_context::<HomeState>();
    let colors = &PALETTE;

    let (visible, active_id, category) = {
        let workspace = home.workspace.read();
        let visible: Vec<Note> = workspace.visible_notes().into_iter().cloned().collect();
        (
            visible,
            workspace.active_note_id().cloned(),
            workspace.selected_category(),
        )
    };

    rsx! {
        div {
            class: "note-list",
            style: "width: 25%; min-width: 240px; display: flex; flex-direction: column; gap: 16px;",

            div {
                style: "display: flex; align-items: center; justify-content: space-between;",
                h3 { style: "font-weight: 600;", "Notes" }
                button {
                    r#type: "button",
                    style: "
                        padding: 4px 12px;
                        border: none;
                        border-radius: 6px;
                        font-size: 14px;
                        background: {colors.accent};
                        color: {colors.accent_text};
                        cursor: pointer;
                    ",
                    onclick: move |_| {
                        home.update("create note", |workspace| workspace.create_note().map(drop));
                    },
                    "+ New Note"
                }
            }

            div {
                style: "flex: 1; overflow-y: auto; display: flex; flex-direction: column; gap: 8px;",

                if visible.is_empty() {
                    div {
                        style: "text-align: center; padding: 32px 0; color: {colors.text_muted};",
                        p { "No notes in {category}" }
                        p { style: "font-size: 14px; margin-top: 4px;", "Create your first note" }
                    }
                } else {
                    for note in visible {
                        {
                            let note_id = note.id.clone();
                            let is_selected = active_id.as_ref() == Some(&note.id);

                            rsx! {
                                NoteCard {
                                    key: "{note.id}",
                                    title: note.title.clone(),
                                    preview: note.preview(),
                                    date: note.date.clone(),
                                    is_selected,
                                    onclick: move |_| {
                                        let id = note_id.clone();
                                        home.update("select note", move |workspace| {
                                            workspace.select_note(&id)
                                        });
                                    },
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
