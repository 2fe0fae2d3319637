//! Note card component

use dioxus::prelude::*;

use crate::theme::PALETTE;

/// A single note row rendered in the note list.
#[component]
pub fn NoteCard(
    title: String,
    preview: String,
    date: String,
    is_selected: bool,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    let colors = &PALETTE;

    let (bg, border) = if is_selected {
        (colors.bg_card_active, colors.accent)
    } else {
        (colors.bg_card, colors.border)
    };

    rsx! {
        div {
            class: if is_selected { "note-item selected" } else { "note-item" },
            style: "
                padding: 12px;
                border: 1px solid {border};
                border-radius: 8px;
                background: {bg};
                cursor: pointer;
                transition: background 0.15s;
            ",
            onclick: move |evt| onclick.call(evt),

            div {
                class: "note-title",
                style: "
                    font-size: 14px;
                    font-weight: 500;
                    overflow: hidden;
                    text-overflow: ellipsis;
                    white-space: nowrap;
                ",
                "{title}"
            }
            div {
                class: "note-preview",
                style: "
                    font-size: 12px;
                    color: {colors.text_secondary};
                    margin-top: 4px;
                    overflow: hidden;
                    display: -webkit-box;
                    -webkit-line-clamp: 2;
                    -webkit-box-orient: vertical;
                ",
                "{preview}"
            }
            div {
                style: "font-size: 12px; color: {colors.text_muted}; margin-top: 4px;",
                "{date}"
            }
        }
    }
}
