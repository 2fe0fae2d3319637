//! Search bar component

use dioxus::prelude::*;

use crate::state::HomeState;
use crate::theme::PALETTE;

/// Search box narrowing the note list
#[component]
pub fn SearchBar() -> Element {
    let mut home = use_context::<HomeState>();
    let colors = &PALETTE;
    let query = home.workspace.read().search_query().to_string();

    rsx! {
        input {
            class: "search-bar",
            r#type: "text",
            placeholder: "Search your notes",
            value: "{query}",
            oninput: move |evt| {
                home.workspace.write().set_search_query(evt.value());
            },
            style: "
                width: 16rem;
                padding: 8px 12px;
                border: 1px solid {colors.border};
                border-radius: 6px;
                font-size: 14px;
                background: {colors.bg_input};
                color: {colors.text_primary};
                outline: none;
            ",
        }
    }
}
