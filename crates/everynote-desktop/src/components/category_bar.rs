//! Category selector

use dioxus::prelude::*;

use everynote_core::Category;

use crate::state::HomeState;
use crate::theme::PALETTE;

/// Row of category badges; exactly one is selected
#[component]
pub fn CategoryBar() -> Element {
    let home = use_context::<HomeState>();
    let colors = &PALETTE;
    let selected = home.workspace.read().selected_category();

    rsx! {
        nav {
            class: "category-bar",
            style: "border-bottom: 1px solid {colors.border}; padding: 16px;",

            div {
                style: "max-width: 80rem; margin: 0 auto; display: flex; gap: 8px; overflow-x: auto;",

                for category in Category::ALL {
                    CategoryBadge {
                        key: "{category}",
                        category,
                        is_active: category == selected,
                    }
                }
            }
        }
    }
}

#[component]
fn CategoryBadge(category: Category, is_active: bool) -> Element {
    let mut home = use_context::<HomeState>();
    let colors = &PALETTE;

    let (bg, fg) = if is_active {
        (colors.accent, colors.accent_text)
    } else {
        (colors.badge, colors.text_secondary)
    };

    rsx! {
        span {
            style: "
                padding: 2px 10px;
                border-radius: 9999px;
                font-size: 12px;
                font-weight: 600;
                white-space: nowrap;
                cursor: pointer;
                background: {bg};
                color: {fg};
            ",
            onclick: move |_| home.workspace.write().select_category(category),
            "{category}"
        }
    }
}
