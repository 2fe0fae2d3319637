//! Main application component

use dioxus::prelude::*;

use everynote_core::{Screen, Session};

use crate::state::{AppState, Storage};
use crate::theme::PALETTE;
use crate::views::{Home, Login};

/// Root application component.
///
/// Restores the signed-in user once and picks the screen from it.
#[component]
pub fn App() -> Element {
    let storage = use_context::<Storage>();
    let session = use_signal(move || Session::restore(storage));

    use_context_provider(|| AppState { session });

    let screen = session.read().screen();
    let colors = &PALETTE;

    rsx! {
        div {
            class: "app-container",
            style: "
                min-height: 100vh;
                font-family: system-ui, -apple-system, sans-serif;
                background: {colors.bg_gradient};
                color: {colors.text_primary};
            ",

            match screen {
                Screen::Login => rsx! { Login {} },
                Screen::Home => rsx! { Home {} },
            }
        }
    }
}
