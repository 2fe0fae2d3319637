//! Login view - mock sign-in screen

use dioxus::prelude::*;

use everynote_core::auth::{AuthError, LoginProvider};

use crate::services::alert;
use crate::state::AppState;
use crate::theme::PALETTE;

/// Login screen with one button per provider
#[component]
pub fn Login() -> Element {
    let colors = &PALETTE;

    rsx! {
        div {
            class: "login-container",
            style: "
                min-height: 100vh;
                display: flex;
                align-items: center;
                justify-content: center;
                padding: 16px;
            ",

            div {
                style: "width: 100%; max-width: 28rem; text-align: center;",

                h1 {
                    style: "font-size: 36px; font-weight: 700; margin-bottom: 16px;",
                    "EveryNote"
                }
                p {
                    style: "color: {colors.text_secondary}; font-size: 18px;",
                    "Capture your thoughts, your way."
                }
                p {
                    style: "color: {colors.text_muted}; font-size: 14px; margin: 8px 0 32px;",
                    "Text, voice, or media. Record your day and come back to it later."
                }

                div {
                    style: "display: flex; flex-direction: column; gap: 16px;",
                    LoginButton { provider: LoginProvider::Google, primary: true }
                    LoginButton { provider: LoginProvider::Apple, primary: false }
                }

                p {
                    style: "margin-top: 32px; font-size: 12px; color: {colors.text_muted};",
                    "By continuing, you agree to our Terms of Service and Privacy Policy."
                }
            }
        }
    }
}

#[component]
fn LoginButton(provider: LoginProvider, primary: bool) -> Element {
    let mut state = use_context::<AppState>();
    let colors = &PALETTE;

    let (bg, fg) = if primary {
        ("#ffffff", "#000000")
    } else {
        ("#000000", colors.text_primary)
    };

    let label = provider.button_label();

    let on_click = move |_| {
        let result = state.session.write().login_with(provider);
        match result {
            Ok(_) => {}
            Err(error @ AuthError::NotImplemented(_)) => {
                spawn(async move { alert(&error.to_string()).await });
            }
            Err(AuthError::Storage(e)) => {
                tracing::error!("Failed to persist signed-in user: {}", e);
            }
        }
    };

    rsx! {
        button {
            r#type: "button",
            style: "
                width: 100%;
                padding: 12px 16px;
                border-radius: 12px;
                border: 1px solid {colors.border};
                background: {bg};
                color: {fg};
                font-weight: 500;
                cursor: pointer;
            ",
            onclick: on_click,
            "{label}"
        }
    }
}
