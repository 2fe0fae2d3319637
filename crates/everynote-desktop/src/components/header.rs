//! Header with search, user badge, and logout

use dioxus::prelude::*;

use everynote_core::models::avatar_initial;
use everynote_core::session::LOGOUT_CONFIRMATION;

use super::SearchBar;
use crate::services::confirm;
use crate::state::AppState;
use crate::theme::PALETTE;

#[component]
pub fn Header() -> Element {
    let mut state = use_context::<AppState>();
    let colors = &PALETTE;
    let mut avatar_failed = use_signal(|| false);

    let user = state.session.read().user().cloned();

    let initial = avatar_initial(user.as_ref());
    let name = user.as_ref().map(|user| user.name.clone()).unwrap_or_default();
    let avatar = visible_avatar(user.and_then(|user| user.avatar), avatar_failed());

    let on_logout = move |_| {
        spawn(async move {
            let confirmed = confirm(LOGOUT_CONFIRMATION).await;
            let result = state.session.write().answer_logout(confirmed);
            match result {
                Ok(true) => tracing::debug!("Returned to login screen"),
                Ok(false) => {}
                Err(e) => tracing::error!("Failed to clear stored user: {}", e),
            }
        });
    };

    rsx! {
        header {
            class: "header",
            style: "border-bottom: 1px solid {colors.border}; padding: 16px;",

            div {
                style: "
                    max-width: 80rem;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                ",

                h1 { style: "font-size: 24px; font-weight: 700;", "EveryNote" }

                div {
                    style: "display: flex; align-items: center; gap: 16px;",

                    SearchBar {}

                    div {
                        class: "user-badge",
                        style: "display: flex; align-items: center; gap: 12px;",

                        if let Some(src) = avatar {
                            img {
                                src: "{src}",
                                alt: "{initial}",
                                style: "width: 32px; height: 32px; border-radius: 50%;",
                                onerror: move |_| {
                                    tracing::warn!("Avatar image failed to load");
                                    avatar_failed.set(true);
                                },
                            }
                        } else {
                            div {
                                style: "
                                    width: 32px;
                                    height: 32px;
                                    border-radius: 50%;
                                    background: {colors.badge};
                                    display: flex;
                                    align-items: center;
                                    justify-content: center;
                                    font-size: 14px;
                                ",
                                "{initial}"
                            }
                        }

                        span {
                            style: "font-size: 14px; color: {colors.text_secondary};",
                            "{name}"
                        }

                        button {
                            r#type: "button",
                            style: "
                                padding: 4px 12px;
                                border-radius: 6px;
                                border: 1px solid {colors.border};
                                background: transparent;
                                color: {colors.text_secondary};
                                cursor: pointer;
                            ",
                            onclick: on_logout,
                            "Logout"
                        }
                    }
                }
            }
        }
    }
}

/// Avatar URL to render, or `None` to fall back to the initial
fn visible_avatar(avatar: Option<String>, failed: bool) -> Option<String> {
    avatar.filter(|_| !failed)
}
