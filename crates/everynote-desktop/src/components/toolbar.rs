//! Formatting toolbar for the rich-text editor

use dioxus::prelude::*;

use everynote_core::editor::{BlockFormat, FormatCommand};

use crate::theme::PALETTE;

/// Inline/list buttons plus a block format selector
#[component]
pub fn FormattingToolbar(on_command: EventHandler<FormatCommand>) -> Element {
    let colors = &PALETTE;

    rsx! {
        div {
            class: "toolbar",
            style: "
                display: flex;
                align-items: center;
                gap: 8px;
                padding: 8px 0;
                margin-bottom: 16px;
                border-bottom: 1px solid {colors.border};
            ",

            for command in FormatCommand::TOOLBAR {
                {
                    let label = button_label(command);
                    let text_style = button_text_style(command);

                    rsx! {
                        button {
                            key: "{command}",
                            r#type: "button",
                            title: command.title(),
                            style: "
                                min-width: 32px;
                                height: 32px;
                                border: none;
                                border-radius: 6px;
                                background: transparent;
                                color: {colors.text_secondary};
                                cursor: pointer;
                                {text_style}
                            ",
                            onclick: move |_| on_command.call(command),
                            "{label}"
                        }
                    }
                }
            }

            select {
                style: "
                    background: {colors.badge};
                    border: 1px solid {colors.border};
                    color: {colors.text_primary};
                    font-size: 14px;
                    border-radius: 4px;
                    padding: 4px 8px;
                ",
                onchange: move |evt| {
                    // The "Format" entry has an empty value and does nothing
                    if let Ok(format) = evt.value().parse::<BlockFormat>() {
                        on_command.call(FormatCommand::Block(format));
                    }
                },
                option { value: "", "Format" }
                for format in BlockFormat::ALL {
                    {
                        let tag = format.tag();
                        let label = format.label();
                        rsx! {
                            option { key: "{tag}", value: tag, "{label}" }
                        }
                    }
                }
            }
        }
    }
}

const fn button_label(command: FormatCommand) -> &'static str {
    match command {
        FormatCommand::Bold => "B",
        FormatCommand::Italic => "I",
        FormatCommand::Underline => "U",
        FormatCommand::BulletList => "\u{2022}",
        FormatCommand::NumberedList => "1.",
        FormatCommand::Block(format) => format.tag(),
    }
}

const fn button_text_style(command: FormatCommand) -> &'static str {
    match command {
        FormatCommand::Bold => "font-weight: 700;",
        FormatCommand::Italic => "font-style: italic;",
        FormatCommand::Underline => "text-decoration: underline;",
        _ => "",
    }
}
