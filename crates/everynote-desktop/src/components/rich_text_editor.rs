//! Rich-text editor over a content-editable region.
//!
//! Formatting runs through the webview's `document.execCommand`; after every
//! input or command the region's markup is read back and reported to the
//! caller.

use dioxus::prelude::*;

use everynote_core::editor::FormatCommand;
use everynote_core::NoteId;

use super::FormattingToolbar;
use crate::theme::PALETTE;

const EDITOR_ELEMENT_ID: &str = "rich-text-editor";

/// Toolbar plus editable region showing `content` for note `note_id`.
///
/// `on_change` receives the region's markup tagged with the note that was
/// bound when the read started. The region is only rewritten when its
/// markup differs from `content`, and never while a read of newer input is
/// still pending.
#[component]
pub fn RichTextEditor(
    note_id: NoteId,
    content: String,
    on_change: EventHandler<(NoteId, String)>,
    #[props(into, default = "Start writing...".to_string())] placeholder: String,
) -> Element {
    let colors = &PALETTE;
    let mut focused = use_signal(|| false);
    let mut reads = use_signal(ReadTracker::default);
    let mut synced_note = use_signal(|| None::<NoteId>);

    use_effect(use_reactive((&note_id, &content), move |(note_id, content)| {
        let switched = synced_note.peek().as_ref() != Some(&note_id);
        if !switched && reads.peek().in_flight() {
            tracing::trace!("Skipping editor sync while input is pending");
            return;
        }
        synced_note.set(Some(note_id));

        let script = sync_content_script(&content);
        spawn(async move {
            if let Err(e) = document::eval(&script).await {
                tracing::warn!("Failed to sync editor content: {:?}", e);
            }
        });
    }));

    let report = use_callback(move |script: String| {
        let source = note_id.clone();
        let seq = reads.write().start();
        spawn(async move {
            match document::eval(&script).await {
                Ok(value) => {
                    if let Some(markup) = value.as_str() {
                        on_change.call((source, markup.to_string()));
                    }
                }
                Err(e) => tracing::warn!("Failed to read editor content: {:?}", e),
            }
            reads.write().finish(seq);
        });
    });

    let run_command = move |command: FormatCommand| {
        tracing::debug!("Running editor command {}", command);
        report.call(exec_command_script(command));
    };

    let on_keydown = move |evt: Event<KeyboardData>| {
        let modifiers = evt.modifiers();
        let Key::Character(key) = evt.key() else {
            return;
        };
        if let Some(command) =
            FormatCommand::from_shortcut(&key, modifiers.ctrl() || modifiers.meta())
        {
            evt.prevent_default();
            run_command(command);
        }
    };

    let show_placeholder = content.is_empty() && !focused();

    rsx! {
        div {
            class: "rich-text-editor",
            style: "flex: 1; display: flex; flex-direction: column;",

            FormattingToolbar { on_command: run_command }

            div {
                style: "flex: 1; position: relative;",

                div {
                    id: EDITOR_ELEMENT_ID,
                    contenteditable: "true",
                    style: "
                        width: 100%;
                        height: 100%;
                        min-height: 400px;
                        outline: none;
                        overflow-y: auto;
                        overflow-wrap: break-word;
                        font-size: 18px;
                        line-height: 1.75;
                        color: {colors.text_primary};
                    ",
                    oninput: move |_| report.call(read_content_script()),
                    onfocus: move |_| focused.set(true),
                    onblur: move |_| focused.set(false),
                    onkeydown: on_keydown,
                }

                if show_placeholder {
                    div {
                        style: "
                            position: absolute;
                            top: 0;
                            left: 0;
                            pointer-events: none;
                            font-size: 18px;
                            line-height: 1.75;
                            color: {colors.text_muted};
                        ",
                        "{placeholder}"
                    }
                }
            }
        }
    }
}

/// Sequence numbers for editor reads, so the sync effect can tell whether
/// the region holds input that has not been reported yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ReadTracker {
    started: u64,
    finished: u64,
}

impl ReadTracker {
    fn start(&mut self) -> u64 {
        self.started += 1;
        self.started
    }

    fn finish(&mut self, seq: u64) {
        self.finished = self.finished.max(seq);
    }

    const fn in_flight(self) -> bool {
        self.finished < self.started
    }
}

/// JS string literal for `value`
fn js_string(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}

fn read_content_script() -> String {
    format!(
        "const el = document.getElementById({id});\nreturn el ? el.innerHTML : null;",
        id = js_string(EDITOR_ELEMENT_ID),
    )
}

/// Replace the region's markup only when it differs, so the caret survives
/// echoes of the region's own input.
fn sync_content_script(content: &str) -> String {
    format!(
        "const el = document.getElementById({id});\n\
         const next = {content};\n\
         if (el && el.innerHTML !== next) {{ el.innerHTML = next; }}",
        id = js_string(EDITOR_ELEMENT_ID),
        content = js_string(content),
    )
}

fn exec_command_script(command: FormatCommand) -> String {
    let value = command
        .exec_value()
        .map_or_else(|| "undefined".to_string(), js_string);
    format!(
        "document.execCommand({name}, false, {value});\n\
         const el = document.getElementById({id});\n\
         if (!el) {{ return null; }}\n\
         el.focus();\n\
         return el.innerHTML;",
        name = js_string(command.exec_name()),
        id = js_string(EDITOR_ELEMENT_ID),
    )
}
