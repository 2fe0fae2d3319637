//! Native message dialogs standing in for browser `confirm`/`alert`.
//!
//! Both are async so the webview keeps processing events while a dialog is
//! open; call them from a spawned task.

use rfd::{AsyncMessageDialog, MessageButtons, MessageDialogResult, MessageLevel};

const DIALOG_TITLE: &str = "EveryNote";

/// Ask an OK/Cancel question
pub async fn confirm(message: &str) -> bool {
    let result = AsyncMessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title(DIALOG_TITLE)
        .set_description(message)
        .set_buttons(MessageButtons::OkCancel)
        .show()
        .await;
    result == MessageDialogResult::Ok
}

/// Show an informational notice and wait for it to be dismissed
pub async fn alert(message: &str) {
    AsyncMessageDialog::new()
        .set_level(MessageLevel::Info)
        .set_title(DIALOG_TITLE)
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show()
        .await;
}
