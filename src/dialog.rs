use rfd::{AsyncMessageDialog, MessageButtons, MessageLevel};

use crate::form::Notice;

/// Shows `notice` as a native message box and resolves once it is dismissed.
pub async fn show(notice: Notice) {
    let level = match &notice {
        Notice::Info { .. } => MessageLevel::Info,
        Notice::Error { .. } => MessageLevel::Error,
    };

    AsyncMessageDialog::new()
        .set_level(level)
        .set_title(notice.title())
        .set_description(notice.body())
        .set_buttons(MessageButtons::Ok)
        .show()
        .await;
}
