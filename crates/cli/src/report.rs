//! Surfacing a failed run to the user.

use handler::DispatchError;

/// Title of the failure dialog.
pub const TITLE: &str = "hide-on-open failed to complete.";

/// Log the failure and block until the user has seen it.
pub fn failure(err: &DispatchError) {
    tracing::error!(category = err.category(), error = %err, "handler run failed");
    show(&err.report_text());
}

#[cfg(windows)]
fn show(text: &str) {
    use rfd::{MessageButtons, MessageDialog, MessageLevel};

    let _ = MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title(TITLE)
        .set_description(text)
        .set_buttons(MessageButtons::Ok)
        .show();
}

#[cfg(not(windows))]
fn show(text: &str) {
    eprintln!("{TITLE}\n\n{text}");
}
