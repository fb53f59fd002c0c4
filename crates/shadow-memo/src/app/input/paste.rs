use std::time::Instant;

use tracing::warn;

use crate::burn::Status;
use crate::clipboard::ClipboardPayload;
use crate::error::MemoError;

use crate::app::state::{App, MemoScroll};

/// Text arriving through the terminal's bracketed paste.
pub(super) fn paste_text(app: &mut App, text: &str, now: Instant) {
    if app.pad.edit(now, |memo| memo.insert_str(text)) {
        app.memo_scroll = MemoScroll::FollowCursor;
    }
}

/// The paste-image chord: images are intercepted, anything else pastes as
/// plain text.
pub(super) fn paste_from_clipboard(app: &mut App, now: Instant) {
    if app.pad.status() != Status::Idle {
        return;
    }
    let payload = match app.clipboard.read() {
        Ok(payload) => payload,
        Err(err) => {
            warn!(error = %err, "clipboard read failed");
            app.set_output(err.to_string());
            return;
        }
    };
    match payload {
        ClipboardPayload::Image(image) => match app.pad.paste_image(now, image) {
            Ok(pasted) => {
                app.output = None;
                if pasted {
                    app.memo_scroll = MemoScroll::Bottom;
                }
            }
            Err(MemoError::ImagesDisabled) => {
                app.set_output("Images can't be pasted into the capped memo.".to_string());
            }
            Err(err) => app.set_output(err.to_string()),
        },
        ClipboardPayload::Text(text) => paste_text(app, &text, now),
        ClipboardPayload::Empty => app.set_output("Clipboard is empty.".to_string()),
    }
}
