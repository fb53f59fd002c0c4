//! Input event handling.
//!
//! Handles keyboard, mouse and paste events, routing them to the pad
//! based on the configured keymap. Also owns `tick`, which applies the
//! pad's due deadlines between events.

mod event;
mod keys;
mod mouse;
mod paste;

use std::time::Instant;

use crate::burn::BurnTrigger;
use crate::pad::PadEvent;

use super::state::{App, MemoScroll};

pub use event::handle_event;

/// Start a manual burn; plays the cue only when the burn actually starts.
pub(super) fn trigger_burn(app: &mut App, now: Instant) -> bool {
    if !app.pad.burn(now, BurnTrigger::Manual) {
        return false;
    }
    app.output = None;
    app.cue.play();
    true
}

/// Move the memo view by `delta` rows.
///
/// Several scroll events can arrive between draws, so a pending explicit
/// offset is the base; otherwise the last drawn offset is.
pub(super) fn scroll_memo(app: &mut App, delta: isize) {
    let view = app.memo_view;
    let base = match app.memo_scroll {
        MemoScroll::Offset(offset) => offset.min(view.max_offset),
        MemoScroll::FollowCursor | MemoScroll::Bottom => view.offset,
    };
    let offset = base.saturating_add_signed(delta).min(view.max_offset);
    app.memo_scroll = MemoScroll::Offset(offset);
}

/// Apply everything the pad has due at `now`.
pub fn tick(app: &mut App, now: Instant) {
    for event in app.pad.advance(now) {
        match event {
            PadEvent::BurnStarted(_) => {
                app.output = None;
                app.cue.play();
            }
            PadEvent::Idle => app.memo_scroll = MemoScroll::FollowCursor,
            PadEvent::BufferCleared | PadEvent::Finished => {}
        }
    }
}
