use std::time::Instant;

use crate::events::AppEvent;

use super::keys::handle_key;
use super::mouse::handle_mouse_event;
use super::paste::paste_text;
use crate::app::state::App;

/// Main event dispatcher.
pub fn handle_event(app: &mut App, event: AppEvent, now: Instant) {
    match event {
        AppEvent::Input(key) => handle_key(app, key, now),
        AppEvent::Mouse(mouse) => handle_mouse_event(app, mouse, now),
        AppEvent::Paste(text) => paste_text(app, &text, now),
        // ratatui picks up the new size on the next draw.
        AppEvent::Resize => {}
    }
}
