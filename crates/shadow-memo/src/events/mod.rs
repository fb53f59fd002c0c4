//! Application event types.
//!
//! Defines the event enum used for communication between the terminal
//! input thread and the main event loop.
//!
//! Events are sent via an mpsc channel and processed sequentially
//! in the main loop to update app state and trigger re-renders.
//! Timers are not events: the loop wakes on its own deadlines.

use crossterm::event::{KeyEvent, MouseEvent};

#[derive(Debug)]
pub enum AppEvent {
    Input(KeyEvent),
    Mouse(MouseEvent),
    /// Bracketed paste from the terminal (text only).
    Paste(String),
    Resize,
}
