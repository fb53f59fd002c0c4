//! Application state types and core data structures.
//!
//! Defines the App struct which holds all mutable application state:
//! the pad itself plus the UI-side pieces (keymap, status line, hit areas).

use ratatui::layout::Rect;

use crate::clipboard::ClipboardSource;
use crate::config::Config;
use crate::keymap::Keymap;
use crate::pad::Pad;
use crate::sound::BurnCue;

/// Main application state container.
///
/// Methods are split across input (event handling) and render (UI drawing).
pub struct App {
    pub pad: Pad,
    pub config: Config,
    pub keymap: Keymap,
    pub clipboard: Box<dyn ClipboardSource>,
    pub cue: Box<dyn BurnCue>,
    /// One-line message shown in the footer, replacing the key hints.
    pub output: Option<String>,
    /// Where the burn button was last drawn, for mouse hits.
    pub burn_button_area: Option<Rect>,
    pub memo_scroll: MemoScroll,
    /// Scroll geometry of the last drawn memo card.
    pub memo_view: MemoView,
    pub should_quit: bool,
}

/// How the memo card picks its scroll offset on the next draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoScroll {
    /// Keep the cursor row in view.
    FollowCursor,
    /// Show the end of the content, where the newest image lands.
    Bottom,
    /// Explicit offset chosen by the user, clamped when drawn.
    Offset(usize),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoView {
    pub offset: usize,
    pub max_offset: usize,
    pub height: usize,
}

/// Rows moved per mouse wheel notch.
pub const WHEEL_STEP: isize = 3;

/// Widest the memo column grows, in cells.
pub const MAX_COLUMN_WIDTH: u16 = 60;
/// Redraw cadence while a burn animation is running.
pub const FRAME_INTERVAL_MS: u64 = 50;
