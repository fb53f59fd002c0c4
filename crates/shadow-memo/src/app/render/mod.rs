//! UI rendering methods.
//!
//! Handles all drawing for the TUI:
//! - Main column (header, memo card, burn button, footer)
//! - Phase overlays (blast while burning, glyph finale once finished)
//!
//! Rendering never mutates the pad; it only records hit areas on the App.

mod layout;
mod memo;
mod output;
mod overlays;

use std::time::Instant;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::widgets::Block;

use crate::burn::{Status, FINISH_AFTER};

use super::state::{App, MAX_COLUMN_WIDTH};

pub(super) const NINJA_RED: Color = Color::Rgb(255, 0, 51);
pub(super) const NINJA_BLACK: Color = Color::Rgb(10, 10, 10);
pub(super) const NINJA_GRAY: Color = Color::Rgb(26, 26, 26);
pub(super) const NINJA_CHARCOAL: Color = Color::Rgb(51, 51, 51);
pub(super) const EMBER: Color = Color::Rgb(249, 115, 22);
const SCORCHED: Color = Color::Rgb(67, 20, 7);

/// Main render entry point. Called each frame by the event loop.
pub fn render(app: &mut App, frame: &mut ratatui::Frame, now: Instant) {
    let area = frame.area();
    let status = app.pad.status();
    let elapsed = app.pad.burn_elapsed(now).unwrap_or_default();

    let background = if status == Status::Burning {
        SCORCHED
    } else {
        NINJA_BLACK
    };
    frame.render_widget(Block::default().style(Style::default().bg(background)), area);

    let mut column = layout::centered_column(area, MAX_COLUMN_WIDTH);
    if status == Status::Burning {
        column = layout::shift_horizontal(column, layout::shake_offset(elapsed), area);
    }

    // Vertical layout: header | memo card | burn button | footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(column);

    layout::render_header(app, frame, chunks[0]);
    memo::render_memo(app, frame, chunks[1], now);
    layout::render_button(app, frame, chunks[2]);
    layout::render_footer(app, frame, chunks[3]);

    match status {
        Status::Idle => {}
        Status::Burning => overlays::render_blast(frame, area, elapsed),
        Status::Finished => {
            let since_finish = elapsed.saturating_sub(FINISH_AFTER);
            overlays::render_finale(frame, layout::centered_rect(80, 60, area), since_finish);
        }
    }
}
