use std::time::Duration;

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::burn::Status;

use super::super::state::App;
use super::output::footer_line;
use super::{EMBER, NINJA_RED};

const AUTHOR: &str = "NinjaArmstrong🇯🇵";
const TITLE: &str = "SHADOW MEMO";
const BURN_LABEL: &str = "🔥 忍法・火遁の術 🔥";

/// Horizontal jitter pattern for the shaking memo, one entry per 40ms.
const SHAKE: [i16; 6] = [-2, 2, -1, 1, -2, 0];

/// Header: author on the left, app title on the right.
pub(super) fn render_header(app: &App, frame: &mut ratatui::Frame, area: Rect) {
    let border = if app.pad.status() == Status::Burning {
        Style::default().fg(EMBER)
    } else {
        Style::default().fg(NINJA_RED).add_modifier(Modifier::DIM)
    };
    let block = Block::default().borders(Borders::BOTTOM).border_style(border);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(TITLE.len() as u16)])
        .split(inner);
    let author = Paragraph::new(Line::from(Span::styled(
        AUTHOR,
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::BOLD),
    )));
    let title = Paragraph::new(Line::from(Span::styled(
        TITLE,
        Style::default().fg(NINJA_RED).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Right);
    frame.render_widget(author, chunks[0]);
    frame.render_widget(title, chunks[1]);
}

/// Render the burn button and remember where it is for mouse hits.
pub(super) fn render_button(app: &mut App, frame: &mut ratatui::Frame, area: Rect) {
    let style = if app.pad.can_burn() {
        Style::default().fg(NINJA_RED).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(style);
    let button = Paragraph::new(Line::from(Span::styled(BURN_LABEL, style)))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(button, area);
    app.burn_button_area = Some(area);
}

/// Render footer (status message or key hints).
pub(super) fn render_footer(app: &App, frame: &mut ratatui::Frame, area: Rect) {
    frame.render_widget(
        Paragraph::new(footer_line(app)).alignment(Alignment::Center),
        area,
    );
}

/// Center a column no wider than `max_width`.
pub(super) fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

/// Shift a rect sideways, staying inside `bounds`.
pub(super) fn shift_horizontal(area: Rect, offset: i16, bounds: Rect) -> Rect {
    let min_x = i32::from(bounds.x);
    let max_x = i32::from(bounds.right()) - i32::from(area.width);
    let x = (i32::from(area.x) + i32::from(offset)).clamp(min_x, max_x.max(min_x));
    Rect {
        x: x as u16,
        ..area
    }
}

pub(super) fn shake_offset(elapsed: Duration) -> i16 {
    SHAKE[(elapsed.as_millis() / 40) as usize % SHAKE.len()]
}

/// Create a centered rect with given percentage of parent.
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_width = percent_of(r.width, percent_x);
    let popup_height = percent_of(r.height, percent_y);
    let x = r.x + (r.width.saturating_sub(popup_width)) / 2;
    let y = r.y + (r.height.saturating_sub(popup_height)) / 2;
    Rect::new(x, y, popup_width, popup_height)
}

fn percent_of(length: u16, percent: u16) -> u16 {
    (u32::from(length) * u32::from(percent.min(100)) / 100) as u16
}
