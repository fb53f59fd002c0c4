use std::time::Instant;

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::burn::Status;
use crate::memo::{MemoBuffer, Variant};

use super::super::state::{App, MemoScroll, MemoView};
use super::output::memo_text_lines;
use super::overlays::{Flames, Sparks};
use super::{EMBER, NINJA_CHARCOAL, NINJA_GRAY};

const PLACEHOLDER: [&str; 2] = ["その不条理、クソリプ", "コピペも全て焼き尽くしてくれるわ！"];
const IMAGE_TAG: &str = "燃やす";
const PREVIEW_MAX_COLS: u16 = 40;
const PREVIEW_ROWS: u16 = 8;

/// Render the memo card: text, image previews and counter while idle,
/// the fire while burning, nothing once finished.
pub(super) fn render_memo(app: &mut App, frame: &mut ratatui::Frame, area: Rect, now: Instant) {
    let status = app.pad.status();
    let border = if status == Status::Burning {
        Style::default().fg(EMBER).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(NINJA_CHARCOAL)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
        .style(Style::default().bg(NINJA_GRAY));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match status {
        Status::Idle => {}
        Status::Burning => {
            let elapsed = app.pad.burn_elapsed(now).unwrap_or_default();
            frame.render_widget(Flames { elapsed }, inner);
            frame.render_widget(Sparks { elapsed }, inner);
            return;
        }
        Status::Finished => return,
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);
    let content = chunks[0];
    let memo = app.pad.memo();

    let text_style = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    let (mut lines, cursor_row) = if memo.is_empty() {
        (placeholder_lines(), 0)
    } else {
        memo_text_lines(memo, content.width as usize, text_style)
    };
    lines.extend(image_lines(memo, content.width));

    let height = content.height as usize;
    let max_offset = lines.len().saturating_sub(height);
    let offset = match app.memo_scroll {
        MemoScroll::FollowCursor => (cursor_row + 1).saturating_sub(height),
        MemoScroll::Bottom => max_offset,
        MemoScroll::Offset(offset) => offset,
    }
    .min(max_offset);
    let counter = counter_label(memo);
    frame.render_widget(Paragraph::new(lines).scroll((offset as u16, 0)), content);

    app.memo_view = MemoView {
        offset,
        max_offset,
        height,
    };

    let counter = Paragraph::new(Line::from(Span::styled(
        counter,
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Right);
    frame.render_widget(counter, chunks[1]);
}

fn placeholder_lines() -> Vec<Line<'static>> {
    let hint = Style::default().fg(Color::DarkGray);
    vec![
        Line::from(vec![
            Span::styled(" ", Style::default().bg(Color::White)),
            Span::styled(PLACEHOLDER[0], hint),
        ]),
        Line::from(Span::styled(format!(" {}", PLACEHOLDER[1]), hint)),
    ]
}

fn image_lines(memo: &MemoBuffer, width: u16) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let cols = width.min(PREVIEW_MAX_COLS);
    for (idx, image) in memo.images().iter().enumerate() {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            format!(
                "[{} #{} {}x{}]",
                IMAGE_TAG,
                idx + 1,
                image.width(),
                image.height()
            ),
            Style::default().fg(Color::Gray),
        )));
        for row in image.preview(cols, PREVIEW_ROWS) {
            lines.push(Line::from(Span::styled(
                row,
                Style::default().fg(Color::Gray),
            )));
        }
    }
    lines
}

pub(super) fn counter_label(memo: &MemoBuffer) -> String {
    match memo.variant() {
        Variant::Capped(limit) => format!("{}/{}", memo.char_count(), limit),
        Variant::Unbounded => {
            let images = memo.images().len();
            if images > 0 {
                format!("{} chars + {} img", memo.char_count(), images)
            } else {
                format!("{} chars", memo.char_count())
            }
        }
    }
}
