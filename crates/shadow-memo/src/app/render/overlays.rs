//! Phase overlays: the blast and fire while burning, the glyph finale after.
//!
//! Everything here is a pure function of the time since the burn started,
//! so a frame can be redrawn at any moment without extra state.

use std::time::Duration;

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Widget};

use crate::burn::GLYPH_STAGGER;

use super::{EMBER, NINJA_RED};

const FLAME_RISE_MS: f32 = 600.0;
const CURTAIN_MS: f32 = 500.0;
const BLAST_MS: f32 = 400.0;
const FLASH_MS: u128 = 200;
const POP_MS: u128 = 120;
const SPARK_COUNT: u32 = 60;

const ORANGE_600: Color = Color::Rgb(234, 88, 12);
const YELLOW_300: Color = Color::Rgb(253, 224, 71);
const ORANGE_400: Color = Color::Rgb(251, 146, 60);
const SPARK: Color = Color::Rgb(254, 215, 170);

const GLYPHS: [[(&str, Color); 2]; 2] = [
    [("成", Color::White), ("敗", Color::White)],
    [("完", NINJA_RED), ("了", NINJA_RED)],
];

fn ease_out(progress: f32) -> f32 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p) * (1.0 - p)
}

fn paint(buf: &mut Buffer, x: u16, y: u16, glyph: char, fg: Color, bg: Option<Color>) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_char(glyph).set_fg(fg);
        if let Some(bg) = bg {
            cell.set_bg(bg);
        }
    }
}

/// Fire rising through the memo card, then a black curtain dropping over it.
pub(super) struct Flames {
    pub elapsed: Duration,
}

impl Widget for Flames {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let ms = self.elapsed.as_millis() as f32;
        let rise = ease_out(ms / FLAME_RISE_MS);
        let flame_rows = (f32::from(area.height) * 1.2 * rise).round() as u16;
        let flicker = (self.elapsed.as_millis() / 50) as u16;

        for row in 0..area.height {
            let from_bottom = area.height - 1 - row;
            if from_bottom >= flame_rows {
                continue;
            }
            let heat = f32::from(from_bottom) / f32::from(area.height);
            let color = if heat < 0.33 {
                ORANGE_600
            } else if heat < 0.66 {
                EMBER
            } else {
                YELLOW_300
            };
            for col in 0..area.width {
                let glyph = if (col + row + flicker) % 3 == 0 { '^' } else { '▲' };
                paint(buf, area.x + col, area.y + row, glyph, color, None);
            }
        }

        let curtain = ((ms - FLAME_RISE_MS) / CURTAIN_MS).clamp(0.0, 1.0);
        let covered = (f32::from(area.height) * curtain).ceil() as u16;
        for row in 0..covered.min(area.height) {
            for col in 0..area.width {
                paint(
                    buf,
                    area.x + col,
                    area.y + row,
                    ' ',
                    Color::Black,
                    Some(Color::Black),
                );
            }
        }
    }
}

/// Sparks flung out of the bottom center of the card.
pub(super) struct Sparks {
    pub elapsed: Duration,
}

/// Cheap integer hash so spark paths are stable between frames.
fn spark_seed(index: u32) -> u32 {
    let mut x = index.wrapping_add(1).wrapping_mul(0x9E37_79B9);
    x ^= x >> 15;
    x = x.wrapping_mul(0x2C1B_3C6D);
    x ^= x >> 12;
    x
}

impl Widget for Sparks {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let ms = self.elapsed.as_millis() as f32;
        let width = f32::from(area.width);
        let height = f32::from(area.height);
        for index in 0..SPARK_COUNT {
            let seed = spark_seed(index);
            let life = 600.0 + (seed % 500) as f32;
            let progress = ms / life;
            if progress >= 1.0 {
                continue;
            }
            let target_x = ((seed >> 8) % 1000) as f32 / 1000.0 * width;
            let target_y = ((seed >> 18) % 1000) as f32 / 1000.0 * height - height / 2.0;
            let eased = ease_out(progress);
            let x = width / 2.0 + (target_x - width / 2.0) * eased;
            let y = height + (target_y - height) * eased;
            if x < 0.0 || y < 0.0 || x >= width || y >= height {
                continue;
            }
            let glyph = if progress < 0.3 {
                '·'
            } else if progress < 0.7 {
                '*'
            } else {
                '.'
            };
            paint(
                buf,
                area.x + x as u16,
                area.y + y as u16,
                glyph,
                SPARK,
                None,
            );
        }
    }
}

/// Full-screen ignition: an orange flash and an expanding white-hot ring.
struct Blast {
    elapsed: Duration,
}

impl Widget for Blast {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let millis = self.elapsed.as_millis();
        if millis < FLASH_MS {
            for y in area.top()..area.bottom() {
                for x in area.left()..area.right() {
                    if let Some(cell) = buf.cell_mut((x, y)) {
                        cell.set_bg(ORANGE_400);
                    }
                }
            }
        }

        let progress = millis as f32 / BLAST_MS;
        if progress >= 1.0 {
            return;
        }
        let cx = f32::from(area.x) + f32::from(area.width) / 2.0;
        let cy = f32::from(area.y) + f32::from(area.height) / 2.0;
        // Cells are about twice as tall as wide.
        let max_radius = (f32::from(area.width) / 4.0).hypot(f32::from(area.height) / 2.0);
        let radius = (ease_out(progress) * max_radius * 1.2).max(1.0);
        let glyph = if progress < 0.5 {
            '█'
        } else if progress < 0.8 {
            '▓'
        } else {
            '░'
        };
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let dx = (f32::from(x) - cx) / 2.0;
                let dy = f32::from(y) - cy;
                let rel = dx.hypot(dy) / radius;
                if rel > 1.0 {
                    continue;
                }
                let color = if rel < 0.33 {
                    Color::White
                } else if rel < 0.66 {
                    YELLOW_300
                } else {
                    ORANGE_600
                };
                paint(buf, x, y, glyph, color, None);
            }
        }
    }
}

pub(super) fn render_blast(frame: &mut ratatui::Frame, area: Rect, elapsed: Duration) {
    frame.render_widget(Blast { elapsed }, area);
}

/// Finale: 成敗 / 完了 popping in one after another on a dark screen.
pub(super) fn render_finale(frame: &mut ratatui::Frame, area: Rect, since_finish: Duration) {
    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default().style(Style::default().bg(Color::Black)),
        area,
    );

    let mut lines = Vec::new();
    for (row_idx, row) in GLYPHS.iter().enumerate() {
        let mut spans = Vec::new();
        for (col_idx, (glyph, color)) in row.iter().enumerate() {
            if col_idx > 0 {
                spans.push(Span::raw("    "));
            }
            let reveal_at = GLYPH_STAGGER * (row_idx * row.len() + col_idx) as u32;
            spans.push(glyph_span(glyph, *color, since_finish, reveal_at));
        }
        lines.push(Line::from(spans));
        lines.push(Line::raw(""));
    }
    lines.pop();

    let height = lines.len() as u16;
    let rect = Rect {
        y: area.y + area.height.saturating_sub(height) / 2,
        height: height.min(area.height),
        ..area
    };
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().bg(Color::Black)),
        rect,
    );
}

fn glyph_span(
    glyph: &'static str,
    color: Color,
    since_finish: Duration,
    reveal_at: Duration,
) -> Span<'static> {
    if since_finish < reveal_at {
        return Span::raw("  ");
    }
    let style = Style::default().fg(color).add_modifier(Modifier::BOLD);
    if (since_finish - reveal_at).as_millis() < POP_MS {
        Span::styled(glyph, style.add_modifier(Modifier::REVERSED))
    } else {
        Span::styled(glyph, style)
    }
}
