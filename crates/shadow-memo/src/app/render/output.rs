use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthChar;

use crate::memo::MemoBuffer;

use super::super::state::App;

const TAB_WIDTH: usize = 4;

/// Footer content: the pending message, or the key hints.
pub(super) fn footer_line(app: &App) -> Line<'static> {
    if let Some(message) = app.output.as_ref() {
        return Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        ));
    }
    let keymap = &app.config.keymap;
    let mut hints = vec![format!("{} burn", keymap.burn)];
    if app.pad.memo().variant().accepts_images() {
        hints.push(format!("{} image", keymap.paste_image));
        hints.push(format!("{} drop", keymap.drop_image));
    }
    hints.push(format!("{} quit", keymap.quit));
    Line::from(Span::styled(
        hints.join(" · "),
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM),
    ))
}

/// Wrapped memo text with an inline block cursor.
///
/// Returns the lines and the row the cursor landed on.
pub(super) fn memo_text_lines(
    memo: &MemoBuffer,
    width: usize,
    text_style: Style,
) -> (Vec<Line<'static>>, usize) {
    let mut wrap = Wrapper::new(width.max(1), text_style);
    let cursor = memo.cursor();
    for (idx, ch) in memo.text().chars().enumerate() {
        if idx == cursor {
            wrap.place_cursor(if ch == '\n' { ' ' } else { ch });
            if ch == '\n' {
                wrap.break_line();
            }
            continue;
        }
        if ch == '\n' {
            wrap.break_line();
        } else {
            wrap.push(ch);
        }
    }
    if cursor >= memo.char_count() {
        wrap.place_cursor(' ');
    }
    wrap.finish()
}

fn cursor_style() -> Style {
    Style::default().bg(Color::White).fg(Color::Black)
}

/// Greedy cell-width wrapper; no word breaking, CJK-aware widths.
struct Wrapper {
    width: usize,
    style: Style,
    lines: Vec<Line<'static>>,
    spans: Vec<Span<'static>>,
    pending: String,
    column: usize,
    cursor_row: usize,
}

impl Wrapper {
    fn new(width: usize, style: Style) -> Self {
        Self {
            width,
            style,
            lines: Vec::new(),
            spans: Vec::new(),
            pending: String::new(),
            column: 0,
            cursor_row: 0,
        }
    }

    fn make_room(&mut self, cells: usize) {
        if self.column > 0 && self.column + cells > self.width {
            self.break_line();
        }
    }

    fn push(&mut self, ch: char) {
        if ch == '\t' {
            for _ in 0..TAB_WIDTH {
                self.push(' ');
            }
            return;
        }
        let cells = display_width(ch);
        self.make_room(cells);
        self.pending.push(ch);
        self.column += cells;
    }

    fn place_cursor(&mut self, ch: char) {
        let cells = display_width(ch).max(1);
        self.make_room(cells);
        self.flush_pending();
        self.spans.push(Span::styled(ch.to_string(), cursor_style()));
        self.column += cells;
        self.cursor_row = self.lines.len();
    }

    fn flush_pending(&mut self) {
        if !self.pending.is_empty() {
            let text = std::mem::take(&mut self.pending);
            self.spans.push(Span::styled(text, self.style));
        }
    }

    fn break_line(&mut self) {
        self.flush_pending();
        let spans = std::mem::take(&mut self.spans);
        self.lines.push(Line::from(spans));
        self.column = 0;
    }

    fn finish(mut self) -> (Vec<Line<'static>>, usize) {
        self.break_line();
        (self.lines, self.cursor_row)
    }
}

fn display_width(ch: char) -> usize {
    ch.width().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use ratatui::style::Style;
    use ratatui::text::Line;

    use super::memo_text_lines;
    use crate::memo::{MemoBuffer, Variant};

    fn plain(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    fn memo(text: &str) -> MemoBuffer {
        let mut memo = MemoBuffer::new(Variant::Unbounded);
        memo.insert_str(text);
        memo
    }

    #[test]
    fn wraps_at_cell_width() {
        let (lines, cursor_row) = memo_text_lines(&memo("abcdef"), 4, Style::default());
        let rendered: Vec<String> = lines.iter().map(plain).collect();
        assert_eq!(rendered, vec!["abcd", "ef "]);
        assert_eq!(cursor_row, 1);
    }

    #[test]
    fn wide_chars_take_two_cells() {
        let (lines, _) = memo_text_lines(&memo("忍者忍"), 4, Style::default());
        let rendered: Vec<String> = lines.iter().map(plain).collect();
        assert_eq!(rendered, vec!["忍者", "忍 "]);
    }

    #[test]
    fn newline_under_cursor_keeps_row_count() {
        let mut buffer = memo("ab\ncd");
        buffer.move_left();
        buffer.move_left();
        buffer.move_left();
        let (lines, cursor_row) = memo_text_lines(&buffer, 10, Style::default());
        let rendered: Vec<String> = lines.iter().map(plain).collect();
        assert_eq!(rendered, vec!["ab ", "cd"]);
        assert_eq!(cursor_row, 0);
    }

    #[test]
    fn empty_memo_shows_lone_cursor() {
        let (lines, cursor_row) = memo_text_lines(&memo(""), 10, Style::default());
        assert_eq!(lines.len(), 1);
        assert_eq!(plain(&lines[0]), " ");
        assert_eq!(cursor_row, 0);
    }
}
