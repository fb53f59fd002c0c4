use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use super::{scroll_memo, trigger_burn};
use crate::app::state::{App, WHEEL_STEP};

pub(super) fn handle_mouse_event(app: &mut App, mouse: MouseEvent, now: Instant) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if hit(app.burn_button_area, mouse.column, mouse.row) {
                trigger_burn(app, now);
            }
        }
        MouseEventKind::ScrollUp => scroll_memo(app, -WHEEL_STEP),
        MouseEventKind::ScrollDown => scroll_memo(app, WHEEL_STEP),
        _ => {}
    }
}

fn hit(area: Option<Rect>, column: u16, row: u16) -> bool {
    area.is_some_and(|area| area.contains(Position::new(column, row)))
}
