use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::burn::Status;
use crate::keymap::{matches_chord, KeyChord};

use super::paste::paste_from_clipboard;
use super::{scroll_memo, trigger_burn};
use crate::app::state::{App, MemoScroll};

fn chord_hit(event: KeyEvent, chord: Option<&KeyChord>) -> bool {
    chord.is_some_and(|chord| matches_chord(event, chord))
}

pub(super) fn handle_key(app: &mut App, key: KeyEvent, now: Instant) {
    if key.kind == KeyEventKind::Release {
        return;
    }

    // ctrl+c always quits, whatever the keymap says.
    let ctrl_c = key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL;
    if ctrl_c || chord_hit(key, app.keymap.quit.as_ref()) {
        app.should_quit = true;
        return;
    }
    if chord_hit(key, app.keymap.burn.as_ref()) {
        trigger_burn(app, now);
        return;
    }
    if chord_hit(key, app.keymap.paste_image.as_ref()) {
        paste_from_clipboard(app, now);
        return;
    }
    if chord_hit(key, app.keymap.drop_image.as_ref()) {
        if app.pad.drop_last_image(now) {
            app.memo_scroll = MemoScroll::FollowCursor;
        }
        return;
    }
    match key.code {
        KeyCode::Esc => {
            app.output = None;
            return;
        }
        KeyCode::PageUp => {
            scroll_memo(app, -page_rows(app));
            return;
        }
        KeyCode::PageDown => {
            scroll_memo(app, page_rows(app));
            return;
        }
        _ => {}
    }

    edit_memo(app, key, now);
}

/// One screen of memo rows, keeping a line of overlap.
fn page_rows(app: &App) -> isize {
    app.memo_view.height.saturating_sub(1).max(1) as isize
}

fn edit_memo(app: &mut App, key: KeyEvent, now: Instant) {
    let typed = !key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER);
    let mut handled = true;
    app.pad.edit(now, |memo| match key.code {
        KeyCode::Char(ch) if typed => memo.insert_char(ch),
        KeyCode::Enter => memo.insert_char('\n'),
        KeyCode::Tab => memo.insert_char('\t'),
        KeyCode::Backspace => memo.backspace(),
        KeyCode::Delete => memo.delete(),
        KeyCode::Left => {
            memo.move_left();
            false
        }
        KeyCode::Right => {
            memo.move_right();
            false
        }
        KeyCode::Home => {
            memo.move_home();
            false
        }
        KeyCode::End => {
            memo.move_end();
            false
        }
        _ => {
            handled = false;
            false
        }
    });
    if handled && app.pad.status() == Status::Idle {
        app.memo_scroll = MemoScroll::FollowCursor;
    }
}
