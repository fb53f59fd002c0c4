//! Application runner and event loop.
//!
//! Handles terminal setup/teardown and the main event loop.
//! Events are read from an mpsc channel and dispatched to handlers; between
//! events the loop sleeps until the pad's next deadline or animation frame.

use std::io;
use std::path::PathBuf;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;

use crate::burn::Status;
use crate::clipboard::{ClipboardSource, SystemClipboard};
use crate::config::{load_config, Config};
use crate::events::AppEvent;
use crate::keymap::Keymap;
use crate::pad::Pad;
use crate::sound::{cue_from_config, playback_note, BurnCue};

use super::state::{App, MemoScroll, MemoView, FRAME_INTERVAL_MS};

/// Longest the loop sleeps when nothing is scheduled.
const IDLE_WAIT: Duration = Duration::from_secs(60);

/// Entry point: set up terminal and run the event loop.
pub fn run() -> io::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = load_config(&cwd);
    info!(variant = ?config.memo.variant, idle_timeout = ?config.memo.idle_timeout, "starting");

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    stdout.execute(EnableBracketedPaste)?;
    let enhanced_keys = supports_keyboard_enhancement().unwrap_or(false);
    if enhanced_keys {
        stdout.execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES,
        ))?;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, App::new(config));

    disable_raw_mode()?;
    if enhanced_keys {
        terminal
            .backend_mut()
            .execute(PopKeyboardEnhancementFlags)?;
    }
    terminal.backend_mut().execute(DisableBracketedPaste)?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Main event loop: process events and deadlines until quit.
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
) -> io::Result<()> {
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    spawn_input_thread(event_tx);

    terminal.clear()?;
    terminal.draw(|frame| super::render::render(&mut app, frame, Instant::now()))?;

    while !app.should_quit {
        let wait = next_wake(&app, Instant::now());
        match event_rx.recv_timeout(wait) {
            Ok(event) => {
                super::input::handle_event(&mut app, event, Instant::now());
                // Drain any pending events before redraw
                while let Ok(event) = event_rx.try_recv() {
                    super::input::handle_event(&mut app, event, Instant::now());
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }

        let now = Instant::now();
        super::input::tick(&mut app, now);
        terminal.draw(|frame| super::render::render(&mut app, frame, now))?;
    }
    info!("quit");
    Ok(())
}

/// How long the loop may block waiting for input.
fn next_wake(app: &App, now: Instant) -> Duration {
    let until_deadline = app
        .pad
        .next_deadline()
        .map(|deadline| deadline.saturating_duration_since(now))
        .unwrap_or(IDLE_WAIT);
    if app.pad.status() == Status::Idle {
        until_deadline
    } else {
        until_deadline.min(Duration::from_millis(FRAME_INTERVAL_MS))
    }
}

/// Spawn a thread to read terminal input events.
fn spawn_input_thread(sender: Sender<AppEvent>) {
    std::thread::spawn(move || loop {
        let forwarded = match event::read() {
            Ok(Event::Key(key)) => sender.send(AppEvent::Input(key)),
            Ok(Event::Mouse(mouse)) => sender.send(AppEvent::Mouse(mouse)),
            Ok(Event::Paste(text)) => sender.send(AppEvent::Paste(text)),
            Ok(Event::Resize(_, _)) => sender.send(AppEvent::Resize),
            Ok(_) => Ok(()),
            Err(_) => break,
        };
        if forwarded.is_err() {
            break;
        }
    });
}

impl App {
    /// Create an App wired to the system clipboard and configured sound.
    pub fn new(config: Config) -> Self {
        let cue = cue_from_config(&config.sound);
        let note = playback_note(&config.sound);
        let mut app = Self::with_io(config, Box::new(SystemClipboard), cue);
        if let Some(note) = note {
            app.set_output(note.to_string());
        }
        app
    }

    pub fn with_io(
        config: Config,
        clipboard: Box<dyn ClipboardSource>,
        cue: Box<dyn BurnCue>,
    ) -> Self {
        Self {
            pad: Pad::new(config.memo.variant, config.memo.idle_timeout),
            keymap: Keymap::from_config(&config.keymap),
            config,
            clipboard,
            cue,
            output: None,
            burn_button_area: None,
            memo_scroll: MemoScroll::FollowCursor,
            memo_view: MemoView::default(),
            should_quit: false,
        }
    }

    /// Set the message shown in the footer.
    pub fn set_output(&mut self, message: String) {
        let trimmed = message.trim().to_string();
        if trimmed.is_empty() {
            self.output = None;
        } else {
            self.output = Some(trimmed);
        }
    }
}
