//! The terminal front end of the memo pad.
//!
//! `App` wraps a `Pad` with everything the screen needs: keymap, clipboard,
//! burn cue, footer message and the button's hit area. One loop owns it and
//! feeds it input events and clock ticks in turn.
//!
//! - runner: terminal setup, input thread, deadline-driven loop
//! - state: the `App` struct and loop constants
//! - input: keys, mouse, bracketed paste and clipboard images
//! - render: memo card, burn button and phase overlays

mod input;
mod render;
mod runner;
mod state;

pub use runner::run;
