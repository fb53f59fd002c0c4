//! Burn sequence timing.
//!
//! A burn is a fixed schedule of steps measured from the moment it starts:
//! - 1.5s: clear the memo buffer
//! - 2.0s: switch to the finale (`Finished`)
//! - 4.5s: return to `Idle`
//!
//! The sequence only knows *when* each step is due; applying a step to the
//! pad is the caller's job. Steps are handed out strictly in order, so a late
//! wake-up still walks through every phase.

use std::time::{Duration, Instant};

#[cfg(test)]
mod tests;

pub const CLEAR_AFTER: Duration = Duration::from_millis(1500);
pub const FINISH_AFTER: Duration = Duration::from_millis(2000);
pub const RESET_AFTER: Duration = Duration::from_millis(4500);

/// Delay between the start of the finale and each glyph reveal.
pub const GLYPH_STAGGER: Duration = Duration::from_millis(200);

const SCHEDULE: [(Duration, BurnStep); 3] = [
    (CLEAR_AFTER, BurnStep::ClearBuffer),
    (FINISH_AFTER, BurnStep::Finish),
    (RESET_AFTER, BurnStep::Reset),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Idle,
    Burning,
    Finished,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::Idle => "idle",
            Status::Burning => "burning",
            Status::Finished => "finished",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BurnStep {
    ClearBuffer,
    Finish,
    Reset,
}

/// What started a burn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BurnTrigger {
    Manual,
    IdleTimeout,
}

#[derive(Debug, Clone)]
pub struct BurnSequence {
    started: Instant,
    next: usize,
}

impl BurnSequence {
    pub fn start(now: Instant) -> Self {
        Self {
            started: now,
            next: 0,
        }
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started)
    }

    /// Deadline of the next step, `None` once the sequence has completed.
    pub fn next_deadline(&self) -> Option<Instant> {
        SCHEDULE
            .get(self.next)
            .map(|(offset, _)| self.started + *offset)
    }

    /// Pop the next step if it is due at `now`.
    pub fn poll(&mut self, now: Instant) -> Option<BurnStep> {
        let (offset, step) = SCHEDULE.get(self.next)?;
        if self.elapsed(now) < *offset {
            return None;
        }
        self.next += 1;
        Some(*step)
    }
}
