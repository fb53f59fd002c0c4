//! The memo pad: buffer, status and timers in one place.
//!
//! All time-dependent behavior takes `now` from the caller. The event loop
//! asks `next_deadline` how long it may sleep and calls `advance` whenever it
//! wakes; `advance` fires the idle timer and applies due burn steps.
//!
//! Invariants:
//! - a burn only starts from `Idle` with a non-empty buffer
//! - the buffer is read-only unless the status is `Idle`
//! - at most one idle deadline exists, and only while idle and non-empty

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::burn::{BurnSequence, BurnStep, BurnTrigger, Status};
use crate::error::MemoError;
use crate::memo::{MemoBuffer, PastedImage, Variant};


pub const IDLE_TIMEOUT: Duration = Duration::from_secs(5 * 60);

/// Observable transitions produced by the pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadEvent {
    BurnStarted(BurnTrigger),
    BufferCleared,
    Finished,
    Idle,
}

#[derive(Debug)]
pub struct Pad {
    memo: MemoBuffer,
    status: Status,
    idle_timeout: Option<Duration>,
    idle_deadline: Option<Instant>,
    burn: Option<BurnSequence>,
}

impl Pad {
    /// `idle_timeout` of `None` disables the automatic burn.
    pub fn new(variant: Variant, idle_timeout: Option<Duration>) -> Self {
        Self {
            memo: MemoBuffer::new(variant),
            status: Status::Idle,
            idle_timeout,
            idle_deadline: None,
            burn: None,
        }
    }

    pub fn memo(&self) -> &MemoBuffer {
        &self.memo
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Time since the running burn started.
    pub fn burn_elapsed(&self, now: Instant) -> Option<Duration> {
        self.burn.as_ref().map(|burn| burn.elapsed(now))
    }

    pub fn can_burn(&self) -> bool {
        self.status == Status::Idle && !self.memo.is_empty()
    }

    /// Run an edit against the buffer.
    ///
    /// Ignored unless idle. The closure reports whether the buffer changed;
    /// only real changes rearm the idle timer.
    pub fn edit<F>(&mut self, now: Instant, edit: F) -> bool
    where
        F: FnOnce(&mut MemoBuffer) -> bool,
    {
        if self.status != Status::Idle {
            return false;
        }
        let changed = edit(&mut self.memo);
        if changed {
            self.rearm_idle(now);
        }
        changed
    }

    pub fn paste_image(&mut self, now: Instant, image: PastedImage) -> Result<bool, MemoError> {
        if self.status != Status::Idle {
            return Ok(false);
        }
        let (width, height) = (image.width(), image.height());
        self.memo.push_image(image)?;
        info!(width, height, count = self.memo.images().len(), "image pasted");
        self.rearm_idle(now);
        Ok(true)
    }

    pub fn drop_last_image(&mut self, now: Instant) -> bool {
        self.edit(now, |memo| memo.pop_image().is_some())
    }

    /// Start a burn. Returns false (and does nothing) when the guard fails.
    pub fn burn(&mut self, now: Instant, trigger: BurnTrigger) -> bool {
        if !self.can_burn() {
            debug!(?trigger, status = self.status.label(), "burn ignored");
            return false;
        }
        self.status = Status::Burning;
        self.burn = Some(BurnSequence::start(now));
        self.idle_deadline = None;
        info!(
            ?trigger,
            chars = self.memo.char_count(),
            images = self.memo.images().len(),
            "burn started"
        );
        true
    }

    /// Fire whatever is due at `now`, in order.
    pub fn advance(&mut self, now: Instant) -> Vec<PadEvent> {
        let mut events = Vec::new();

        if self.status == Status::Idle {
            if let Some(deadline) = self.idle_deadline {
                if now >= deadline {
                    self.idle_deadline = None;
                    if self.burn(now, BurnTrigger::IdleTimeout) {
                        events.push(PadEvent::BurnStarted(BurnTrigger::IdleTimeout));
                    }
                }
            }
        }

        while let Some(step) = self.burn.as_mut().and_then(|burn| burn.poll(now)) {
            events.push(self.apply(step, now));
        }
        events
    }

    /// Earliest instant at which `advance` has something to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        match &self.burn {
            Some(burn) => burn.next_deadline(),
            None => self.idle_deadline,
        }
    }

    fn apply(&mut self, step: BurnStep, now: Instant) -> PadEvent {
        match step {
            BurnStep::ClearBuffer => {
                self.memo.clear();
                info!("memo cleared");
                PadEvent::BufferCleared
            }
            BurnStep::Finish => {
                self.status = Status::Finished;
                info!("burn finished");
                PadEvent::Finished
            }
            BurnStep::Reset => {
                self.status = Status::Idle;
                self.burn = None;
                self.rearm_idle(now);
                info!("back to idle");
                PadEvent::Idle
            }
        }
    }

    fn rearm_idle(&mut self, now: Instant) {
        self.idle_deadline = if self.status == Status::Idle && !self.memo.is_empty() {
            self.idle_timeout.map(|timeout| now + timeout)
        } else {
            None
        };
    }
}
