//! Caret blink animation
//!
//! A two-state machine driven by timer ticks. Each focus episode gets a
//! fresh token from an [`EpisodeCounter`]; ticks are posted carrying that
//! token, so a tick left over from an earlier episode is recognised and
//! dropped instead of toggling the caret out of phase.

use std::time::Duration;

use kode_animation::{EpisodeCounter, TaskId, TimerScheduler};
use kode_core::fsm::StateMachine;

/// Caret states
pub mod states {
    pub const INVISIBLE: u32 = 0;
    pub const VISIBLE: u32 = 1;
}

/// Caret events
pub mod events {
    pub const TICK: u32 = 1;
    pub const HIDE: u32 = 2;
}

/// Whether the caret is currently drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaretPhase {
    Visible,
    Invisible,
}

/// What a delivered tick did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Phase flipped and the next tick was scheduled
    Toggled(CaretPhase),
    /// Focus was gone; caret hidden and the loop ended
    Stopped,
    /// Tick belonged to a finished episode and was ignored
    Stale,
}

#[derive(Clone, Debug)]
pub struct CaretBlink {
    fsm: StateMachine,
    interval: Duration,
    episodes: EpisodeCounter,
    pending: Option<TaskId>,
}

impl CaretBlink {
    pub fn new(interval: Duration) -> Self {
        let fsm = StateMachine::builder(states::INVISIBLE)
            .on(states::INVISIBLE, events::TICK, states::VISIBLE)
            .on(states::VISIBLE, events::TICK, states::INVISIBLE)
            .on(states::VISIBLE, events::HIDE, states::INVISIBLE)
            .build();

        Self {
            fsm,
            interval,
            episodes: EpisodeCounter::new(),
            pending: None,
        }
    }

    pub fn phase(&self) -> CaretPhase {
        if self.fsm.is_in(states::VISIBLE) {
            CaretPhase::Visible
        } else {
            CaretPhase::Invisible
        }
    }

    /// Token of the running blink episode
    pub fn episode(&self) -> Option<u64> {
        self.episodes.active()
    }

    /// Task id of the outstanding tick, if any
    pub fn pending_tick(&self) -> Option<TaskId> {
        self.pending
    }

    /// Begin a new blink episode from INVISIBLE, superseding any running one
    pub fn start(&mut self, owner: u64, scheduler: &mut TimerScheduler) {
        self.cancel_pending(scheduler);
        let token = self.episodes.begin();
        self.fsm.reset();
        self.fsm.clear_history();
        self.pending = Some(scheduler.post_delayed(self.interval, owner, token));
        tracing::trace!(owner, token, "caret blink started");
    }

    /// End the episode and hide the caret immediately
    pub fn stop(&mut self, scheduler: &mut TimerScheduler) {
        self.cancel_pending(scheduler);
        self.episodes.end();
        self.fsm.send(events::HIDE);
        self.fsm.clear_history();
    }

    /// Handle a delivered tick carrying `token`.
    ///
    /// Focus is checked again here: a tick arriving after focus loss ends
    /// the loop without rescheduling.
    pub fn on_tick(
        &mut self,
        token: u64,
        focused: bool,
        owner: u64,
        scheduler: &mut TimerScheduler,
    ) -> TickOutcome {
        if !self.episodes.is_current(token) {
            tracing::trace!(owner, token, "dropping stale caret tick");
            return TickOutcome::Stale;
        }
        self.pending = None;

        if !focused {
            self.episodes.end();
            self.fsm.send(events::HIDE);
            return TickOutcome::Stopped;
        }

        self.fsm.send(events::TICK);
        self.pending = Some(scheduler.post_delayed(self.interval, owner, token));
        TickOutcome::Toggled(self.phase())
    }

    fn cancel_pending(&mut self, scheduler: &mut TimerScheduler) {
        if let Some(id) = self.pending.take() {
            scheduler.cancel(id);
        }
    }
}
