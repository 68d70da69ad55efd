//! Widget context - the host services a widget talks to while handling events

use std::time::Duration;

use kode_animation::TimerScheduler;
use kode_core::events::Event;
use rustc_hash::FxHashSet;

use crate::widget::WidgetId;

/// Shared per-window state: the deferred task scheduler and the set of
/// widgets that asked to be redrawn.
#[derive(Default)]
pub struct WidgetContext {
    scheduler: TimerScheduler,
    dirty: FxHashSet<WidgetId>,
}

impl WidgetContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scheduler(&self) -> &TimerScheduler {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut TimerScheduler {
        &mut self.scheduler
    }

    /// Request a redraw of `id`
    pub fn mark_dirty(&mut self, id: WidgetId) {
        self.dirty.insert(id);
    }

    pub fn is_dirty(&self, id: WidgetId) -> bool {
        self.dirty.contains(&id)
    }

    /// Drain pending redraw requests
    pub fn take_dirty(&mut self) -> Vec<WidgetId> {
        let mut ids: Vec<WidgetId> = self.dirty.drain().collect();
        ids.sort_unstable();
        ids
    }

    /// Advance the clock by `dt`, delivering every task that comes due as a
    /// timer event. Tasks posted by `deliver` run in the same pass if they
    /// fall inside the window.
    pub fn advance<F>(&mut self, dt: Duration, mut deliver: F)
    where
        F: FnMut(&mut WidgetContext, Event),
    {
        let deadline = self.scheduler.now() + dt;
        while let Some(task) = self.scheduler.pop_due(deadline) {
            let event = Event::timer(task.target, task.token).at(task.due.as_millis() as u64);
            deliver(self, event);
        }
        self.scheduler.advance_clock_to(deadline);
    }
}
