//! Base widget trait and types

use std::sync::atomic::{AtomicU64, Ordering};

use kode_core::events::Event;
use kode_paint::{DrawContext, TextMeasurer};

use crate::context::WidgetContext;

static NEXT_WIDGET_ID: AtomicU64 = AtomicU64::new(1);

/// Unique widget identifier, also used as the event target
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(u64);

impl WidgetId {
    /// Allocate a fresh, process-unique id
    pub fn next() -> Self {
        Self(NEXT_WIDGET_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

/// Base trait for all widgets
pub trait Widget {
    /// Get the widget's unique ID
    fn id(&self) -> WidgetId;

    /// Paint the current state. Must not fail: degenerate geometry draws nothing.
    fn paint(&self, ctx: &mut dyn DrawContext, measurer: &dyn TextMeasurer);

    /// Handle an event addressed to this widget
    fn handle_event(&mut self, ctx: &mut WidgetContext, event: &Event);
}
