//! Event model and listener dispatch
//!
//! Hosts translate their native callbacks (taps, focus changes, text
//! edits, timer expiry) into [`Event`]s and hand them to widgets. A widget
//! runs its own handling first and then forwards the event to the
//! external listener registered for that event type, if any.

use rustc_hash::FxHashMap;

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    /// Tap / click on the widget
    pub const CLICK: EventType = 1;
    /// Focus gained or lost (see [`super::EventData::Focus`])
    pub const FOCUS_CHANGED: EventType = 10;
    /// Host text content changed
    pub const TEXT_CHANGED: EventType = 22;
    /// A deferred task scheduled by the widget came due
    pub const TIMER: EventType = 40;
}

/// A UI event with associated data
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    pub event_type: EventType,
    pub target: u64, // Widget ID
    pub data: EventData,
    pub timestamp: u64,
    pub propagation_stopped: bool,
}

/// Event-specific data
#[derive(Clone, Debug, PartialEq)]
pub enum EventData {
    Pointer {
        x: f32,
        y: f32,
    },
    Focus {
        focused: bool,
    },
    /// Full content of the host text field after an edit
    Text {
        text: String,
    },
    /// Timer expiry; `token` identifies the scheduling episode
    Timer {
        token: u64,
    },
    None,
}

impl Event {
    fn new(event_type: EventType, target: u64, data: EventData) -> Self {
        Self {
            event_type,
            target,
            data,
            timestamp: 0,
            propagation_stopped: false,
        }
    }

    pub fn click(target: u64, x: f32, y: f32) -> Self {
        Self::new(event_types::CLICK, target, EventData::Pointer { x, y })
    }

    pub fn focus_changed(target: u64, focused: bool) -> Self {
        Self::new(
            event_types::FOCUS_CHANGED,
            target,
            EventData::Focus { focused },
        )
    }

    pub fn text_changed(target: u64, text: impl Into<String>) -> Self {
        Self::new(
            event_types::TEXT_CHANGED,
            target,
            EventData::Text { text: text.into() },
        )
    }

    pub fn timer(target: u64, token: u64) -> Self {
        Self::new(event_types::TIMER, target, EventData::Timer { token })
    }

    /// Set the timestamp (milliseconds on the host clock)
    pub fn at(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }
}

/// Event handler function type
pub type EventHandler = Box<dyn FnMut(&Event) + Send>;

/// Holds zero or one externally registered handler per event type.
///
/// Registering a handler for a type that already has one replaces it.
pub struct ListenerRegistry {
    handlers: FxHashMap<EventType, EventHandler>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self {
            handlers: FxHashMap::default(),
        }
    }

    /// Register the handler for an event type, returning the one it replaces
    pub fn set<F>(&mut self, event_type: EventType, handler: F) -> Option<EventHandler>
    where
        F: FnMut(&Event) + Send + 'static,
    {
        self.handlers.insert(event_type, Box::new(handler))
    }

    /// Remove the handler for an event type
    pub fn clear(&mut self, event_type: EventType) -> Option<EventHandler> {
        self.handlers.remove(&event_type)
    }

    pub fn is_set(&self, event_type: EventType) -> bool {
        self.handlers.contains_key(&event_type)
    }

    /// Forward an event to its registered handler.
    ///
    /// Returns `true` if a handler ran.
    pub fn dispatch(&mut self, event: &Event) -> bool {
        if event.propagation_stopped {
            return false;
        }
        match self.handlers.get_mut(&event.event_type) {
            Some(handler) => {
                handler(event);
                true
            }
            None => false,
        }
    }
}

impl Default for ListenerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
