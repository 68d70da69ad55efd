//! State Machine Runtime
//!
//! Flat statecharts for widget interaction states. A machine is a fixed
//! table of `(from, event) -> to` transitions; events with no matching
//! transition leave the state untouched.

use std::collections::VecDeque;

use smallvec::SmallVec;

/// Identifier for a state within a state machine
pub type StateId = u32;

/// Identifier for an event type
pub type EventId = u32;

/// Transitions kept in [`StateMachine::history`]; older entries are dropped
pub const HISTORY_LIMIT: usize = 32;

/// A transition in the state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from_state: StateId,
    pub event: EventId,
    pub to_state: StateId,
}

impl Transition {
    pub const fn new(from: StateId, event: EventId, to: StateId) -> Self {
        Self {
            from_state: from,
            event,
            to_state: to,
        }
    }
}

/// Builder for creating state machines
pub struct StateMachineBuilder {
    initial_state: StateId,
    transitions: SmallVec<[Transition; 8]>,
}

impl StateMachineBuilder {
    pub fn new(initial_state: StateId) -> Self {
        Self {
            initial_state,
            transitions: SmallVec::new(),
        }
    }

    /// Add a transition (from, event, to)
    pub fn on(mut self, from: StateId, event: EventId, to: StateId) -> Self {
        self.transitions.push(Transition::new(from, event, to));
        self
    }

    /// Build the state machine
    pub fn build(self) -> StateMachine {
        StateMachine {
            initial_state: self.initial_state,
            current_state: self.initial_state,
            transitions: self.transitions,
            history: VecDeque::with_capacity(HISTORY_LIMIT),
        }
    }
}

/// A state machine instance
#[derive(Clone, Debug)]
pub struct StateMachine {
    initial_state: StateId,
    current_state: StateId,
    transitions: SmallVec<[Transition; 8]>,
    /// Most recent transitions (for debugging), at most [`HISTORY_LIMIT`]
    history: VecDeque<(StateId, EventId, StateId)>,
}

impl StateMachine {
    /// Create a builder for a state machine
    pub fn builder(initial_state: StateId) -> StateMachineBuilder {
        StateMachineBuilder::new(initial_state)
    }

    /// Get the current state
    pub fn current_state(&self) -> StateId {
        self.current_state
    }

    /// Check if we're in a specific state
    pub fn is_in(&self, state: StateId) -> bool {
        self.current_state == state
    }

    /// Get transition history, oldest first
    pub fn history(&self) -> impl ExactSizeIterator<Item = &(StateId, EventId, StateId)> {
        self.history.iter()
    }

    /// Clear transition history
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Check if an event can trigger a transition from current state
    pub fn can_send(&self, event: EventId) -> bool {
        self.find(event).is_some()
    }

    /// Send an event, returning the (possibly unchanged) current state
    pub fn send(&mut self, event: EventId) -> StateId {
        let current = self.current_state;
        let Some(transition) = self.find(event) else {
            return current;
        };

        let to_state = transition.to_state;
        self.current_state = to_state;
        if self.history.len() == HISTORY_LIMIT {
            self.history.pop_front();
        }
        self.history.push_back((current, event, to_state));
        tracing::trace!(from = current, event, to = to_state, "fsm transition");
        to_state
    }

    /// Return to the initial state without recording a transition
    pub fn reset(&mut self) {
        self.current_state = self.initial_state;
    }

    fn find(&self, event: EventId) -> Option<&Transition> {
        self.transitions
            .iter()
            .find(|t| t.from_state == self.current_state && t.event == event)
    }
}
