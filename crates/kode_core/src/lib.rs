//! Kode Core Runtime
//!
//! Foundational pieces shared by every Kode widget:
//!
//! - **Events**: a small, platform-agnostic event model
//! - **Listener dispatch**: zero-or-one external handler per event type,
//!   invoked after the widget's own handling
//! - **State Machines**: flat statecharts for widget interaction states
//! - **Errors**: the crate-wide [`KodeError`]
//!
//! # Example
//!
//! ```rust
//! use kode_core::events::{event_types, Event};
//! use kode_core::ListenerRegistry;
//!
//! let mut listeners = ListenerRegistry::new();
//! listeners.set(event_types::CLICK, |event| {
//!     println!("clicked widget {}", event.target);
//! });
//!
//! assert!(listeners.dispatch(&Event::click(7, 1.0, 2.0)));
//! ```

pub mod error;
pub mod events;
pub mod fsm;

pub use error::{KodeError, Result};
pub use events::{Event, EventData, EventType, ListenerRegistry};
pub use fsm::{EventId, StateId, StateMachine, Transition};
