//! Kode Widget Library
//!
//! [`SlotInput`] draws a fixed number of underlined character slots in
//! place of a continuous text box, for PINs, one-time codes and other
//! short fixed-length entries.

pub mod context;
pub mod slot_input;
pub mod widget;

pub use context::WidgetContext;
pub use slot_input::{
    CaretPhase, SelectionAction, SelectionActionHandler, SlotInput, SlotInputConfig,
    StyleAttributes,
};
pub use widget::{Widget, WidgetId};
