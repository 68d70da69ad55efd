//! Kode Paint API
//!
//! The drawing surface a widget paints onto, kept deliberately small:
//!
//! - Straight stroked lines (underlines, carets)
//! - Baseline-anchored text runs
//! - Glyph measurement through [`TextMeasurer`]
//!
//! [`PaintContext`] records every call as a [`PaintCommand`] so a host
//! renderer (or a test) can replay or inspect a frame.

pub mod color;
pub mod context;
pub mod primitives;
pub mod text;

pub use color::Color;
pub use context::{DrawContext, PaintCommand, PaintContext, StrokeStyle};
pub use primitives::*;
pub use text::{FixedAdvanceMeasurer, FontMetrics, TextMeasurer};
