//! Slot geometry
//!
//! Geometry is a pure function of the widget bounds, padding, slot count and
//! spacing. It is recomputed on every paint and never stored.

use kode_paint::{Insets, Rect};
use smallvec::SmallVec;

/// Horizontal extent of one slot
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlotSpan {
    pub start: f32,
    pub end: f32,
}

impl SlotSpan {
    pub fn center(&self) -> f32 {
        (self.start + self.end) / 2.0
    }
}

/// Computed slot geometry for one paint pass
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlotLayout {
    origin_x: f32,
    slot_width: f32,
    spacing: f32,
    slot_count: usize,
    underline_y: f32,
}

impl SlotLayout {
    /// Lay out `slot_count` slots across the padded width of `bounds`.
    ///
    /// Returns `None` when there are no slots or the slots would have no
    /// positive width.
    pub fn compute(bounds: Rect, padding: Insets, slot_count: usize, spacing: f32) -> Option<Self> {
        if slot_count == 0 {
            return None;
        }
        let available = bounds.width - padding.horizontal();
        let gaps = spacing * (slot_count - 1) as f32;
        let slot_width = (available - gaps) / slot_count as f32;
        if !(slot_width > 0.0) {
            return None;
        }

        Some(Self {
            origin_x: bounds.x + padding.left,
            slot_width,
            spacing,
            slot_count,
            underline_y: bounds.bottom() - padding.bottom,
        })
    }

    pub fn slot_width(&self) -> f32 {
        self.slot_width
    }

    /// Y coordinate every underline is drawn along
    pub fn underline_y(&self) -> f32 {
        self.underline_y
    }

    /// Span of slot `index`
    pub fn slot(&self, index: usize) -> SlotSpan {
        let start = self.origin_x + index as f32 * (self.slot_width + self.spacing);
        SlotSpan {
            start,
            end: start + self.slot_width,
        }
    }

    /// All slot spans, left to right
    pub fn slots(&self) -> SmallVec<[SlotSpan; 8]> {
        (0..self.slot_count).map(|i| self.slot(i)).collect()
    }

    /// Left edge for a glyph of width `advance` centered in slot `index`
    pub fn glyph_x(&self, index: usize, advance: f32) -> f32 {
        self.slot(index).center() - advance / 2.0
    }

    /// Text baseline: the stroke width plus the font descent above the underline
    pub fn baseline_y(&self, line_stroke_width: f32, descent: f32) -> f32 {
        self.underline_y - line_stroke_width - descent
    }
}

/// Index of the slot the next character lands in
pub fn active_slot_index(content_len: usize, slot_count: usize) -> usize {
    content_len.min(slot_count.saturating_sub(1))
}
