//! Text measurement
//!
//! Shaping and rasterization live in the host. Widgets only need per-glyph
//! advances and the vertical extents of a font at a given size.

use smallvec::SmallVec;

/// Vertical font extents at a given size, in pixels.
///
/// Both values are distances from the baseline and are non-negative:
/// `ascent` goes up, `descent` goes down.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FontMetrics {
    pub ascent: f32,
    pub descent: f32,
}

/// Glyph measurement supplied by the host text stack
pub trait TextMeasurer {
    /// Advance width of every char in `text`, one entry per char
    fn glyph_advances(&self, text: &str, size: f32) -> SmallVec<[f32; 8]>;

    /// Font extents at `size`
    fn metrics(&self, size: f32) -> FontMetrics;
}

/// Measurer where every glyph has the same advance, expressed in ems.
///
/// Useful for headless rendering and tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedAdvanceMeasurer {
    pub advance_em: f32,
    pub ascent_em: f32,
    pub descent_em: f32,
}

impl FixedAdvanceMeasurer {
    pub const fn new(advance_em: f32, ascent_em: f32, descent_em: f32) -> Self {
        Self {
            advance_em,
            ascent_em,
            descent_em,
        }
    }
}

impl Default for FixedAdvanceMeasurer {
    fn default() -> Self {
        Self::new(0.6, 0.8, 0.2)
    }
}

impl TextMeasurer for FixedAdvanceMeasurer {
    fn glyph_advances(&self, text: &str, size: f32) -> SmallVec<[f32; 8]> {
        text.chars().map(|_| self.advance_em * size).collect()
    }

    fn metrics(&self, size: f32) -> FontMetrics {
        FontMetrics {
            ascent: self.ascent_em * size,
            descent: self.descent_em * size,
        }
    }
}
