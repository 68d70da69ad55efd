//! Display density

use serde::Deserialize;

/// Pixels per density-independent unit
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Density(pub f32);

impl Density {
    pub const fn new(scale: f32) -> Self {
        Self(scale)
    }

    pub fn scale(&self) -> f32 {
        self.0
    }

    /// Convert density-independent units to pixels
    pub fn to_px(&self, dp: f32) -> f32 {
        dp * self.0
    }
}

impl Default for Density {
    fn default() -> Self {
        Self(1.0)
    }
}
