//! Design tokens for theming
//!
//! - Colors
//! - Display density

mod color;
mod density;

pub use color::*;
pub use density::*;
