//! Kode Theme System
//!
//! Resolves the fallback colors a widget uses when its styling input leaves
//! a color unset, and carries the display density used to turn
//! density-independent units into pixels.
//!
//! # Quick Start
//!
//! ```rust
//! use kode_theme::{ColorScheme, ColorToken, Theme, ThemeResolver};
//!
//! let theme = Theme::for_scheme(ColorScheme::Dark);
//! let highlight = theme.resolve_color(ColorToken::ControlHighlight);
//! assert!(highlight.a < 1.0);
//! ```
//!
//! # Tokens
//!
//! - [`ColorTokens`]: semantic colors (primary, control states, text)
//! - [`Density`]: density-independent unit to pixel scale

pub mod theme;
pub mod tokens;

pub use theme::{ColorScheme, Theme, ThemeResolver};
pub use tokens::*;
