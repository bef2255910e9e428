//! Color values, hex parsing, and contrast selection.
//!
//! This module provides the color primitives the theme is built from:
//!
//! - [`Color`]: an immutable color value covering the three token shapes
//!   QSS output uses (`#rrggbb`, `rgba(...)`, `transparent`)
//! - [`InvalidColorFormat`]: the error produced when a hex color string
//!   cannot be parsed
//!
//! Perceptual brightness lives here too, as [`Color::luminance`]; the
//! mapping from brightness to a concrete text color is a theme decision
//! and lives on [`Theme`](crate::Theme).

mod contrast;
mod error;
mod value;

pub use contrast::LUMINANCE_MIDPOINT;
pub use error::InvalidColorFormat;
pub use value::Color;
