//! Theme system: the palette as an explicit value.
//!
//! This module provides:
//!
//! - [`Theme`]: every palette color and named font as a field, with
//!   stock [`Theme::dark`] and [`Theme::light`] constructors
//! - [`AdaptiveTheme`]: light/dark theme pairs with OS detection
//! - [`ColorMode`]: light or dark color mode enum
//! - [`dark`]: a shared `&'static` instance of the stock dark theme
//!
//! A theme is selected once at startup and passed by reference; there is
//! no global mutable "current theme".

mod adaptive;
#[allow(clippy::module_inception)]
mod theme;

pub use adaptive::{detect_color_mode, set_color_mode_detector, AdaptiveTheme, ColorMode};
pub use theme::{dark, Theme};
