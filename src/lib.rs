//! Centralized theming for a QSS-styled desktop HMI application.
//!
//! This crate holds every color, font, and generated stylesheet the
//! widget layer consumes, so presentation stays consistent and lives in
//! one place. It is a pure library: constant palettes plus string
//! formatting, no I/O, no global mutable state.
//!
//! # Overview
//!
//! - [`Theme`]: the whole palette (colors and named fonts) as one
//!   immutable value, selected at startup and passed by reference
//! - [`Color`] / [`InvalidColorFormat`]: color values, `#RRGGBB`
//!   parsing, and brightness-based contrast selection
//! - [`Font`] / [`FontWeight`]: immutable font descriptors
//! - Stylesheet generators: pure `Theme` methods returning QSS strings
//! - [`StylesheetRegistry`]: name-addressable builtins and custom
//!   minijinja templates
//! - [`AdaptiveTheme`]: light/dark pairing resolved from the OS color
//!   mode
//!
//! # Example
//!
//! ```rust
//! use hmi_theme::Theme;
//!
//! let theme = Theme::dark();
//!
//! // Generated stylesheets interpolate the palette.
//! let qss = theme.tree_widget_stylesheet();
//! assert!(qss.contains("#2b2b2b"));
//!
//! // Text contrast follows background brightness.
//! let text = theme.text_color_for_hex("#ffffff").unwrap();
//! assert_eq!(text, theme.text_dark);
//! ```

pub mod color;
pub mod font;
pub mod qss;
pub mod theme;

pub use color::{Color, InvalidColorFormat, LUMINANCE_MIDPOINT};
pub use font::{Font, FontWeight};
pub use qss::{BranchIcons, StylesheetRegistry};
pub use theme::{
    detect_color_mode, set_color_mode_detector, AdaptiveTheme, ColorMode, Theme,
};
