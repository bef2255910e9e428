//! QSS stylesheet generation.
//!
//! The generators themselves are methods on [`Theme`](crate::Theme),
//! defined in this module; they are pure string formatting over the
//! theme's palette. This module also provides:
//!
//! - [`BranchIcons`]: the asset-path bundle for the project tree
//! - [`StylesheetRegistry`]: name-addressable builtins plus custom
//!   minijinja templates

mod generators;
mod registry;

pub use generators::BranchIcons;
pub use registry::StylesheetRegistry;
