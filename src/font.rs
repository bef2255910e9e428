//! Font descriptors for theme typography.
//!
//! A [`Font`] is an immutable (family, size, weight, slant) tuple; the
//! closed [`FontWeight`] enum keeps unrecognized weights unrepresentable.
//! The theme carries a small table of named descriptors, and widget code
//! can build ad-hoc ones with [`Font::new`].

use serde::{Deserialize, Serialize};

/// Weight of a font descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Normal,
    Medium,
    Bold,
    Black,
}

impl FontWeight {
    /// The numeric value used in QSS `font-weight` declarations.
    #[must_use]
    pub const fn qss_weight(self) -> u16 {
        match self {
            FontWeight::Normal => 400,
            FontWeight::Medium => 500,
            FontWeight::Bold => 700,
            FontWeight::Black => 900,
        }
    }
}

/// An immutable font descriptor.
///
/// Equality is structural. Size is a point value; negative sizes are
/// unrepresentable by type and zero is left to the toolkit to reject.
///
/// # Example
///
/// ```rust
/// use hmi_theme::{Font, FontWeight};
///
/// let font = Font::new("Arial", 14, FontWeight::Bold, false);
/// assert_eq!(font.family, "Arial");
/// assert_eq!(font.size, 14);
/// assert_eq!(font.weight, FontWeight::Bold);
/// assert!(!font.italic);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Font {
    /// Family name, embedded verbatim into `font-family`.
    pub family: String,
    /// Point size.
    pub size: u16,
    pub weight: FontWeight,
    pub italic: bool,
}

impl Font {
    /// Creates a font descriptor with all four fields set as given.
    pub fn new(family: impl Into<String>, size: u16, weight: FontWeight, italic: bool) -> Self {
        Self {
            family: family.into(),
            size,
            weight,
            italic,
        }
    }

    /// Renders the descriptor as QSS declarations.
    #[must_use]
    pub fn qss(&self) -> String {
        format!(
            "font-family: \"{}\"; font-size: {}pt; font-weight: {}; font-style: {};",
            self.family,
            self.size,
            self.weight.qss_weight(),
            if self.italic { "italic" } else { "normal" }
        )
    }
}
