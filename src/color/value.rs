//! The `Color` value type and its token encodings.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::{Serialize, Serializer};

use super::error::InvalidColorFormat;

/// An immutable color value as it appears in generated QSS.
///
/// Three token shapes cover everything the palette uses: opaque RGB
/// (`#2b2b2b`), RGBA with an 8-bit alpha (`rgba(84, 184, 255, 100)`),
/// and the literal `transparent` keyword. Equality is structural and
/// the type is `Copy`, so colors move freely between threads.
///
/// # Example
///
/// ```rust
/// use hmi_theme::Color;
///
/// let bg: Color = "#2b2b2b".parse().unwrap();
/// assert_eq!(bg, Color::rgb(0x2b, 0x2b, 0x2b));
/// assert_eq!(bg.to_string(), "#2b2b2b");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Opaque RGB, rendered as `#rrggbb`.
    Rgb { r: u8, g: u8, b: u8 },
    /// RGB with an 8-bit alpha, rendered as `rgba(r, g, b, a)`.
    Rgba { r: u8, g: u8, b: u8, a: u8 },
    /// The QSS `transparent` keyword.
    Transparent,
}

impl Color {
    /// Creates an opaque RGB color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    /// Creates an RGB color with an 8-bit alpha channel.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color::Rgba { r, g, b, a }
    }

    /// The RGB channels, ignoring alpha. `Transparent` reads as black.
    #[must_use]
    pub const fn channels(self) -> (u8, u8, u8) {
        match self {
            Color::Rgb { r, g, b } | Color::Rgba { r, g, b, .. } => (r, g, b),
            Color::Transparent => (0, 0, 0),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Color::Rgb { r, g, b } => write!(f, "#{:02x}{:02x}{:02x}", r, g, b),
            Color::Rgba { r, g, b, a } => write!(f, "rgba({}, {}, {}, {})", r, g, b, a),
            Color::Transparent => f.write_str("transparent"),
        }
    }
}

impl FromStr for Color {
    type Err = InvalidColorFormat;

    /// Parses a strict `#RRGGBB` token, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .ok_or(InvalidColorFormat::MissingPrefix)?;
        let len = hex.chars().count();
        if len != 6 {
            return Err(InvalidColorFormat::WrongLength { found: len });
        }
        let mut nibbles = [0u8; 6];
        for (slot, c) in nibbles.iter_mut().zip(hex.chars()) {
            *slot = c
                .to_digit(16)
                .ok_or(InvalidColorFormat::InvalidDigit { found: c })? as u8;
        }
        Ok(Color::rgb(
            (nibbles[0] << 4) | nibbles[1],
            (nibbles[2] << 4) | nibbles[3],
            (nibbles[4] << 4) | nibbles[5],
        ))
    }
}

/// Parses any of the three token shapes. Used when loading themes from
/// configuration, where `rgba(...)` and `transparent` are legal values.
fn parse_token(s: &str) -> Result<Color, String> {
    if s == "transparent" {
        return Ok(Color::Transparent);
    }
    if let Some(body) = s.strip_prefix("rgba(").and_then(|t| t.strip_suffix(')')) {
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        if let [r, g, b, a] = parts[..] {
            if let (Ok(r), Ok(g), Ok(b), Ok(a)) =
                (r.parse(), g.parse(), b.parse(), a.parse())
            {
                return Ok(Color::rgba(r, g, b, a));
            }
        }
        return Err(format!("malformed rgba() token '{}'", s));
    }
    s.parse::<Color>().map_err(|e| e.to_string())
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TokenVisitor;

        impl Visitor<'_> for TokenVisitor {
            type Value = Color;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a color token (#rrggbb, rgba(r, g, b, a), or transparent)")
            }

            fn visit_str<E: de::Error>(self, s: &str) -> Result<Color, E> {
                parse_token(s).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(TokenVisitor)
    }
}
