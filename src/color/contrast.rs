//! Perceptual brightness for text-contrast decisions.

use super::value::Color;

/// Midpoint of the 0-255 brightness range. Backgrounds strictly above
/// this value take dark text; everything else takes light text.
pub const LUMINANCE_MIDPOINT: u8 = 128;

impl Color {
    /// Perceptual brightness on a 0-255 scale.
    ///
    /// Uses the Rec. 601 weighted sum `0.299 R + 0.587 G + 0.114 B`,
    /// computed in integer arithmetic with rounding. Alpha is ignored;
    /// `Transparent` reads as black.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hmi_theme::Color;
    ///
    /// assert_eq!(Color::rgb(0, 0, 0).luminance(), 0);
    /// assert_eq!(Color::rgb(255, 255, 255).luminance(), 255);
    /// ```
    #[must_use]
    pub fn luminance(self) -> u8 {
        let (r, g, b) = self.channels();
        let luma = 299 * r as u32 + 587 * g as u32 + 114 * b as u32;
        ((luma + 500) / 1000) as u8
    }

    /// Whether this background is bright enough to need dark text.
    #[must_use]
    pub fn is_light(self) -> bool {
        self.luminance() > LUMINANCE_MIDPOINT
    }
}
