//! The theme struct: every palette color and named font as a field.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::color::{Color, InvalidColorFormat};
use crate::font::{Font, FontWeight};

/// A complete widget theme: palette colors plus named fonts.
///
/// The theme is an explicit value selected once at startup and passed by
/// reference to widget code; swapping themes means constructing a
/// different `Theme`, never rebinding globals. All fields are plain
/// immutable values, so a shared `&Theme` is safe to read from any
/// number of threads.
///
/// # Example
///
/// ```rust
/// use hmi_theme::Theme;
///
/// let theme = Theme::dark();
/// let qss = theme.status_bar_stylesheet();
/// assert!(qss.contains("#2c3e50"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    // Backgrounds
    /// Main background for tree widgets and docks.
    pub bg_dark_primary: Color,
    pub bg_dark_secondary: Color,
    pub bg_dark_tertiary: Color,
    /// Header background.
    pub bg_dark_quaternary: Color,
    /// Status bar blue-grey.
    pub bg_status_bar: Color,
    pub bg_spreadsheet: Color,
    pub bg_spreadsheet_cell: Color,

    // Text
    /// Primary text, readable on dark backgrounds.
    pub text_primary: Color,
    pub text_secondary: Color,
    /// Dark text, readable on light backgrounds.
    pub text_dark: Color,

    // Accents
    pub accent_green: Color,
    pub accent_green_dark: Color,
    pub accent_yellow: Color,
    pub accent_yellow_dark: Color,

    // Interactive states
    pub selected: Color,
    pub selected_alt: Color,
    pub hover: Color,
    pub selection_highlight: Color,
    pub selection_highlight_alt: Color,
    /// Focus/selection highlight blue.
    pub focus_highlight: Color,
    pub hover_focus: Color,
    pub selection_fill: Color,
    pub header_text: Color,

    // Borders and grid lines
    pub border_dark: Color,
    pub border_medium: Color,
    pub border_light: Color,
    pub border_header: Color,
    pub grid_line: Color,
    pub grid_line_dark: Color,

    // Reference/formula tag colors
    pub ref_blue: Color,
    pub ref_red: Color,
    pub ref_green: Color,
    pub ref_purple: Color,

    // Canvas drawing
    pub selection_box_border: Color,
    pub selection_box_fill: Color,
    pub transform_border: Color,
    /// Individual-transform handle border (magenta).
    pub transform_individual: Color,
    pub grid_background: Color,
    pub grid: Color,
    pub default_shape_fill: Color,
    pub default_shape_fill_light: Color,
    pub default_shape_border: Color,

    // Status indicators
    pub error: Color,
    pub warning: Color,
    pub success: Color,
    /// Debug/focus border, transparent in both stock themes.
    pub debug_border: Color,

    // Pattern and gradient defaults
    pub pattern_fg: Color,
    pub pattern_bg: Color,
    pub gradient_1: Color,
    pub gradient_2: Color,

    // Typography
    pub base_font: Font,
    pub header_font: Font,
    /// Font for hint and completer popups.
    pub hint_font: Font,
    pub mono_font: Font,
}

impl Theme {
    /// The stock Material-inspired dark theme.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            bg_dark_primary: Color::rgb(0x2b, 0x2b, 0x2b),
            bg_dark_secondary: Color::rgb(0x25, 0x25, 0x25),
            bg_dark_tertiary: Color::rgb(0x3d, 0x3d, 0x3d),
            bg_dark_quaternary: Color::rgb(0x35, 0x35, 0x35),
            bg_status_bar: Color::rgb(0x2c, 0x3e, 0x50),
            bg_spreadsheet: Color::rgb(0x19, 0x19, 0x19),
            bg_spreadsheet_cell: Color::rgb(0x1a, 0x1a, 0x1a),

            text_primary: Color::rgb(0xff, 0xff, 0xff),
            text_secondary: Color::rgb(0xc8, 0xc8, 0xc8),
            text_dark: Color::rgb(0x00, 0x00, 0x00),

            accent_green: Color::rgb(0x34, 0xa8, 0x53),
            accent_green_dark: Color::rgb(0x2e, 0x7d, 0x32),
            accent_yellow: Color::rgb(0xfb, 0xbc, 0x05),
            accent_yellow_dark: Color::rgb(0xf9, 0xab, 0x00),

            selected: Color::rgba(84, 184, 255, 100),
            selected_alt: Color::rgba(84, 184, 255, 150),
            hover: Color::rgb(0x50, 0x50, 0x50),
            selection_highlight: Color::rgba(84, 184, 255, 100),
            selection_highlight_alt: Color::rgba(84, 184, 255, 150),
            focus_highlight: Color::rgb(0x00, 0x78, 0xd7),
            hover_focus: Color::rgb(0x5b, 0x9b, 0xd5),
            selection_fill: Color::rgb(0x22, 0x8b, 0x22),
            header_text: Color::rgb(0xbf, 0xbf, 0xbf),

            border_dark: Color::rgb(0x44, 0x44, 0x44),
            border_medium: Color::rgb(0x55, 0x55, 0x55),
            border_light: Color::rgb(0x66, 0x66, 0x66),
            border_header: Color::rgb(0x55, 0x55, 0x55),
            grid_line: Color::rgb(0x25, 0x25, 0x25),
            grid_line_dark: Color::rgb(0x2b, 0x2b, 0x2b),

            ref_blue: Color::rgb(0x54, 0xb8, 0xff),
            ref_red: Color::rgb(0xff, 0x3c, 0x3c),
            ref_green: Color::rgb(0x39, 0xff, 0x92),
            ref_purple: Color::rgb(0xbe, 0x6a, 0xff),

            selection_box_border: Color::rgb(0x00, 0xff, 0xff),
            selection_box_fill: Color::rgba(255, 255, 255, 128),
            transform_border: Color::rgb(0x00, 0xff, 0xff),
            transform_individual: Color::rgb(0xff, 0x4f, 0xf0),
            grid_background: Color::rgb(0xd3, 0xd3, 0xd3),
            grid: Color::rgb(0xa9, 0xa9, 0xa9),
            default_shape_fill: Color::rgba(200, 200, 200, 100),
            default_shape_fill_light: Color::rgb(0xf1, 0x5b, 0x5b),
            default_shape_border: Color::rgb(0x00, 0x00, 0x00),

            error: Color::rgb(0xff, 0x00, 0x00),
            warning: Color::rgb(0xff, 0xa5, 0x00),
            success: Color::rgb(0x00, 0xaa, 0x00),
            debug_border: Color::Transparent,

            pattern_fg: Color::rgb(0x00, 0x00, 0x00),
            pattern_bg: Color::rgb(0xff, 0xff, 0xff),
            gradient_1: Color::rgb(0xd0, 0xce, 0xce),
            gradient_2: Color::rgb(0x59, 0x69, 0x78),

            base_font: Font::new("Helvetica", 9, FontWeight::Normal, false),
            header_font: Font::new("Helvetica", 10, FontWeight::Bold, false),
            hint_font: Font::new("Helvetica", 9, FontWeight::Normal, false),
            mono_font: Font::new("Consolas", 9, FontWeight::Normal, false),
        }
    }

    /// A light counterpart to [`Theme::dark`], for the OS light mode.
    #[must_use]
    pub fn light() -> Self {
        Self {
            bg_dark_primary: Color::rgb(0xfa, 0xfa, 0xfa),
            bg_dark_secondary: Color::rgb(0xf0, 0xf0, 0xf0),
            bg_dark_tertiary: Color::rgb(0xdc, 0xdc, 0xdc),
            bg_dark_quaternary: Color::rgb(0xe6, 0xe6, 0xe6),
            bg_status_bar: Color::rgb(0xdf, 0xe6, 0xec),
            bg_spreadsheet: Color::rgb(0xff, 0xff, 0xff),
            bg_spreadsheet_cell: Color::rgb(0xfc, 0xfc, 0xfc),

            text_primary: Color::rgb(0x1e, 0x1e, 0x1e),
            text_secondary: Color::rgb(0x50, 0x50, 0x50),
            text_dark: Color::rgb(0x00, 0x00, 0x00),

            accent_green: Color::rgb(0x34, 0xa8, 0x53),
            accent_green_dark: Color::rgb(0x2e, 0x7d, 0x32),
            accent_yellow: Color::rgb(0xfb, 0xbc, 0x05),
            accent_yellow_dark: Color::rgb(0xf9, 0xab, 0x00),

            selected: Color::rgba(84, 184, 255, 100),
            selected_alt: Color::rgba(84, 184, 255, 150),
            hover: Color::rgb(0xd0, 0xd0, 0xd0),
            selection_highlight: Color::rgba(84, 184, 255, 100),
            selection_highlight_alt: Color::rgba(84, 184, 255, 150),
            focus_highlight: Color::rgb(0x00, 0x78, 0xd7),
            hover_focus: Color::rgb(0x5b, 0x9b, 0xd5),
            selection_fill: Color::rgb(0x22, 0x8b, 0x22),
            header_text: Color::rgb(0x40, 0x40, 0x40),

            border_dark: Color::rgb(0xc0, 0xc0, 0xc0),
            border_medium: Color::rgb(0xb0, 0xb0, 0xb0),
            border_light: Color::rgb(0xa0, 0xa0, 0xa0),
            border_header: Color::rgb(0xb0, 0xb0, 0xb0),
            grid_line: Color::rgb(0xe0, 0xe0, 0xe0),
            grid_line_dark: Color::rgb(0xd5, 0xd5, 0xd5),

            ref_blue: Color::rgb(0x1a, 0x73, 0xe8),
            ref_red: Color::rgb(0xd9, 0x30, 0x25),
            ref_green: Color::rgb(0x18, 0x80, 0x38),
            ref_purple: Color::rgb(0x93, 0x34, 0xe6),

            selection_box_border: Color::rgb(0x00, 0x8b, 0x8b),
            selection_box_fill: Color::rgba(0, 0, 0, 40),
            transform_border: Color::rgb(0x00, 0x8b, 0x8b),
            transform_individual: Color::rgb(0xc7, 0x17, 0xb5),
            grid_background: Color::rgb(0xff, 0xff, 0xff),
            grid: Color::rgb(0xc8, 0xc8, 0xc8),
            default_shape_fill: Color::rgba(120, 120, 120, 100),
            default_shape_fill_light: Color::rgb(0xf1, 0x5b, 0x5b),
            default_shape_border: Color::rgb(0x00, 0x00, 0x00),

            error: Color::rgb(0xd3, 0x2f, 0x2f),
            warning: Color::rgb(0xe6, 0x8a, 0x00),
            success: Color::rgb(0x00, 0x8a, 0x00),
            debug_border: Color::Transparent,

            pattern_fg: Color::rgb(0x00, 0x00, 0x00),
            pattern_bg: Color::rgb(0xff, 0xff, 0xff),
            gradient_1: Color::rgb(0xff, 0xff, 0xff),
            gradient_2: Color::rgb(0x90, 0xa4, 0xae),

            base_font: Font::new("Helvetica", 9, FontWeight::Normal, false),
            header_font: Font::new("Helvetica", 10, FontWeight::Bold, false),
            hint_font: Font::new("Helvetica", 9, FontWeight::Normal, false),
            mono_font: Font::new("Consolas", 9, FontWeight::Normal, false),
        }
    }

    /// Picks a readable text color for the given background.
    ///
    /// Backgrounds brighter than the 0-255 midpoint take the dark text
    /// color; everything else takes the primary text color.
    #[must_use]
    pub fn text_color_for(&self, background: Color) -> Color {
        if background.is_light() {
            self.text_dark
        } else {
            self.text_primary
        }
    }

    /// Parses a `#RRGGBB` background string and picks a readable text
    /// color for it.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidColorFormat`] when the string is not a six-digit
    /// hex color; malformed input is never silently mapped to a default.
    pub fn text_color_for_hex(&self, background: &str) -> Result<Color, InvalidColorFormat> {
        Ok(self.text_color_for(background.parse()?))
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

static DARK: Lazy<Theme> = Lazy::new(Theme::dark);

/// Shared instance of the stock dark theme.
#[must_use]
pub fn dark() -> &'static Theme {
    &DARK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        assert_eq!(Theme::default(), Theme::dark());
    }

    #[test]
    fn test_shared_dark_matches_constructor() {
        assert_eq!(*dark(), Theme::dark());
    }

    #[test]
    fn test_text_color_for_black_background() {
        let theme = Theme::dark();
        assert_eq!(
            theme.text_color_for_hex("#000000").unwrap(),
            theme.text_primary
        );
    }

    #[test]
    fn test_text_color_for_white_background() {
        let theme = Theme::dark();
        assert_eq!(
            theme.text_color_for_hex("#ffffff").unwrap(),
            theme.text_dark
        );
    }

    #[test]
    fn test_text_color_is_pure() {
        let theme = Theme::dark();
        let first = theme.text_color_for_hex("#34a853").unwrap();
        for _ in 0..8 {
            assert_eq!(theme.text_color_for_hex("#34a853").unwrap(), first);
        }
    }

    #[test]
    fn test_text_color_rejects_malformed_input() {
        let theme = Theme::dark();
        assert!(theme.text_color_for_hex("2b2b2b").is_err());
        assert!(theme.text_color_for_hex("#2b2b").is_err());
        assert!(theme.text_color_for_hex("#2b2b2x").is_err());
    }

    #[test]
    fn test_dark_palette_literals() {
        let theme = Theme::dark();
        assert_eq!(theme.bg_dark_primary.to_string(), "#2b2b2b");
        assert_eq!(theme.bg_status_bar.to_string(), "#2c3e50");
        assert_eq!(theme.accent_green.to_string(), "#34a853");
        assert_eq!(theme.selected.to_string(), "rgba(84, 184, 255, 100)");
        assert_eq!(theme.debug_border.to_string(), "transparent");
    }

    #[test]
    fn test_theme_serde_roundtrip() {
        let theme = Theme::dark();
        let json = serde_json::to_string(&theme).unwrap();
        let back: Theme = serde_json::from_str(&json).unwrap();
        assert_eq!(back, theme);
    }

    #[test]
    fn test_theme_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Theme>();
    }
}
