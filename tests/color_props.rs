//! Property tests for color parsing and contrast selection.

use hmi_theme::{Color, Theme, LUMINANCE_MIDPOINT};
use proptest::prelude::*;

proptest! {
    #[test]
    fn display_then_parse_roundtrips(r: u8, g: u8, b: u8) {
        let color = Color::rgb(r, g, b);
        let parsed: Color = color.to_string().parse().unwrap();
        prop_assert_eq!(parsed, color);
    }

    #[test]
    fn uppercase_hex_parses_to_same_color(r: u8, g: u8, b: u8) {
        let lower = format!("#{:02x}{:02x}{:02x}", r, g, b);
        let upper = lower.to_uppercase();
        prop_assert_eq!(
            upper.parse::<Color>().unwrap(),
            lower.parse::<Color>().unwrap()
        );
    }

    #[test]
    fn text_color_is_one_of_the_two_presets(r: u8, g: u8, b: u8) {
        let theme = Theme::dark();
        let background = Color::rgb(r, g, b);
        let text = theme.text_color_for(background);
        if background.luminance() > LUMINANCE_MIDPOINT {
            prop_assert_eq!(text, theme.text_dark);
        } else {
            prop_assert_eq!(text, theme.text_primary);
        }
    }

    #[test]
    fn greyscale_luminance_is_identity(v: u8) {
        // 299 + 587 + 114 = 1000, so grey maps to itself.
        prop_assert_eq!(Color::rgb(v, v, v).luminance(), v);
    }

    #[test]
    fn strings_without_prefix_never_parse(s in "[^#].*") {
        prop_assert!(s.parse::<Color>().is_err());
    }
}
