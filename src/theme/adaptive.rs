//! Adaptive theme selection based on the OS color mode.

use dark_light::{detect as detect_os_mode, Mode as OsMode};
use once_cell::sync::Lazy;
use std::sync::Mutex;

use super::theme::Theme;

/// The user's preferred color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Light,
    Dark,
}

/// A light/dark theme pair resolved against the OS color mode.
///
/// # Example
///
/// ```rust
/// use hmi_theme::{AdaptiveTheme, ColorMode, Theme};
///
/// hmi_theme::set_color_mode_detector(|| ColorMode::Dark);
/// let adaptive = AdaptiveTheme::new(Theme::light(), Theme::dark());
/// assert_eq!(*adaptive.resolve(), Theme::dark());
/// ```
#[derive(Debug, Clone)]
pub struct AdaptiveTheme {
    light: Theme,
    dark: Theme,
}

impl AdaptiveTheme {
    /// Creates an adaptive theme with separate light and dark variants.
    pub fn new(light: Theme, dark: Theme) -> Self {
        Self { light, dark }
    }

    /// Resolves to the variant matching the current color mode.
    pub fn resolve(&self) -> &Theme {
        match detect_color_mode() {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }
}

impl Default for AdaptiveTheme {
    /// Pairs the stock light and dark themes.
    fn default() -> Self {
        Self::new(Theme::light(), Theme::dark())
    }
}

type ModeDetector = fn() -> ColorMode;

static MODE_DETECTOR: Lazy<Mutex<ModeDetector>> = Lazy::new(|| Mutex::new(os_mode_detector));

/// Overrides the detector used to determine the user's color mode.
///
/// Useful in tests or to force a specific mode regardless of OS settings.
pub fn set_color_mode_detector(detector: ModeDetector) {
    let mut guard = MODE_DETECTOR.lock().unwrap();
    *guard = detector;
}

/// The current color mode, as reported by the active detector.
pub fn detect_color_mode() -> ColorMode {
    let detector = MODE_DETECTOR.lock().unwrap();
    (*detector)()
}

fn os_mode_detector() -> ColorMode {
    match detect_os_mode() {
        OsMode::Dark => ColorMode::Dark,
        OsMode::Light => ColorMode::Light,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_resolve_follows_detector() {
        let adaptive = AdaptiveTheme::default();

        set_color_mode_detector(|| ColorMode::Dark);
        assert_eq!(*adaptive.resolve(), Theme::dark());

        set_color_mode_detector(|| ColorMode::Light);
        assert_eq!(*adaptive.resolve(), Theme::light());

        // Reset to default for other tests
        set_color_mode_detector(|| ColorMode::Dark);
    }

    #[test]
    #[serial]
    fn test_custom_pair_resolves_custom_theme() {
        let mut light = Theme::light();
        light.hover = crate::Color::rgb(0x12, 0x34, 0x56);
        let adaptive = AdaptiveTheme::new(light.clone(), Theme::dark());

        set_color_mode_detector(|| ColorMode::Light);
        assert_eq!(adaptive.resolve().hover, light.hover);

        set_color_mode_detector(|| ColorMode::Dark);
    }
}
