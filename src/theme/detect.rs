//! OS color-mode detection for theme selection.

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use std::sync::Mutex;

use super::Theme;

type ThemeDetector = fn() -> Theme;

static THEME_DETECTOR: Lazy<Mutex<ThemeDetector>> = Lazy::new(|| Mutex::new(os_theme_detector));

/// Overrides the detector used by [`Theme::detect`].
///
/// This is useful for testing or when a host wants to force a specific
/// color mode regardless of OS settings.
pub fn set_theme_detector(detector: fn() -> Theme) {
    let mut guard = THEME_DETECTOR.lock().unwrap();
    *guard = detector;
}

pub(crate) fn detect_theme() -> Theme {
    let detector = THEME_DETECTOR.lock().unwrap();
    (*detector)()
}

fn os_theme_detector() -> Theme {
    match detect_os_theme() {
        OsThemeMode::Dark => Theme::Dark,
        OsThemeMode::Light => Theme::Light,
    }
}
