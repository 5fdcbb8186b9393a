//! OS color mode detection.

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use std::sync::Mutex;

use super::theme::Theme;

type ThemeDetector = fn() -> Theme;

static THEME_DETECTOR: Lazy<Mutex<ThemeDetector>> = Lazy::new(|| Mutex::new(os_theme_detector));

/// Overrides the detector used to decide whether the user prefers a light or dark theme.
///
/// This is useful for testing or when you want to force a specific theme
/// for [`ThemeChoice::Auto`](super::ThemeChoice::Auto).
pub fn set_theme_detector(detector: ThemeDetector) {
    let mut guard = THEME_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = detector;
}

/// Returns the theme reported by the current detector (the OS by default).
pub fn detect_theme() -> Theme {
    let detector = THEME_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    let theme = (*detector)();
    tracing::debug!(%theme, "detected color mode");
    theme
}

fn os_theme_detector() -> Theme {
    match detect_os_theme() {
        OsThemeMode::Dark => Theme::Dark,
        OsThemeMode::Light => Theme::Light,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_detector_override() {
        set_theme_detector(|| Theme::Dark);
        assert_eq!(detect_theme(), Theme::Dark);

        set_theme_detector(|| Theme::Light);
        assert_eq!(detect_theme(), Theme::Light);
    }
}
