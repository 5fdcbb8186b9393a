//! Theme selection for rendering.

use super::detect::detect_theme;
use super::theme::Theme;

/// Which themes to emit link tags for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeChoice {
    /// Only the given theme.
    Fixed(Theme),
    /// Only the theme the OS currently reports.
    Auto,
    /// Every theme; browsers pick through each tag's media query.
    #[default]
    All,
}

impl ThemeChoice {
    /// Resolves to the concrete themes to emit, in [`Theme::ALL`] order.
    ///
    /// For [`ThemeChoice::Auto`], the current theme detector is consulted.
    pub fn resolve(&self) -> Vec<Theme> {
        match self {
            ThemeChoice::Fixed(theme) => vec![*theme],
            ThemeChoice::Auto => vec![detect_theme()],
            ThemeChoice::All => Theme::ALL.to_vec(),
        }
    }

    /// Returns `true` if this choice can select more than one theme.
    pub fn is_all(&self) -> bool {
        matches!(self, ThemeChoice::All)
    }
}

impl From<Theme> for ThemeChoice {
    fn from(theme: Theme) -> Self {
        ThemeChoice::Fixed(theme)
    }
}
