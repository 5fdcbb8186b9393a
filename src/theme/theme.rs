//! The light/dark theme enum.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FaviconError;

/// The display mode a favicon is meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Every theme, light first.
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    /// Returns the lowercase name used in config files and markup.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Returns the other theme.
    pub fn opposite(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Returns the CSS media query that matches this theme.
    ///
    /// ```rust
    /// use favicons::Theme;
    ///
    /// assert_eq!(Theme::Dark.media_query(), "(prefers-color-scheme: dark)");
    /// ```
    pub fn media_query(self) -> &'static str {
        match self {
            Theme::Light => "(prefers-color-scheme: light)",
            Theme::Dark => "(prefers-color-scheme: dark)",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = FaviconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(FaviconError::InvalidTheme {
                value: s.to_string(),
            }),
        }
    }
}
