//! Display themes and theme selection.
//!
//! This module provides:
//!
//! - [`Theme`]: The light or dark display mode a favicon belongs to
//! - [`ThemeChoice`]: Which themes to emit when rendering link tags
//! - [`detect_theme`] / [`set_theme_detector`]: OS color mode detection
//!   with an overridable detector

mod choice;
mod detect;
#[allow(clippy::module_inception)]
mod theme;

pub use choice::ThemeChoice;
pub use detect::{detect_theme, set_theme_detector};
pub use theme::Theme;
