//! # Favicons - light/dark favicon tables for HTML heads
//!
//! A site usually ships the same handful of icons in several sizes, once per
//! color scheme. This crate holds that table as typed data and turns it into
//! `<link rel="icon">` tags.
//!
//! ## Core Concepts
//!
//! - [`FaviconDescriptor`]: One icon: `src` path, [`Theme`] and [`Sizes`]
//! - [`DEFAULT_FAVICONS`]: The built-in twelve-entry table (six sizes x two themes)
//! - [`FaviconSet`]: An ordered collection with theme filtering, pairing and validation
//! - [`ThemeChoice`]: Emit one fixed theme, the OS theme, or all themes with media queries
//! - [`LinkRenderer`]: Renders a set into markup through a minijinja template
//!
//! ## Quick Start
//!
//! ```rust
//! use favicons::{render_links, FaviconSet, ThemeChoice};
//!
//! let html = render_links(&FaviconSet::defaults(), ThemeChoice::All).unwrap();
//! assert_eq!(html.lines().count(), 12);
//! assert!(html.starts_with(
//!     r#"<link rel="icon" href="/favicon/android-chrome-192x192.png" sizes="192x192""#
//! ));
//! ```
//!
//! ## Custom Sets
//!
//! Sets can be built in code or loaded from YAML/JSON with [`load_set`]:
//!
//! ```rust
//! use favicons::{FaviconDescriptor, FaviconSet, Sizes, Theme, ValidationRules};
//!
//! let set = FaviconSet::new()
//!     .with(FaviconDescriptor::new("/favicon/icon.svg", Theme::Light, Sizes::Any))
//!     .with(FaviconDescriptor::new("/favicon/icon-dark.svg", Theme::Dark, Sizes::Any));
//!
//! assert!(set.validate(&ValidationRules::default()).is_ok());
//! ```

pub mod config;
mod defaults;
mod descriptor;
mod error;
pub mod render;
mod set;
pub mod theme;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::{load_set, parse_set, save_set, Format};
pub use defaults::{default_favicons, DEFAULT_FAVICONS};
pub use descriptor::{FaviconDescriptor, Sizes};
pub use error::{FaviconError, Problem, ValidationError};
pub use render::{link_tags, render_links, LinkOptions, LinkRenderer, LinkTag};
pub use set::{FaviconSet, ThemePair, ValidationRules, DEFAULT_PATH_PREFIX};
pub use theme::{detect_theme, set_theme_detector, Theme, ThemeChoice};
