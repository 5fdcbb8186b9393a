//! The built-in favicon table.

use crate::descriptor::{FaviconDescriptor, Sizes};
use crate::set::FaviconSet;
use crate::theme::Theme;

/// The default favicons, light variants first, then dark.
///
/// Order is preserved when rendering, since browsers may use it to pick
/// between candidates. `favicon.ico` has no themed variant, so both themes
/// point at the same file.
pub static DEFAULT_FAVICONS: [FaviconDescriptor; 12] = [
    FaviconDescriptor::new(
        "/favicon/android-chrome-192x192.png",
        Theme::Light,
        Sizes::square(192),
    ),
    FaviconDescriptor::new("/favicon/apple-touch-icon.png", Theme::Light, Sizes::square(180)),
    FaviconDescriptor::new("/favicon/favicon-32x32.png", Theme::Light, Sizes::square(32)),
    FaviconDescriptor::new(
        "/favicon/android-chrome-512x512.png",
        Theme::Light,
        Sizes::square(512),
    ),
    FaviconDescriptor::new("/favicon/favicon-16x16.png", Theme::Light, Sizes::square(16)),
    FaviconDescriptor::new("/favicon/favicon.ico", Theme::Light, Sizes::Any),
    FaviconDescriptor::new(
        "/favicon/android-chrome-192x192.png",
        Theme::Dark,
        Sizes::square(192),
    ),
    FaviconDescriptor::new("/favicon/apple-touch-icon.png", Theme::Dark, Sizes::square(180)),
    FaviconDescriptor::new("/favicon/favicon-32x32.png", Theme::Dark, Sizes::square(32)),
    FaviconDescriptor::new(
        "/favicon/android-chrome-512x512.png",
        Theme::Dark,
        Sizes::square(512),
    ),
    FaviconDescriptor::new("/favicon/favicon-16x16.png", Theme::Dark, Sizes::square(16)),
    FaviconDescriptor::new("/favicon/favicon.ico", Theme::Dark, Sizes::Any),
];

/// Returns an owned copy of [`DEFAULT_FAVICONS`].
pub fn default_favicons() -> FaviconSet {
    FaviconSet::from_descriptors(DEFAULT_FAVICONS.iter().cloned())
}
