//! The link tag view model.

use serde::Serialize;

use crate::descriptor::FaviconDescriptor;
use crate::set::FaviconSet;
use crate::theme::{Theme, ThemeChoice};

/// Knobs for how link tags are built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkOptions {
    /// Emit a `type` attribute when the MIME type is known.
    pub include_type: bool,
    /// Emit `media` even when only one theme is selected.
    pub media_for_single_theme: bool,
}

impl Default for LinkOptions {
    fn default() -> Self {
        Self {
            include_type: true,
            media_for_single_theme: true,
        }
    }
}

/// One `<link rel="icon">` tag, ready for a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkTag {
    pub href: String,
    pub sizes: String,
    pub mime: Option<&'static str>,
    pub media: Option<&'static str>,
    pub theme: Theme,
}

impl LinkTag {
    fn from_descriptor(d: &FaviconDescriptor, options: &LinkOptions, with_media: bool) -> Self {
        Self {
            href: d.src().to_string(),
            sizes: d.sizes().to_string(),
            mime: if options.include_type {
                d.mime_type()
            } else {
                None
            },
            media: with_media.then(|| d.theme().media_query()),
            theme: d.theme(),
        }
    }
}

/// Builds link tags for the themes selected by `choice`, in set order.
///
/// # Example
///
/// ```rust
/// use favicons::{link_tags, FaviconSet, LinkOptions, Theme, ThemeChoice};
///
/// let set = FaviconSet::defaults();
/// let tags = link_tags(&set, ThemeChoice::Fixed(Theme::Light), &LinkOptions::default());
/// assert_eq!(tags.len(), 6);
/// assert_eq!(tags[5].sizes, "any");
/// ```
pub fn link_tags(set: &FaviconSet, choice: ThemeChoice, options: &LinkOptions) -> Vec<LinkTag> {
    let themes = choice.resolve();
    let with_media = choice.is_all() || options.media_for_single_theme;

    set.iter()
        .filter(|d| themes.contains(&d.theme()))
        .map(|d| LinkTag::from_descriptor(d, options, with_media))
        .collect()
}
