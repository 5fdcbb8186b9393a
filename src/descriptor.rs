//! Favicon descriptor records and the sizes token.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FaviconError;
use crate::theme::Theme;

/// The `sizes` attribute of a favicon.
///
/// Either concrete pixel dimensions (`WxH`) or the `any` sentinel used for
/// resolution-independent formats such as `.ico`.
///
/// # Example
///
/// ```rust
/// use favicons::Sizes;
///
/// let sizes: Sizes = "192x192".parse().unwrap();
/// assert_eq!(sizes.dimensions(), Some((192, 192)));
/// assert_eq!("ANY".parse::<Sizes>().unwrap(), Sizes::Any);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Sizes {
    /// Format-driven icon that scales to any size.
    Any,
    /// Fixed pixel dimensions.
    Dimensions { width: u32, height: u32 },
}

impl Sizes {
    /// Creates a dimensions token.
    pub const fn new(width: u32, height: u32) -> Self {
        Sizes::Dimensions { width, height }
    }

    /// Creates a square dimensions token, e.g. `square(32)` is `32x32`.
    pub const fn square(side: u32) -> Self {
        Sizes::new(side, side)
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Sizes::Any)
    }

    /// Returns `(width, height)`, or `None` for [`Sizes::Any`].
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        match *self {
            Sizes::Any => None,
            Sizes::Dimensions { width, height } => Some((width, height)),
        }
    }
}

impl fmt::Display for Sizes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sizes::Any => f.write_str("any"),
            Sizes::Dimensions { width, height } => write!(f, "{}x{}", width, height),
        }
    }
}

impl FromStr for Sizes {
    type Err = FaviconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FaviconError::InvalidSizes {
            value: s.to_string(),
        };

        if s.eq_ignore_ascii_case("any") {
            return Ok(Sizes::Any);
        }

        let (width, height) = s.split_once(['x', 'X']).ok_or_else(invalid)?;
        let width = parse_dimension(width).ok_or_else(invalid)?;
        let height = parse_dimension(height).ok_or_else(invalid)?;
        Ok(Sizes::new(width, height))
    }
}

// Digits only: `u32::from_str` would also accept a leading `+`.
fn parse_dimension(part: &str) -> Option<u32> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok().filter(|&n| n > 0)
}

impl TryFrom<String> for Sizes {
    type Error = FaviconError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Sizes> for String {
    fn from(sizes: Sizes) -> Self {
        sizes.to_string()
    }
}

/// One favicon: where it lives, which theme it serves, and its size.
///
/// Descriptors are immutable. The `src` is a `Cow` so the built-in table can be
/// a `static` while descriptors loaded from config own their paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FaviconDescriptor {
    src: Cow<'static, str>,
    theme: Theme,
    sizes: Sizes,
}

impl FaviconDescriptor {
    /// Creates a descriptor pointing at a static path.
    pub const fn new(src: &'static str, theme: Theme, sizes: Sizes) -> Self {
        Self {
            src: Cow::Borrowed(src),
            theme,
            sizes,
        }
    }

    /// Creates a descriptor with an owned path.
    pub fn owned(src: impl Into<String>, theme: Theme, sizes: Sizes) -> Self {
        Self {
            src: Cow::Owned(src.into()),
            theme,
            sizes,
        }
    }

    /// Path to the icon asset, used as the link's `href`.
    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn sizes(&self) -> Sizes {
        self.sizes
    }

    /// Best-effort MIME type derived from the file extension of `src`.
    ///
    /// ```rust
    /// use favicons::{FaviconDescriptor, Sizes, Theme};
    ///
    /// let ico = FaviconDescriptor::new("/favicon/favicon.ico", Theme::Light, Sizes::Any);
    /// assert_eq!(ico.mime_type(), Some("image/x-icon"));
    /// ```
    pub fn mime_type(&self) -> Option<&'static str> {
        let path = self.src.split(['?', '#']).next().unwrap_or_default();
        let file = path.rsplit('/').next().unwrap_or(path);
        let (_, ext) = file.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some("image/png"),
            "ico" => Some("image/x-icon"),
            "svg" => Some("image/svg+xml"),
            "webp" => Some("image/webp"),
            "gif" => Some("image/gif"),
            "jpg" | "jpeg" => Some("image/jpeg"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_sizes_parse_dimensions() {
        assert_eq!("32x32".parse::<Sizes>().unwrap(), Sizes::square(32));
        assert_eq!("180X120".parse::<Sizes>().unwrap(), Sizes::new(180, 120));
    }

    #[test]
    fn test_sizes_parse_any() {
        assert_eq!("any".parse::<Sizes>().unwrap(), Sizes::Any);
        assert_eq!("Any".parse::<Sizes>().unwrap(), Sizes::Any);
    }

    #[test]
    fn test_sizes_rejects_malformed() {
        for bad in ["", "x", "32", "32x", "x32", "0x16", "16x0", "+16x16", "16x16x16", "16 x 16", " 16x16", "16x16 ", " any", "big"] {
            assert!(bad.parse::<Sizes>().is_err(), "{:?} should not parse", bad);
        }
    }

    #[test]
    fn test_sizes_display_normalizes_separator() {
        let sizes: Sizes = "64X48".parse().unwrap();
        assert_eq!(sizes.to_string(), "64x48");
    }

    #[test]
    fn test_sizes_serde_as_string() {
        assert_eq!(serde_json::to_string(&Sizes::square(16)).unwrap(), "\"16x16\"");
        assert_eq!(serde_json::to_string(&Sizes::Any).unwrap(), "\"any\"");
        assert!(serde_json::from_str::<Sizes>("\"nope\"").is_err());
    }

    #[test]
    fn test_sizes_ordering_puts_any_first() {
        assert!(Sizes::Any < Sizes::square(16));
        assert!(Sizes::square(16) < Sizes::square(32));
    }

    #[test]
    fn test_descriptor_serde_shape() {
        let d = FaviconDescriptor::new("/favicon/favicon-16x16.png", Theme::Dark, Sizes::square(16));
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "src": "/favicon/favicon-16x16.png",
                "theme": "dark",
                "sizes": "16x16",
            })
        );
        let back: FaviconDescriptor = serde_json::from_value(json).unwrap();
        assert_eq!(back, d);
    }

    #[test]
    fn test_borrowed_and_owned_descriptors_compare_equal() {
        let a = FaviconDescriptor::new("/favicon/a.png", Theme::Light, Sizes::Any);
        let b = FaviconDescriptor::owned(String::from("/favicon/a.png"), Theme::Light, Sizes::Any);
        assert_eq!(a, b);
    }

    #[test]
    fn test_mime_type_by_extension() {
        let mime = |src: &'static str| FaviconDescriptor::new(src, Theme::Light, Sizes::Any).mime_type();
        assert_eq!(mime("/favicon/apple-touch-icon.png"), Some("image/png"));
        assert_eq!(mime("/favicon/ICON.SVG"), Some("image/svg+xml"));
        assert_eq!(mime("/favicon/favicon.ico?v=2"), Some("image/x-icon"));
        assert_eq!(mime("/favicon.d/manifest"), None);
        assert_eq!(mime("/favicon/icon.bmp"), None);
    }

    proptest! {
        #[test]
        fn prop_sizes_accepts_any_positive_dimensions(w in 1u32.., h in 1u32..) {
            let parsed: Sizes = format!("{}x{}", w, h).parse().unwrap();
            prop_assert_eq!(parsed.dimensions(), Some((w, h)));
        }

        #[test]
        fn prop_sizes_display_matches_token_pattern(w in 1u32..10_000, h in 1u32..10_000) {
            let text = Sizes::new(w, h).to_string();
            let (a, b) = text.split_once('x').unwrap();
            prop_assert!(a.bytes().all(|c| c.is_ascii_digit()));
            prop_assert!(b.bytes().all(|c| c.is_ascii_digit()));
        }
    }
}
