//! Ordered favicon collections.
//!
//! [`FaviconSet`] keeps descriptors in insertion order and answers the
//! questions a head renderer needs: which entries belong to a theme, which
//! light and dark entries pair up, and whether the set is well formed.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::defaults::DEFAULT_FAVICONS;
use crate::descriptor::{FaviconDescriptor, Sizes};
use crate::error::{Problem, ValidationError};
use crate::theme::Theme;

/// Path prefix every default favicon lives under.
pub const DEFAULT_PATH_PREFIX: &str = "/favicon/";

/// An ordered collection of favicon descriptors.
///
/// # Example
///
/// ```rust
/// use favicons::{FaviconSet, Theme};
///
/// let set = FaviconSet::defaults();
/// let dark: Vec<_> = set.for_theme(Theme::Dark).collect();
/// assert_eq!(dark.len(), 6);
/// assert!(set.has_size_parity());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FaviconSet {
    entries: Vec<FaviconDescriptor>,
}

/// A light entry and its same-sized dark counterpart, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePair<'a> {
    pub light: &'a FaviconDescriptor,
    pub dark: Option<&'a FaviconDescriptor>,
}

/// Rules applied by [`FaviconSet::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRules {
    /// Every `src` must start with this prefix. Empty disables the check.
    pub path_prefix: String,
    /// Light and dark must offer the same size variants.
    pub require_parity: bool,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            path_prefix: DEFAULT_PATH_PREFIX.to_string(),
            require_parity: true,
        }
    }
}

impl FaviconSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set from descriptors, keeping their order.
    pub fn from_descriptors(descriptors: impl IntoIterator<Item = FaviconDescriptor>) -> Self {
        Self {
            entries: descriptors.into_iter().collect(),
        }
    }

    /// Returns an owned copy of the built-in table.
    pub fn defaults() -> Self {
        Self::from_descriptors(DEFAULT_FAVICONS.iter().cloned())
    }

    /// Appends a descriptor.
    pub fn push(&mut self, descriptor: FaviconDescriptor) {
        self.entries.push(descriptor);
    }

    /// Appends a descriptor, returning the set for chaining.
    pub fn with(mut self, descriptor: FaviconDescriptor) -> Self {
        self.push(descriptor);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FaviconDescriptor> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[FaviconDescriptor] {
        &self.entries
    }

    /// Descriptors for one theme, in insertion order.
    pub fn for_theme(&self, theme: Theme) -> impl Iterator<Item = &FaviconDescriptor> + '_ {
        self.entries.iter().filter(move |d| d.theme() == theme)
    }

    /// The distinct size variants offered for a theme.
    pub fn sizes_for(&self, theme: Theme) -> BTreeSet<Sizes> {
        self.for_theme(theme).map(FaviconDescriptor::sizes).collect()
    }

    /// Returns `true` when light and dark offer the same size variants.
    pub fn has_size_parity(&self) -> bool {
        self.sizes_for(Theme::Light) == self.sizes_for(Theme::Dark)
    }

    /// Pairs each light entry with the first unclaimed dark entry of the same sizes.
    pub fn pairs(&self) -> Vec<ThemePair<'_>> {
        let mut dark: Vec<Option<&FaviconDescriptor>> =
            self.for_theme(Theme::Dark).map(Some).collect();

        self.for_theme(Theme::Light)
            .map(|light| {
                let counterpart = dark
                    .iter_mut()
                    .find(|slot| slot.is_some_and(|d| d.sizes() == light.sizes()))
                    .and_then(Option::take);
                ThemePair {
                    light,
                    dark: counterpart,
                }
            })
            .collect()
    }

    /// Checks the set against `rules`, reporting every problem found.
    pub fn validate(&self, rules: &ValidationRules) -> Result<(), ValidationError> {
        let mut problems = Vec::new();

        for (index, d) in self.entries.iter().enumerate() {
            if d.src().is_empty() {
                problems.push(Problem::EmptySource { index });
            } else if !d.src().starts_with(&rules.path_prefix) {
                problems.push(Problem::BadPrefix {
                    index,
                    src: d.src().to_string(),
                    prefix: rules.path_prefix.clone(),
                });
            }
        }

        let light = self.sizes_for(Theme::Light);
        for sizes in &light {
            let dark_matches = self.for_theme(Theme::Dark).filter(|d| d.sizes() == *sizes).count();
            if dark_matches > 1 {
                problems.push(Problem::DuplicateCounterpart { sizes: *sizes });
            }
        }

        if rules.require_parity {
            let dark = self.sizes_for(Theme::Dark);
            if light != dark {
                problems.push(Problem::ParityMismatch {
                    light_only: light.difference(&dark).copied().collect(),
                    dark_only: dark.difference(&light).copied().collect(),
                });
            }
        }

        tracing::debug!(
            entries = self.entries.len(),
            problems = problems.len(),
            "validated favicon set"
        );

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { problems })
        }
    }
}

impl<'a> IntoIterator for &'a FaviconSet {
    type Item = &'a FaviconDescriptor;
    type IntoIter = std::slice::Iter<'a, FaviconDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<FaviconDescriptor> for FaviconSet {
    fn from_iter<I: IntoIterator<Item = FaviconDescriptor>>(iter: I) -> Self {
        Self::from_descriptors(iter)
    }
}
