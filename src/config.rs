//! Loading favicon sets from YAML or JSON files.
//!
//! A config file holds either a bare list of descriptors or a map with a
//! `favicons` key:
//!
//! ```yaml
//! favicons:
//!   - src: /favicon/favicon.ico
//!     theme: light
//!     sizes: any
//! ```
//!
//! Loaded sets are not validated; call
//! [`FaviconSet::validate`](crate::FaviconSet::validate) when that matters.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::FaviconError;
use crate::set::FaviconSet;

/// Serialization format of a favicon config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    /// Picks the format from a file extension (`.yaml`, `.yml` or `.json`).
    pub fn from_path(path: &Path) -> Option<Format> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Some(Format::Yaml),
            "json" => Some(Format::Json),
            _ => None,
        }
    }
}

#[derive(Serialize)]
struct WrappedRef<'a> {
    favicons: &'a FaviconSet,
}

/// Parses a favicon set from text.
///
/// The root shape is inspected first so that a bad entry reports its own
/// field error rather than a generic shape mismatch.
pub fn parse_set(text: &str, format: Format) -> Result<FaviconSet, FaviconError> {
    if text.trim().is_empty() {
        return Err(FaviconError::MissingFavicons);
    }
    match format {
        Format::Yaml => {
            let mut root: serde_yaml::Value = serde_yaml::from_str(text)?;
            if let Some(map) = root.as_mapping_mut() {
                root = map.remove("favicons").ok_or(FaviconError::MissingFavicons)?;
            }
            if root.is_null() {
                return Err(FaviconError::MissingFavicons);
            }
            Ok(serde_yaml::from_value(root)?)
        }
        Format::Json => {
            let mut root: serde_json::Value = serde_json::from_str(text)?;
            if let Some(map) = root.as_object_mut() {
                root = map.remove("favicons").ok_or(FaviconError::MissingFavicons)?;
            }
            if root.is_null() {
                return Err(FaviconError::MissingFavicons);
            }
            Ok(serde_json::from_value(root)?)
        }
    }
}

/// Serializes a favicon set under a `favicons` key.
pub fn to_string(set: &FaviconSet, format: Format) -> Result<String, FaviconError> {
    let wrapped = WrappedRef { favicons: set };
    Ok(match format {
        Format::Yaml => serde_yaml::to_string(&wrapped)?,
        Format::Json => serde_json::to_string_pretty(&wrapped)?,
    })
}

/// Reads a favicon set from a `.yaml`, `.yml` or `.json` file.
pub fn load_set(path: impl AsRef<Path>) -> Result<FaviconSet, FaviconError> {
    let path = path.as_ref();
    let format = Format::from_path(path).ok_or_else(|| FaviconError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let text = fs::read_to_string(path).map_err(|source| FaviconError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let set = parse_set(&text, format)?;
    tracing::debug!(path = %path.display(), entries = set.len(), "loaded favicon config");
    Ok(set)
}

/// Writes a favicon set to a `.yaml`, `.yml` or `.json` file.
pub fn save_set(set: &FaviconSet, path: impl AsRef<Path>) -> Result<(), FaviconError> {
    let path = path.as_ref();
    let format = Format::from_path(path).ok_or_else(|| FaviconError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let text = to_string(set, format)?;
    fs::write(path, text).map_err(|source| FaviconError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), entries = set.len(), "saved favicon config");
    Ok(())
}
