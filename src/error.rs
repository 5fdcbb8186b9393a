//! Error types for parsing, loading, validating and rendering favicon sets.
//!
//! The default table never produces an error. Everything here comes from
//! user-supplied strings, configuration files or templates.

use std::fmt;
use std::path::PathBuf;

use crate::descriptor::Sizes;

/// Error returned by fallible favicon operations.
#[derive(Debug, thiserror::Error)]
pub enum FaviconError {
    /// A sizes token was neither `any` nor `WxH`.
    #[error("invalid sizes token '{value}': expected 'any' or 'WxH' (e.g. 32x32)")]
    InvalidSizes { value: String },

    /// A theme name was neither `light` nor `dark`.
    #[error("invalid theme '{value}': expected 'light' or 'dark'")]
    InvalidTheme { value: String },

    /// A configuration file could not be read or written.
    #[error("failed to access '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file extension does not map to a known format.
    #[error("unsupported favicon config format for '{}': use .yaml, .yml or .json", .path.display())]
    UnsupportedFormat { path: PathBuf },

    /// The config root is neither a list nor a map with a `favicons` key.
    #[error("favicon config must be a list of favicons or a map with a 'favicons' key")]
    MissingFavicons,

    #[error("invalid YAML favicon config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON favicon config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// A single problem found while validating a favicon set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Problem {
    /// The descriptor at `index` has an empty `src`.
    EmptySource { index: usize },
    /// The descriptor at `index` does not live under the expected prefix.
    BadPrefix {
        index: usize,
        src: String,
        prefix: String,
    },
    /// More than one dark entry claims the same sizes as a light entry.
    DuplicateCounterpart { sizes: Sizes },
    /// Light and dark themes expose different size variants.
    ParityMismatch {
        light_only: Vec<Sizes>,
        dark_only: Vec<Sizes>,
    },
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Problem::EmptySource { index } => write!(f, "entry #{} has an empty src", index),
            Problem::BadPrefix { index, src, prefix } => {
                write!(f, "entry #{} src '{}' does not start with '{}'", index, src, prefix)
            }
            Problem::DuplicateCounterpart { sizes } => {
                write!(f, "more than one dark counterpart for light sizes '{}'", sizes)
            }
            Problem::ParityMismatch {
                light_only,
                dark_only,
            } => write!(
                f,
                "light/dark size parity broken (light only: [{}], dark only: [{}])",
                join(light_only),
                join(dark_only)
            ),
        }
    }
}

fn join(sizes: &[Sizes]) -> String {
    sizes
        .iter()
        .map(Sizes::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Every problem found by [`FaviconSet::validate`](crate::FaviconSet::validate).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub problems: Vec<Problem>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "favicon set has {} problem(s):", self.problems.len())?;
        for problem in &self.problems {
            write!(f, "\n  - {}", problem)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_sizes_display() {
        let err = FaviconError::InvalidSizes {
            value: "big".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("big"));
        assert!(msg.contains("WxH"));
    }

    #[test]
    fn test_validation_error_lists_every_problem() {
        let err = ValidationError {
            problems: vec![
                Problem::EmptySource { index: 2 },
                Problem::BadPrefix {
                    index: 3,
                    src: "/icons/a.png".to_string(),
                    prefix: "/favicon/".to_string(),
                },
            ],
        };
        let msg = err.to_string();
        assert!(msg.starts_with("favicon set has 2 problem(s):"));
        assert!(msg.contains("entry #2 has an empty src"));
        assert!(msg.contains("'/icons/a.png' does not start with '/favicon/'"));
    }

    #[test]
    fn test_parity_mismatch_display() {
        let problem = Problem::ParityMismatch {
            light_only: vec![Sizes::Any, Sizes::square(16)],
            dark_only: vec![],
        };
        assert_eq!(
            problem.to_string(),
            "light/dark size parity broken (light only: [any, 16x16], dark only: [])"
        );
    }
}
