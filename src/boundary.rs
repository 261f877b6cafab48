use std::fmt;

use crate::domain::version::{normalize_components, VERSION_COMPONENTS};

/// Warnings raised when the version text is not already `major.minor.patch`.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum NormalizationWarning {
    /// Fewer than three components; the rest were filled with `0`
    Padded { original: String, normalized: String },
    /// More than three components; the trailing ones were dropped
    Truncated { original: String, discarded: String },
}

impl NormalizationWarning {
    /// Inspect raw version text and report how normalization will change it.
    pub fn detect(original: &str) -> Option<Self> {
        let count = original.split('.').count();
        if count < VERSION_COMPONENTS {
            Some(NormalizationWarning::Padded {
                original: original.to_string(),
                normalized: normalize_components(original).join("."),
            })
        } else if count > VERSION_COMPONENTS {
            let discarded: Vec<&str> = original.split('.').skip(VERSION_COMPONENTS).collect();
            Some(NormalizationWarning::Truncated {
                original: original.to_string(),
                discarded: discarded.join("."),
            })
        } else {
            None
        }
    }
}

impl fmt::Display for NormalizationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizationWarning::Padded {
                original,
                normalized,
            } => {
                write!(
                    f,
                    "Version '{}' has fewer than three components, treating it as '{}'",
                    original, normalized
                )
            }
            NormalizationWarning::Truncated {
                original,
                discarded,
            } => {
                write!(
                    f,
                    "Version '{}' has more than three components, discarding '{}'",
                    original, discarded
                )
            }
        }
    }
}
