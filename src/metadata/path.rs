use std::fmt;
use std::str::FromStr;

use crate::error::{BumperError, Result};

/// Absolute element path such as `/ncs-package/package-version`.
///
/// Segments are matched against element local names starting at the
/// document root, so namespace prefixes in the document are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementPath {
    segments: Vec<String>,
}

impl ElementPath {
    pub fn parse(path: &str) -> Result<Self> {
        let rest = path.strip_prefix('/').ok_or_else(|| {
            BumperError::config(format!("Element path '{}' must start with '/'", path))
        })?;

        let segments: Vec<String> = rest.split('/').map(str::to_string).collect();
        if segments.iter().any(|s| s.is_empty() || s.contains(char::is_whitespace)) {
            return Err(BumperError::config(format!(
                "Element path '{}' contains an empty or invalid segment",
                path
            )));
        }

        Ok(ElementPath { segments })
    }

    /// Local name of the addressed element.
    pub fn leaf(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// True if the stack of open element names is exactly this path.
    pub fn matches<S: AsRef<str>>(&self, open_elements: &[S]) -> bool {
        open_elements.len() == self.segments.len()
            && open_elements
                .iter()
                .zip(&self.segments)
                .all(|(open, segment)| open.as_ref() == segment)
    }
}

impl FromStr for ElementPath {
    type Err = BumperError;

    fn from_str(s: &str) -> Result<Self> {
        ElementPath::parse(s)
    }
}

impl fmt::Display for ElementPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}
