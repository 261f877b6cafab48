use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for ncs-pkg-bumper operations
#[derive(Error, Debug)]
pub enum BumperError {
    #[error("{0}")]
    Usage(String),

    #[error("Invalid path '{}': {source}", .path.display())]
    Path {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not grab '{element}' tag from meta-data.xml (expected at {path})")]
    MissingElement { element: String, path: String },

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Malformed metadata document: {0}")]
    MalformedDocument(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in ncs-pkg-bumper
pub type Result<T> = std::result::Result<T, BumperError>;

impl BumperError {
    /// Create a usage error with context
    pub fn usage(msg: impl Into<String>) -> Self {
        BumperError::Usage(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        BumperError::Version(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BumperError::Config(msg.into())
    }

    /// Create a malformed document error with context
    pub fn malformed(msg: impl Into<String>) -> Self {
        BumperError::MalformedDocument(msg.into())
    }

    /// Create a missing element error for the element at `path`
    pub fn missing_element(element: impl Into<String>, path: impl Into<String>) -> Self {
        BumperError::MissingElement {
            element: element.into(),
            path: path.into(),
        }
    }

    /// Process exit status for this error.
    ///
    /// Every failure category exits with 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            BumperError::Usage(_)
            | BumperError::Path { .. }
            | BumperError::MissingElement { .. }
            | BumperError::Version(_)
            | BumperError::MalformedDocument(_)
            | BumperError::Config(_)
            | BumperError::Io(_) => 1,
        }
    }
}

impl From<toml::de::Error> for BumperError {
    fn from(err: toml::de::Error) -> Self {
        BumperError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BumperError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_usage_error_is_bare_message() {
        let err = BumperError::usage("'-m' arg is missing");
        assert_eq!(err.to_string(), "'-m' arg is missing");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BumperError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_path_error_names_path() {
        let err = BumperError::Path {
            path: PathBuf::from("/no/such/dir"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/no/such/dir"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn test_missing_element_message() {
        let err = BumperError::missing_element("package-version", "/ncs-package/package-version");
        assert_eq!(
            err.to_string(),
            "could not grab 'package-version' tag from meta-data.xml (expected at /ncs-package/package-version)"
        );
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (BumperError::config("x"), "Configuration error"),
            (BumperError::version("x"), "Version parsing error"),
            (BumperError::malformed("x"), "Malformed metadata document"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }

    #[test]
    fn test_every_variant_exits_with_one() {
        let errors = vec![
            BumperError::usage("x"),
            BumperError::Path {
                path: PathBuf::from("x"),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "x"),
            },
            BumperError::missing_element("name", "/ncs-package/name"),
            BumperError::version("x"),
            BumperError::malformed("x"),
            BumperError::config("x"),
            BumperError::Io(std::io::Error::new(std::io::ErrorKind::Other, "x")),
        ];

        for err in errors {
            assert_eq!(err.exit_code(), 1, "unexpected exit code for {}", err);
        }
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("not = [valid").unwrap_err();
        let err: BumperError = toml_err.into();
        assert!(err.to_string().starts_with("Configuration error"));
    }
}
