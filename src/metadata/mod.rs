//! Package metadata file handling
//!
//! - [document::MetadataDocument]: element lookup and in-place text
//!   replacement over the original XML text
//! - [path::ElementPath]: the fixed `/root/child` paths elements are
//!   addressed by
//! - [file]: locating, loading and atomically rewriting the metadata file

pub mod document;
pub mod file;
pub mod path;

pub use document::{Element, MetadataDocument};
pub use path::ElementPath;

/// Default metadata file name looked up in a directory
pub const DEFAULT_FILE_NAME: &str = "package-meta-data.xml";

/// Default path of the package name element
pub const DEFAULT_NAME_PATH: &str = "/ncs-package/name";

/// Default path of the package version element
pub const DEFAULT_VERSION_PATH: &str = "/ncs-package/package-version";
