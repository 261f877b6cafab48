//! Domain logic - pure version rules independent of file handling

pub mod version;

pub use version::{Version, VersionBump};
