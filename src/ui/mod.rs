//! User interface module - console output for a bump run.

pub mod formatter;

pub use formatter::{
    display_dry_run, display_error, display_package, display_versions, display_warning,
};
