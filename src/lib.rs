pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod metadata;
pub mod ui;
pub mod version;

pub use error::{BumperError, Result};
