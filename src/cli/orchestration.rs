//! Bump workflow orchestration
//!
//! Keeps the read/modify/write sequence out of main.rs: the command line is
//! turned into an immutable [`BumpRequest`] once, and [`run_bump_workflow`]
//! works only from that request and the loaded [`Config`].

use std::path::PathBuf;

use tracing::{debug, info};

use crate::boundary::NormalizationWarning;
use crate::config::Config;
use crate::domain::VersionBump;
use crate::error::{BumperError, Result};
use crate::metadata::{file, MetadataDocument};
use crate::version::bump_version;

/// Raw arguments for the bump workflow
///
/// Mirrors the CLI Args without depending on clap, so the workflow can be
/// driven programmatically.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BumpWorkflowArgs {
    /// Metadata file or directory containing it
    pub path: Option<PathBuf>,

    /// Bump mode as typed by the user
    pub mode: Option<String>,

    /// Compute the new version without writing it
    pub dry_run: bool,
}

/// Validated, immutable input of one bump run
#[derive(Debug, Clone, PartialEq)]
pub struct BumpRequest {
    pub metadata_path: PathBuf,
    pub bump: VersionBump,
    pub dry_run: bool,
}

impl BumpRequest {
    /// Validate raw arguments.
    ///
    /// The path is checked before the mode, so a bad `-p` is reported even
    /// when `-m` is also wrong.
    pub fn from_args(args: &BumpWorkflowArgs, config: &Config) -> Result<Self> {
        let metadata_path = file::resolve_metadata_path(args.path.as_deref(), &config.file_name)?;

        let bump = match args.mode.as_deref() {
            None | Some("") => return Err(BumperError::usage("'-m' arg is missing")),
            Some(mode) => mode.parse::<VersionBump>()?,
        };

        Ok(BumpRequest {
            metadata_path,
            bump,
            dry_run: args.dry_run,
        })
    }
}

/// Result of a successful bump workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// Text of the package name element
    pub package_name: String,

    /// Version text as it was in the file
    pub current_version: String,

    /// Version text after the bump
    pub new_version: String,

    /// The metadata file operated on
    pub metadata_path: PathBuf,

    /// Whether the file was rewritten
    pub written: bool,

    /// Non-fatal notices about the current version text
    pub warnings: Vec<NormalizationWarning>,
}

/// Main bump workflow
///
/// 1. Load and parse the metadata document
/// 2. Locate the package name and version elements
/// 3. Bump the version text
/// 4. Replace the version text and persist the document (unless dry run)
///
/// Nothing is written unless every earlier step succeeded.
pub fn run_bump_workflow(request: &BumpRequest, config: &Config) -> Result<WorkflowResult> {
    let name_path = config.name_path()?;
    let version_path = config.version_path()?;

    info!(path = %request.metadata_path.display(), bump = %request.bump, "bumping package version");

    let contents = file::load(&request.metadata_path)?;
    let mut document = MetadataDocument::parse(contents)?;

    let package_name = document.require(&name_path)?.text().to_string();
    let version_element = document.require(&version_path)?;
    let current_version = version_element.text().to_string();
    debug!(%package_name, %current_version, "found package metadata");

    let new_version = bump_version(&current_version, request.bump)?;
    let warnings: Vec<NormalizationWarning> =
        NormalizationWarning::detect(&current_version).into_iter().collect();

    document.set_text(version_element, &new_version);

    let written = if request.dry_run {
        info!("dry run, leaving metadata file untouched");
        false
    } else {
        file::persist(&request.metadata_path, document.as_str())?;
        info!(%new_version, "metadata file updated");
        true
    };

    Ok(WorkflowResult {
        package_name,
        current_version,
        new_version,
        metadata_path: request.metadata_path.clone(),
        written,
        warnings,
    })
}
