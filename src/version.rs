//! String-level version bumping used by the bump workflow.

use crate::domain::Version;
use crate::error::Result;

pub use crate::domain::VersionBump;

/// Bumps a version string according to the specified bump type.
///
/// The source is normalized to three components first (see [`Version::parse`]),
/// then the requested component is incremented and lower components reset:
/// - **Major**: major += 1, minor = 0, patch = 0
/// - **Minor**: minor += 1, patch = 0
/// - **Patch**: patch += 1
///
/// # Arguments
/// * `source` - Version text as found in the metadata file
/// * `bump_type` - Type of bump to apply
///
/// # Returns
/// * `Ok(String)` - The bumped version, always `major.minor.patch`
/// * `Err` - If one of the first three components is not numeric
///
/// # Example
/// ```
/// # use ncs_pkg_bumper::version::{bump_version, VersionBump};
/// assert_eq!(bump_version("2.5.9", VersionBump::Major).unwrap(), "3.0.0");
/// assert_eq!(bump_version("1.2", VersionBump::Minor).unwrap(), "1.3.0");
/// assert_eq!(bump_version("1.2.3.4", VersionBump::Patch).unwrap(), "1.2.4");
/// ```
pub fn bump_version(source: &str, bump_type: VersionBump) -> Result<String> {
    let version = Version::parse(source)?;
    Ok(version.bump(bump_type)?.to_string())
}
