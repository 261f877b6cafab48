use crate::error::{BumperError, Result};
use std::fmt;
use std::str::FromStr;

/// Number of components in a normalized version.
pub const VERSION_COMPONENTS: usize = 3;

/// Semantic version representation
///
/// Components are signed 32-bit integers, matching what the version text in
/// package metadata may legally contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: i32,
    pub minor: i32,
    pub patch: i32,
}

impl Version {
    /// Create a new version
    pub fn new(major: i32, minor: i32, patch: i32) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version, normalizing it to exactly three components.
    ///
    /// Missing trailing components are filled with `0` and anything past the
    /// third component is dropped before parsing:
    ///
    /// ```
    /// # use ncs_pkg_bumper::domain::Version;
    /// assert_eq!(Version::parse("1").unwrap(), Version::new(1, 0, 0));
    /// assert_eq!(Version::parse("1.2.3.4").unwrap(), Version::new(1, 2, 3));
    /// assert!(Version::parse("1.x.0").is_err());
    /// ```
    pub fn parse(source: &str) -> Result<Self> {
        let parts = normalize_components(source);

        let mut values = [0i32; VERSION_COMPONENTS];
        for (value, part) in values.iter_mut().zip(&parts) {
            *value = part.parse::<i32>().map_err(|e| {
                BumperError::version(format!(
                    "could not parse the version '{}': component '{}' is not numeric ({})",
                    source, part, e
                ))
            })?;
        }

        Ok(Version::new(values[0], values[1], values[2]))
    }

    /// Bump version according to bump type
    ///
    /// Fails only when the incremented component would leave the 32-bit range.
    pub fn bump(&self, bump_type: VersionBump) -> Result<Self> {
        let bumped = match bump_type {
            VersionBump::Major => Version {
                major: increment(self.major, "major")?,
                minor: 0,
                patch: 0,
            },
            VersionBump::Minor => Version {
                major: self.major,
                minor: increment(self.minor, "minor")?,
                patch: 0,
            },
            VersionBump::Patch => Version {
                major: self.major,
                minor: self.minor,
                patch: increment(self.patch, "patch")?,
            },
        };
        Ok(bumped)
    }
}

fn increment(value: i32, component: &str) -> Result<i32> {
    value.checked_add(1).ok_or_else(|| {
        BumperError::version(format!(
            "{} component {} cannot be incremented without overflow",
            component, value
        ))
    })
}

/// Splits `source` on `.` and pads or truncates to three components.
pub fn normalize_components(source: &str) -> Vec<&str> {
    let mut parts: Vec<&str> = source.split('.').collect();
    parts.resize(VERSION_COMPONENTS, "0");
    parts
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = BumperError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

/// Version bump type decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}

impl VersionBump {
    pub fn as_str(&self) -> &'static str {
        match self {
            VersionBump::Major => "major",
            VersionBump::Minor => "minor",
            VersionBump::Patch => "patch",
        }
    }
}

impl fmt::Display for VersionBump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VersionBump {
    type Err = BumperError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "major" => Ok(VersionBump::Major),
            "minor" => Ok(VersionBump::Minor),
            "patch" => Ok(VersionBump::Patch),
            _ => Err(BumperError::usage("'-m' flag has an unknown value")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parse() {
        let v = Version::parse("1.2.3").unwrap();
        assert_eq!(v.major, 1);
        assert_eq!(v.minor, 2);
        assert_eq!(v.patch, 3);
    }

    #[test]
    fn test_version_parse_pads_missing_components() {
        assert_eq!(Version::parse("1").unwrap(), Version::new(1, 0, 0));
        assert_eq!(Version::parse("1.2").unwrap(), Version::new(1, 2, 0));
    }

    #[test]
    fn test_version_parse_drops_extra_components() {
        assert_eq!(Version::parse("1.2.3.4").unwrap(), Version::new(1, 2, 3));
        // Extra components are discarded before parsing, so they may be anything
        assert_eq!(
            Version::parse("1.2.3.beta.7").unwrap(),
            Version::new(1, 2, 3)
        );
    }

    #[test]
    fn test_version_parse_signed_components() {
        assert_eq!(Version::parse("-1.2.3").unwrap(), Version::new(-1, 2, 3));
        assert_eq!(Version::parse("+1.2.3").unwrap(), Version::new(1, 2, 3));
    }

    #[test]
    fn test_version_parse_invalid() {
        assert!(Version::parse("1.x.0").is_err());
        assert!(Version::parse("v1.2.3").is_err());
        assert!(Version::parse("").is_err());
        assert!(Version::parse("1..3").is_err());
        assert!(Version::parse(" 1.2.3").is_err());
        assert!(Version::parse("1.2.3-rc1").is_err());
        assert!(Version::parse("2147483648.0.0").is_err());
    }

    #[test]
    fn test_version_parse_error_names_component() {
        let err = Version::parse("1.x.0").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("'1.x.0'"), "got: {}", msg);
        assert!(msg.contains("'x'"), "got: {}", msg);
        assert!(msg.contains("not numeric"), "got: {}", msg);
    }

    #[test]
    fn test_version_bump_major() {
        let v = Version::new(1, 2, 3);
        let bumped = v.bump(VersionBump::Major).unwrap();
        assert_eq!(bumped, Version::new(2, 0, 0));
    }

    #[test]
    fn test_version_bump_minor() {
        let v = Version::new(1, 2, 3);
        let bumped = v.bump(VersionBump::Minor).unwrap();
        assert_eq!(bumped, Version::new(1, 3, 0));
    }

    #[test]
    fn test_version_bump_patch() {
        let v = Version::new(1, 2, 3);
        let bumped = v.bump(VersionBump::Patch).unwrap();
        assert_eq!(bumped, Version::new(1, 2, 4));
    }

    #[test]
    fn test_version_bump_overflow() {
        let v = Version::new(i32::MAX, 0, 0);
        assert!(v.bump(VersionBump::Major).is_err());
        // Lower components reset, so only the incremented one matters
        let v = Version::new(1, i32::MAX, i32::MAX);
        assert_eq!(v.bump(VersionBump::Major).unwrap(), Version::new(2, 0, 0));
        assert!(v.bump(VersionBump::Patch).is_err());
    }

    #[test]
    fn test_version_display() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.to_string(), "1.2.3");
    }

    #[test]
    fn test_normalize_components() {
        assert_eq!(normalize_components("7"), vec!["7", "0", "0"]);
        assert_eq!(normalize_components("1.2.3.4"), vec!["1", "2", "3"]);
        assert_eq!(normalize_components(""), vec!["", "0", "0"]);
    }

    #[test]
    fn test_version_bump_from_str() {
        assert_eq!("major".parse::<VersionBump>().unwrap(), VersionBump::Major);
        assert_eq!("minor".parse::<VersionBump>().unwrap(), VersionBump::Minor);
        assert_eq!("patch".parse::<VersionBump>().unwrap(), VersionBump::Patch);
        assert!("Major".parse::<VersionBump>().is_err());
        assert!("build".parse::<VersionBump>().is_err());
        assert!("".parse::<VersionBump>().is_err());
    }

    #[test]
    fn test_version_bump_display_round_trips() {
        for bump in [VersionBump::Major, VersionBump::Minor, VersionBump::Patch] {
            assert_eq!(bump.to_string().parse::<VersionBump>().unwrap(), bump);
        }
    }
}
