//! Shared-dependency contract.
//!
//! Federated modules bring their own dependencies, except for the ones
//! declared shared with the host. A `singleton` entry (the rendering
//! runtime) must resolve to exactly one loaded instance, so every container
//! declaring it must agree on a compatible version.

use crate::error::FederationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A parsed `major.minor.patch` version.
///
/// Missing segments default to zero, so "0.7" parses as 0.7.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Caret compatibility, the way a lockfile would resolve it: same
    /// major, and while major is 0, same minor as well.
    pub fn is_compatible_with(&self, other: &Version) -> bool {
        if self.major != other.major {
            return false;
        }
        self.major != 0 || self.minor == other.minor
    }
}

impl FromStr for Version {
    type Err = FederationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments: Vec<&str> = s.split('.').collect();
        if segments.len() > 3 {
            return Err(FederationError::InvalidVersion(s.to_string()));
        }

        let parse = |segment: &str| {
            segment
                .parse::<u64>()
                .map_err(|_| FederationError::InvalidVersion(s.to_string()))
        };

        let major = parse(segments.first().copied().unwrap_or_default())?;
        let minor = segments.get(1).map(|seg| parse(seg)).transpose()?.unwrap_or(0);
        let patch = segments.get(2).map(|seg| parse(seg)).transpose()?.unwrap_or(0);
        Ok(Version { major, minor, patch })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// One entry in a container's shared-dependency declaration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SharedDependency {
    /// Crate name (e.g., "leptos").
    pub name: String,
    /// Version the container was built against.
    pub version: String,
    /// Whether exactly one loaded instance is required.
    pub singleton: bool,
}

impl SharedDependency {
    /// Declare a shared dependency.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            singleton: false,
        }
    }

    /// Declare a singleton shared dependency.
    pub fn singleton(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            singleton: true,
            ..Self::new(name, version)
        }
    }

    /// Parse the declared version.
    pub fn parsed_version(&self) -> Result<Version, FederationError> {
        self.version.parse()
    }
}
