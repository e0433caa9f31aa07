//! The semantic version value type

use std::fmt;
use thiserror::Error;

/// Error returned by [`Version::with_pre_release`] when the arguments break
/// the `pre_id` implies `pre_release` contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("Illegal arguments: {major}, {minor}, {patch}, pre-id \"{pre_id}\" given without a pre-release number")]
    MissingPreRelease {
        major: u64,
        minor: u64,
        patch: u64,
        pre_id: String,
    },
}

/// An immutable semantic version.
///
/// Rendered as `MAJOR.MINOR.PATCH`, followed by `-PREID.PRERELEASE` when a
/// pre-release identifier is set, or `-PRERELEASE` when only the counter is.
/// Build metadata is never stored.
///
/// Ordering follows semantic versioning precedence, see [`crate::Comparator`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    pre_id: Option<String>,
    pre_release: Option<u64>,
}

impl Version {
    /// Create a release version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            pre_id: None,
            pre_release: None,
        }
    }

    /// Create a version with optional pre-release data.
    ///
    /// A `pre_release` counter may be given alone (`1.2.3-5`), but a
    /// `pre_id` always needs a counter next to it.
    pub fn with_pre_release(
        major: u64,
        minor: u64,
        patch: u64,
        pre_id: Option<&str>,
        pre_release: Option<u64>,
    ) -> Result<Self, VersionError> {
        if let (Some(pre_id), None) = (pre_id, pre_release) {
            return Err(VersionError::MissingPreRelease {
                major,
                minor,
                patch,
                pre_id: pre_id.to_string(),
            });
        }

        Ok(Version {
            major,
            minor,
            patch,
            pre_id: pre_id.map(str::to_string),
            pre_release,
        })
    }

    /// Construct without checking the pre-release contract. Callers must
    /// guarantee `pre_release.is_some()` whenever `pre_id.is_some()`.
    pub(crate) fn from_parts(
        major: u64,
        minor: u64,
        patch: u64,
        pre_id: Option<String>,
        pre_release: Option<u64>,
    ) -> Self {
        debug_assert!(pre_id.is_none() || pre_release.is_some());
        Version {
            major,
            minor,
            patch,
            pre_id,
            pre_release,
        }
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// The pre-release identifier, possibly holding several dot-joined
    /// identifiers such as `alpha.beta`
    pub fn pre_id(&self) -> Option<&str> {
        self.pre_id.as_deref()
    }

    /// The numeric pre-release counter
    pub fn pre_release(&self) -> Option<u64> {
        self.pre_release
    }

    /// Check if this version carries any pre-release data
    pub fn is_pre_release(&self) -> bool {
        self.pre_id.is_some() || self.pre_release.is_some()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        match (&self.pre_id, self.pre_release) {
            (Some(pre_id), Some(pre_release)) => write!(f, "-{}.{}", pre_id, pre_release),
            (None, Some(pre_release)) => write!(f, "-{}", pre_release),
            // Unreachable through the public constructors
            (Some(pre_id), None) => write!(f, "-{}", pre_id),
            (None, None) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor() {
        assert_eq!(Version::new(1, 2, 3).to_string(), "1.2.3");
        assert_eq!(
            Version::with_pre_release(1, 2, 3, None, Some(1)).unwrap().to_string(),
            "1.2.3-1"
        );
        assert_eq!(
            Version::with_pre_release(1, 2, 3, Some("RC"), Some(1)).unwrap().to_string(),
            "1.2.3-RC.1"
        );
        assert_eq!(
            Version::with_pre_release(1, 2, 3, None, None).unwrap().to_string(),
            "1.2.3"
        );
    }

    #[test]
    fn test_constructor_rejects_pre_id_without_number() {
        let err = Version::with_pre_release(1, 2, 3, Some("RC"), None).unwrap_err();
        assert_eq!(
            err,
            VersionError::MissingPreRelease {
                major: 1,
                minor: 2,
                patch: 3,
                pre_id: "RC".to_string(),
            }
        );
        assert!(err.to_string().contains("RC"));
    }

    #[test]
    fn test_accessors() {
        let version = Version::with_pre_release(1, 2, 3, Some("RC"), Some(4)).unwrap();
        assert_eq!(version.major(), 1);
        assert_eq!(version.minor(), 2);
        assert_eq!(version.patch(), 3);
        assert_eq!(version.pre_id(), Some("RC"));
        assert_eq!(version.pre_release(), Some(4));
        assert!(version.is_pre_release());

        let release = Version::new(1, 2, 3);
        assert_eq!(release.pre_id(), None);
        assert_eq!(release.pre_release(), None);
        assert!(!release.is_pre_release());
    }

    #[test]
    fn test_numeric_only_pre_release_is_pre_release() {
        let version = Version::with_pre_release(5, 5, 0, None, Some(5)).unwrap();
        assert!(version.is_pre_release());
        assert_eq!(version.pre_id(), None);
    }

    #[test]
    fn test_equality_and_hash() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        fn hash_of(version: &Version) -> u64 {
            let mut hasher = DefaultHasher::new();
            version.hash(&mut hasher);
            hasher.finish()
        }

        let a = Version::with_pre_release(1, 2, 3, Some("RC"), Some(4)).unwrap();
        let b = Version::with_pre_release(1, 2, 3, Some("RC"), Some(4)).unwrap();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        assert_ne!(a, Version::new(1, 2, 3));
        assert_ne!(a, Version::with_pre_release(1, 2, 3, Some("RC"), Some(5)).unwrap());
        assert_ne!(a, Version::with_pre_release(1, 2, 3, None, Some(4)).unwrap());
    }
}
