//! Semantic version value type
//!
//! This crate parses `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]` strings into an
//! immutable [`Version`], renders it back to canonical text, orders versions by
//! semantic versioning precedence and derives new versions through increments.
//!
//! ```
//! use semver_kit::Version;
//!
//! let rc = Version::parse("1.2.3-RC.2").unwrap();
//! assert_eq!(rc.inc_prerelease(Some("RC")).to_string(), "1.2.3-RC.3");
//! assert!(rc < Version::parse("1.2.3").unwrap());
//! ```
//!
//! With the `serde` feature, [`Version`] (de)serializes as its canonical string.

mod comparator;
mod increment;
mod operator;
mod semver;
#[cfg(feature = "serde")]
mod serde_impl;
mod version;
mod version_parser;

pub use comparator::Comparator;
pub use increment::DEFAULT_PRE_RELEASE;
pub use operator::Operator;
pub use semver::Semver;
pub use version::{Version, VersionError};
pub use version_parser::{VersionParser, VersionParserError};
