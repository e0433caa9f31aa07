//! Version string parsing

use lazy_static::lazy_static;
use regex::Regex;
use std::str::FromStr;
use thiserror::Error;

use crate::increment::DEFAULT_PRE_RELEASE;
use crate::Version;

/// Error type for version parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionParserError {
    #[error("Invalid version string \"{0}\"")]
    InvalidVersion(String),
    #[error("Invalid operator \"{0}\"")]
    InvalidOperator(String),
}

impl VersionParserError {
    /// The text that failed to parse
    pub fn input(&self) -> &str {
        match self {
            VersionParserError::InvalidVersion(s) | VersionParserError::InvalidOperator(s) => s,
        }
    }
}

lazy_static! {
    // A pre-release identifier: numeric without leading zero, or alphanumeric with at least one non-digit
    static ref IDENTIFIER: &'static str = r"(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*)";

    static ref VERSION_RE: Regex = Regex::new(&format!(
        r"^(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)(?:-({id}(?:\.{id})*))?(?:\+([0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$",
        id = *IDENTIFIER
    )).unwrap();
}

/// Parser turning `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]` strings into [`Version`]s.
///
/// The whole input must match the grammar; nothing is trimmed. The
/// pre-release tail is split on its last dot: a numeric last identifier
/// becomes the counter and the rest the pre-id, otherwise the whole tail is
/// the pre-id and the counter is [`DEFAULT_PRE_RELEASE`]. A tail made of a
/// single number is a counter with no pre-id.
#[derive(Debug, Default, Clone, Copy)]
pub struct VersionParser;

impl VersionParser {
    pub fn new() -> Self {
        VersionParser
    }

    /// Parse a version string
    pub fn parse(&self, version: &str) -> Result<Version, VersionParserError> {
        let caps = match VERSION_RE.captures(version) {
            Some(caps) => caps,
            None => {
                log::trace!("Rejected version string {:?}", version);
                return Err(VersionParserError::InvalidVersion(version.to_string()));
            }
        };

        let number = |index: usize| -> Result<u64, VersionParserError> {
            caps[index]
                .parse::<u64>()
                .map_err(|_| VersionParserError::InvalidVersion(version.to_string()))
        };
        let major = number(1)?;
        let minor = number(2)?;
        let patch = number(3)?;

        if let Some(build) = caps.get(5) {
            log::trace!("Discarding build metadata {:?} of {:?}", build.as_str(), version);
        }

        let (pre_id, pre_release) = match caps.get(4) {
            Some(tail) => split_pre_release(tail.as_str()),
            None => (None, None),
        };

        Ok(Version::from_parts(major, minor, patch, pre_id, pre_release))
    }

    /// Check if a version string matches the grammar
    pub fn is_valid(&self, version: &str) -> bool {
        self.parse(version).is_ok()
    }
}

/// Split a grammar-checked pre-release tail into pre-id and counter
fn split_pre_release(tail: &str) -> (Option<String>, Option<u64>) {
    match tail.rsplit_once('.') {
        None => match tail.parse::<u64>() {
            Ok(n) => (None, Some(n)),
            Err(_) => (Some(tail.to_string()), Some(DEFAULT_PRE_RELEASE)),
        },
        Some((head, last)) => match last.parse::<u64>() {
            Ok(n) => (Some(head.to_string()), Some(n)),
            Err(_) => (Some(tail.to_string()), Some(DEFAULT_PRE_RELEASE)),
        },
    }
}

impl Version {
    /// Parse a version string, see [`VersionParser`]
    pub fn parse(version: &str) -> Result<Self, VersionParserError> {
        VersionParser::new().parse(version)
    }
}

impl FromStr for Version {
    type Err = VersionParserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = VersionParserError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Version::parse(s)
    }
}
