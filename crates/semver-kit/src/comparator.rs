//! Version precedence
//!
//! Versions order by major, minor and patch numerically. With those equal a
//! release outranks every pre-release. Two pre-releases then order by pre-id
//! (absent first, otherwise by byte order) and finally by counter, so
//! `1.0.0-A.9 < 1.0.0-M.1` whatever the counters.

use std::cmp::Ordering;

use crate::{Operator, Version};

/// Where a version sits relative to its release.
///
/// Variant order matters: any pre-release sorts before the release.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Stage<'a> {
    PreRelease { pre_id: Option<&'a str>, number: u64 },
    Release,
}

impl Version {
    fn stage(&self) -> Stage<'_> {
        match (self.pre_id(), self.pre_release()) {
            (None, None) => Stage::Release,
            (pre_id, number) => Stage::PreRelease {
                pre_id,
                number: number.unwrap_or_default(),
            },
        }
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major()
            .cmp(&other.major())
            .then_with(|| self.minor().cmp(&other.minor()))
            .then_with(|| self.patch().cmp(&other.patch()))
            .then_with(|| self.stage().cmp(&other.stage()))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Comparator for comparing versions
pub struct Comparator;

impl Comparator {
    /// Check if version1 > version2
    pub fn greater_than(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, Operator::GreaterThan, version2)
    }

    /// Check if version1 >= version2
    pub fn greater_than_or_equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, Operator::GreaterThanOrEqual, version2)
    }

    /// Check if version1 < version2
    pub fn less_than(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, Operator::LessThan, version2)
    }

    /// Check if version1 <= version2
    pub fn less_than_or_equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, Operator::LessThanOrEqual, version2)
    }

    /// Check if version1 == version2
    pub fn equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, Operator::Equal, version2)
    }

    /// Check if version1 != version2
    pub fn not_equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, Operator::NotEqual, version2)
    }

    /// Compare version1 to version2 using the given operator
    pub fn compare(version1: &Version, operator: Operator, version2: &Version) -> bool {
        operator.accepts(version1.cmp(version2))
    }
}
