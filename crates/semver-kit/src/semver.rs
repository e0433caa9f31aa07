//! Semver facade providing string-level version operations

use crate::{Comparator, Operator, Version, VersionParser, VersionParserError};

/// Main facade for semantic versioning operations on raw strings
pub struct Semver;

impl Semver {
    /// Check if a string is a valid semantic version
    pub fn is_valid(version: &str) -> bool {
        VersionParser::new().is_valid(version)
    }

    /// Compare two version strings with an operator such as `<` or `>=`
    pub fn compare(version1: &str, operator: &str, version2: &str) -> Result<bool, VersionParserError> {
        let parser = VersionParser::new();
        let left = parser.parse(version1)?;
        let operator: Operator = operator.parse()?;
        let right = parser.parse(version2)?;

        Ok(Comparator::compare(&left, operator, &right))
    }

    /// Sort versions in ascending order
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        let parser = VersionParser::new();

        // Parsed versions with their original index; invalid entries are dropped
        let mut parsed: Vec<(Version, usize)> = versions
            .iter()
            .enumerate()
            .filter_map(|(i, v)| match parser.parse(v) {
                Ok(version) => Some((version, i)),
                Err(err) => {
                    log::debug!("Skipping {}", err);
                    None
                }
            })
            .collect();

        // Stable, so equal versions keep their input order in both directions
        parsed.sort_by(|(a, _), (b, _)| {
            if ascending {
                a.cmp(b)
            } else {
                b.cmp(a)
            }
        });

        parsed
            .into_iter()
            .map(|(_, i)| versions[i].to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid() {
        assert!(Semver::is_valid("1.2.3"));
        assert!(Semver::is_valid("1.2.3-rc.1+build.7"));
        assert!(!Semver::is_valid("1.2"));
        assert!(!Semver::is_valid("1.2.3.4-1"));
        assert!(!Semver::is_valid("1.2.3-RC."));
    }

    #[test]
    fn test_compare() {
        assert!(Semver::compare("1.25.0", ">", "1.24.0").unwrap());
        assert!(!Semver::compare("1.25.0", ">", "1.25.0").unwrap());
        assert!(Semver::compare("1.25.0", ">=", "1.25.0").unwrap());
        assert!(Semver::compare("1.25.0", "<", "1.26.0").unwrap());
        assert!(Semver::compare("1.25.0", "<=", "1.25.0").unwrap());
        assert!(Semver::compare("1.25.0", "==", "1.25.0+build").unwrap());
        assert!(Semver::compare("1.25.0", "=", "1.25.0").unwrap());
        assert!(Semver::compare("1.25.0", "!=", "1.25.0-0").unwrap());
        assert!(Semver::compare("1.25.0", "<>", "1.24.0").unwrap());
        assert!(Semver::compare("1.0.0-rc.1", "<", "1.0.0").unwrap());
    }

    #[test]
    fn test_compare_errors() {
        assert_eq!(
            Semver::compare("1.2", "<", "1.2.3").unwrap_err(),
            VersionParserError::InvalidVersion("1.2".to_string())
        );
        assert_eq!(
            Semver::compare("1.2.3", "~", "1.2.3").unwrap_err(),
            VersionParserError::InvalidOperator("~".to_string())
        );
        assert_eq!(
            Semver::compare("1.2.3", "<", "1.2.x").unwrap_err(),
            VersionParserError::InvalidVersion("1.2.x".to_string())
        );
    }

    #[test]
    fn test_sort() {
        let versions = vec!["1.0.0", "0.1.0", "0.1.0", "3.2.1", "2.4.0-alpha", "2.4.0", "1.10.0", "1.9.0"];
        let sorted = Semver::sort(&versions);
        assert_eq!(
            sorted,
            vec!["0.1.0", "0.1.0", "1.0.0", "1.9.0", "1.10.0", "2.4.0-alpha", "2.4.0", "3.2.1"]
        );
    }

    #[test]
    fn test_rsort() {
        let versions = vec!["1.0.0", "0.1.0", "0.1.0", "3.2.1", "2.4.0-alpha", "2.4.0"];
        let rsorted = Semver::rsort(&versions);
        assert_eq!(rsorted, vec!["3.2.1", "2.4.0", "2.4.0-alpha", "1.0.0", "0.1.0", "0.1.0"]);
    }

    #[test]
    fn test_sort_drops_invalid_and_keeps_build_order() {
        let versions = vec!["dev-master", "1.2.3+b", "1.2", "1.2.3+a", "1.2.3-rc.1"];
        assert_eq!(Semver::sort(&versions), vec!["1.2.3-rc.1", "1.2.3+b", "1.2.3+a"]);
        assert_eq!(Semver::rsort(&versions), vec!["1.2.3+b", "1.2.3+a", "1.2.3-rc.1"]);
    }
}
