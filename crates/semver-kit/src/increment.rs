//! Version increments
//!
//! Every increment returns a new [`Version`]; the receiver is left untouched.
//! The pre-release family takes the pre-id of the result. When it matches
//! the receiver's pre-id (`None` matches `None`) the counter carries over,
//! otherwise it restarts at [`DEFAULT_PRE_RELEASE`].
//!
//! All increments panic if a component would exceed `u64::MAX`.

use crate::Version;

/// Pre-release counter used when no counter can be carried over.
///
/// Also the counter the parser assigns to a pre-release tail that does not
/// end in a number, so `1.2.3-RC` and `1.2.3-RC.0` are the same version.
pub const DEFAULT_PRE_RELEASE: u64 = 0;

impl Version {
    /// `2.0.0` from `1.2.3`
    pub fn inc_major(&self) -> Version {
        Version::new(bump(self.major()), 0, 0)
    }

    /// `1.3.0` from `1.2.3`
    pub fn inc_minor(&self) -> Version {
        Version::new(self.major(), bump(self.minor()), 0)
    }

    /// `1.2.4` from `1.2.3`
    pub fn inc_patch(&self) -> Version {
        Version::new(self.major(), self.minor(), bump(self.patch()))
    }

    /// Next major version as a pre-release, e.g. `1.2.3-RC.2` to `2.0.0-RC.2`
    pub fn inc_premajor(&self, pre_id: Option<&str>) -> Version {
        pre_release_version(bump(self.major()), 0, 0, pre_id, self.carried_pre_release(pre_id))
    }

    /// Next minor version as a pre-release, e.g. `1.2.3-RC.2` to `1.3.0-RC.2`
    pub fn inc_preminor(&self, pre_id: Option<&str>) -> Version {
        pre_release_version(self.major(), bump(self.minor()), 0, pre_id, self.carried_pre_release(pre_id))
    }

    /// Next patch version as a pre-release, e.g. `1.2.3-RC.2` to `1.2.4-RC.2`
    pub fn inc_prepatch(&self, pre_id: Option<&str>) -> Version {
        pre_release_version(
            self.major(),
            self.minor(),
            bump(self.patch()),
            pre_id,
            self.carried_pre_release(pre_id),
        )
    }

    /// Bump the pre-release counter, e.g. `1.2.3-RC.2` to `1.2.3-RC.3`.
    ///
    /// A different pre-id restarts the counter: `1.2.3-RC.2` with `None`
    /// gives `1.2.3-0`.
    pub fn inc_prerelease(&self, pre_id: Option<&str>) -> Version {
        let pre_release = if self.pre_id() == pre_id {
            bump(self.carried_pre_release(pre_id))
        } else {
            DEFAULT_PRE_RELEASE
        };
        pre_release_version(self.major(), self.minor(), self.patch(), pre_id, pre_release)
    }

    fn carried_pre_release(&self, pre_id: Option<&str>) -> u64 {
        if self.pre_id() == pre_id {
            self.pre_release().unwrap_or(DEFAULT_PRE_RELEASE)
        } else {
            DEFAULT_PRE_RELEASE
        }
    }
}

fn pre_release_version(major: u64, minor: u64, patch: u64, pre_id: Option<&str>, pre_release: u64) -> Version {
    Version::from_parts(major, minor, patch, pre_id.map(str::to_string), Some(pre_release))
}

fn bump(n: u64) -> u64 {
    match n.checked_add(1) {
        Some(next) => next,
        None => panic!("version component {} cannot be incremented", n),
    }
}
