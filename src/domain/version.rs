use crate::error::{SemverTagError, Result};
use std::fmt;
use std::str::FromStr;

/// A version tag of the form `v<major>.<minor>.<patch>[-rc<n>]`.
///
/// `release_candidate == 0` marks a finalized release; any other value is a
/// pre-release of the same `major.minor.patch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VersionTag {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub release_candidate: u64,
}

impl VersionTag {
    /// The version assumed when a repository has no usable tag yet.
    pub const ZERO: VersionTag = VersionTag {
        major: 0,
        minor: 0,
        patch: 0,
        release_candidate: 0,
    };

    /// Create a finalized version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        VersionTag {
            major,
            minor,
            patch,
            release_candidate: 0,
        }
    }

    /// Create a release candidate of the given version
    pub fn candidate(major: u64, minor: u64, patch: u64, release_candidate: u64) -> Self {
        VersionTag {
            major,
            minor,
            patch,
            release_candidate,
        }
    }

    pub fn is_release_candidate(&self) -> bool {
        self.release_candidate > 0
    }

    /// Parse a raw tag (e.g., "v1.2.3" or "v1.2.3-rc2") into a version.
    ///
    /// A leading `v` is optional. Input that does not split into exactly three
    /// dot-separated segments is treated as "no tag yet" and yields
    /// [`VersionTag::ZERO`]. A segment that is not a number is an error, since
    /// there is no safe version to guess.
    ///
    /// # Examples
    /// ```
    /// # use semver_tag::domain::VersionTag;
    /// assert_eq!(VersionTag::parse("v1.2.3-rc2").unwrap(), VersionTag::candidate(1, 2, 3, 2));
    /// assert_eq!(VersionTag::parse("v1.2").unwrap(), VersionTag::ZERO);
    /// assert!(VersionTag::parse("v1.x.3").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        let clean_tag = raw.trim();
        let clean_tag = clean_tag.strip_prefix('v').unwrap_or(clean_tag);

        let mut parts: Vec<&str> = clean_tag.split('.').collect();
        if parts.len() != 3 {
            tracing::debug!(tag = raw, "tag is not <major>.<minor>.<patch>, using 0.0.0");
            return Ok(VersionTag::ZERO);
        }

        // "3-rc2" carries the candidate counter as a fourth segment;
        // anything after a second '-' is ignored
        let mut patch_parts = parts[2].split('-');
        if let (Some(patch), Some(suffix)) = (patch_parts.next(), patch_parts.next()) {
            parts[2] = patch;
            parts.push(suffix);
        }

        let major = parse_component(parts[0], "major")?;
        let minor = parse_component(parts[1], "minor")?;
        let patch = parse_component(parts[2], "patch")?;

        let release_candidate = match parts.get(3) {
            Some(suffix) => {
                let counter = suffix.strip_prefix("rc").unwrap_or(suffix);
                parse_component(counter, "release candidate")?
            }
            None => 0,
        };

        Ok(VersionTag {
            major,
            minor,
            patch,
            release_candidate,
        })
    }

    /// Render the canonical tag name
    pub fn format(&self) -> String {
        self.to_string()
    }
}

fn parse_component(segment: &str, component: &str) -> Result<u64> {
    segment.parse::<u64>().map_err(|_| {
        SemverTagError::version(format!("Invalid {} version: '{}'", component, segment))
    })
}

impl fmt::Display for VersionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)?;
        if self.release_candidate > 0 {
            write!(f, "-rc{}", self.release_candidate)?;
        }
        Ok(())
    }
}

impl FromStr for VersionTag {
    type Err = SemverTagError;

    fn from_str(s: &str) -> Result<Self> {
        VersionTag::parse(s)
    }
}
