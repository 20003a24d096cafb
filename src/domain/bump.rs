use crate::domain::VersionTag;
use crate::error::{SemverTagError, Result};
use std::fmt;
use std::str::FromStr;

/// What the operator asked for at the option prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpKind {
    Major,
    Minor,
    Patch,
    ReleaseCandidate,
    Quit,
    Help,
}

impl BumpKind {
    /// Every kind, in the order the usage text lists them
    pub const ALL: [BumpKind; 6] = [
        BumpKind::ReleaseCandidate,
        BumpKind::Patch,
        BumpKind::Minor,
        BumpKind::Major,
        BumpKind::Help,
        BumpKind::Quit,
    ];

    /// Map an operator token to a bump kind.
    ///
    /// Matching is case-sensitive: `M` is major and `m` is minor.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "M" => Some(BumpKind::Major),
            "m" => Some(BumpKind::Minor),
            "p" => Some(BumpKind::Patch),
            "rc" => Some(BumpKind::ReleaseCandidate),
            "q" => Some(BumpKind::Quit),
            "h" => Some(BumpKind::Help),
            _ => None,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            BumpKind::Major => "M",
            BumpKind::Minor => "m",
            BumpKind::Patch => "p",
            BumpKind::ReleaseCandidate => "rc",
            BumpKind::Quit => "q",
            BumpKind::Help => "h",
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            BumpKind::Major => "for major",
            BumpKind::Minor => "for minor",
            BumpKind::Patch => "for patch",
            BumpKind::ReleaseCandidate => "to increment release candidate",
            BumpKind::Quit => "to quit",
            BumpKind::Help => "for this message",
        }
    }
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BumpKind::Major => "major",
            BumpKind::Minor => "minor",
            BumpKind::Patch => "patch",
            BumpKind::ReleaseCandidate => "release candidate",
            BumpKind::Quit => "quit",
            BumpKind::Help => "help",
        };
        f.write_str(name)
    }
}

impl FromStr for BumpKind {
    type Err = SemverTagError;

    fn from_str(s: &str) -> Result<Self> {
        BumpKind::from_token(s).ok_or_else(|| SemverTagError::invalid_option(s))
    }
}

/// Result of applying a bump kind to the current tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpOutcome {
    /// A new tag was computed
    Next(VersionTag),
    /// The operator asked to stop
    Quit,
    /// The operator asked for the usage text
    Help,
}

impl VersionTag {
    /// Bump according to kind, returning the new value.
    ///
    /// - **Major**: major += 1, minor = 0, patch = 0, rc = 0
    /// - **Minor**: minor += 1, patch = 0, rc = 0
    /// - **Patch**: finalizes a release candidate (rc = 0), otherwise patch += 1
    /// - **ReleaseCandidate**: rc += 1
    /// - **Quit** / **Help**: unchanged
    pub fn bump(self, kind: BumpKind) -> Self {
        let mut next = self;
        match kind {
            BumpKind::Major => {
                next.major = next.major.saturating_add(1);
                next.minor = 0;
                next.patch = 0;
                next.release_candidate = 0;
            }
            BumpKind::Minor => {
                next.minor = next.minor.saturating_add(1);
                next.patch = 0;
                next.release_candidate = 0;
            }
            BumpKind::Patch => {
                if next.release_candidate > 0 {
                    next.release_candidate = 0;
                } else {
                    next.patch = next.patch.saturating_add(1);
                }
            }
            BumpKind::ReleaseCandidate => {
                next.release_candidate = next.release_candidate.saturating_add(1);
            }
            BumpKind::Quit | BumpKind::Help => {}
        }
        next
    }
}

/// Compute the next tag, or report that the run should stop
pub fn apply_bump(current: VersionTag, kind: BumpKind) -> BumpOutcome {
    match kind {
        BumpKind::Quit => BumpOutcome::Quit,
        BumpKind::Help => BumpOutcome::Help,
        kind => BumpOutcome::Next(current.bump(kind)),
    }
}
