use std::fmt;

/// Non-fatal conditions met while reading the current tag.
/// The run continues from `v0.0.0`, but the operator should know why.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// No tag matched the configured pattern
    NoExistingTags { pattern: String },
    /// A tag was found but is not three dot-separated segments
    UnrecognizedTagFormat { tag: String },
}

impl BoundaryWarning {
    /// Inspect the discovered tag and report why it will be read as `v0.0.0`, if it will
    pub fn for_discovered_tag(tag: &str, pattern: &str) -> Option<Self> {
        let trimmed = tag.trim();
        if trimmed.is_empty() {
            return Some(BoundaryWarning::NoExistingTags {
                pattern: pattern.to_string(),
            });
        }

        let clean = trimmed.strip_prefix('v').unwrap_or(trimmed);
        if clean.split('.').count() != 3 {
            return Some(BoundaryWarning::UnrecognizedTagFormat {
                tag: trimmed.to_string(),
            });
        }

        None
    }
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoExistingTags { pattern } => {
                write!(
                    f,
                    "No tags matching '{}' found, starting from v0.0.0",
                    pattern
                )
            }
            BoundaryWarning::UnrecognizedTagFormat { tag } => {
                write!(
                    f,
                    "Invalid tag format '{}', starting from v0.0.0",
                    tag
                )
            }
        }
    }
}
