//! Domain logic - version tags and the bump rules, independent of git

pub mod bump;
pub mod version;

pub use bump::{apply_bump, BumpKind, BumpOutcome};
pub use version::VersionTag;
