//! Git operations abstraction layer
//!
//! The workflow only needs three things from version control: the latest
//! version tag, a way to create an annotated tag, and a way to push it. The
//! [TagRepository] trait captures exactly that, with two implementations:
//!
//! - [repository::Git2Repository]: the real repository, backed by `git2`
//! - [mock::MockRepository]: an in-memory stand-in that records calls for tests
//!
//! ```rust
//! # use semver_tag::git::TagRepository;
//! # fn example<R: TagRepository>(repo: &R) -> semver_tag::Result<()> {
//! if let Some(tag) = repo.latest_tag("v[0-9]*.[0-9]*.[0-9]*")? {
//!     println!("Current tag: {}", tag);
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Tag operations the release workflow depends on
///
/// Errors are reported through [crate::error::SemverTagError]; implementations
/// map backend errors to the `Discovery`, `Tag` and `Remote` variants so the
/// operator sees which step failed.
pub trait TagRepository {
    /// Find the latest tag whose name matches a glob pattern
    ///
    /// Tags are ordered by name, as `git tag -l` lists them, and the last one wins.
    ///
    /// # Returns
    /// * `Ok(Some(name))` - The latest matching tag
    /// * `Ok(None)` - No tag matches
    /// * `Err` - If the tags cannot be listed
    fn latest_tag(&self, pattern: &str) -> Result<Option<String>>;

    /// Create an annotated tag on the current HEAD commit
    ///
    /// An empty `message` still produces an annotated tag, just without text.
    ///
    /// # Returns
    /// * `Ok(())` - Tag created
    /// * `Err` - If the tag already exists, HEAD is unborn, or no signature is configured
    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<()>;

    /// Push a single tag to a remote
    ///
    /// # Arguments
    /// * `remote` - Name of the remote (e.g., "origin")
    /// * `name` - Tag name to push
    fn push_tag(&self, remote: &str, name: &str) -> Result<()>;
}

/// Return the last name in `git tag -l` order
pub(crate) fn last_by_name<I>(names: I) -> Option<String>
where
    I: IntoIterator<Item = String>,
{
    names.into_iter().max()
}
