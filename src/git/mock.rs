use crate::error::{SemverTagError, Result};
use crate::git::{last_by_name, TagRepository};
use glob::Pattern;
use std::collections::BTreeMap;
use std::sync::Mutex;

/// Mock repository for testing without actual git operations
///
/// Tags live in memory and are filtered with the same glob syntax as
/// `git tag -l`. Created tags are visible to later lookups, and every
/// successful push is recorded as `(remote, tag)`. Failures can be injected
/// for each operation.
pub struct MockRepository {
    tags: Mutex<BTreeMap<String, String>>,
    pushed: Mutex<Vec<(String, String)>>,
    fail_discovery: Option<String>,
    fail_create: Option<String>,
    fail_push: Option<String>,
}

impl MockRepository {
    /// Create a new mock repository with no tags
    pub fn new() -> Self {
        MockRepository {
            tags: Mutex::new(BTreeMap::new()),
            pushed: Mutex::new(Vec::new()),
            fail_discovery: None,
            fail_create: None,
            fail_push: None,
        }
    }

    /// Add an existing tag with an empty annotation
    pub fn with_tag(self, name: impl Into<String>) -> Self {
        self.lock_tags().insert(name.into(), String::new());
        self
    }

    /// Make `latest_tag` fail with the given message
    pub fn failing_discovery(mut self, message: impl Into<String>) -> Self {
        self.fail_discovery = Some(message.into());
        self
    }

    /// Make `create_annotated_tag` fail with the given message
    pub fn failing_create(mut self, message: impl Into<String>) -> Self {
        self.fail_create = Some(message.into());
        self
    }

    /// Make `push_tag` fail with the given message
    pub fn failing_push(mut self, message: impl Into<String>) -> Self {
        self.fail_push = Some(message.into());
        self
    }

    /// Annotation message of a tag, if the tag exists
    pub fn tag_message(&self, name: &str) -> Option<String> {
        self.lock_tags().get(name).cloned()
    }

    /// All tag names, in name order
    pub fn tag_names(&self) -> Vec<String> {
        self.lock_tags().keys().cloned().collect()
    }

    /// Pushes recorded so far, as `(remote, tag)`
    pub fn pushed(&self) -> Vec<(String, String)> {
        self.pushed
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn lock_tags(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, String>> {
        self.tags
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl TagRepository for MockRepository {
    fn latest_tag(&self, pattern: &str) -> Result<Option<String>> {
        if let Some(message) = &self.fail_discovery {
            return Err(SemverTagError::discovery(message.clone()));
        }

        let pattern = Pattern::new(pattern).map_err(|e| {
            SemverTagError::discovery(format!("Invalid tag pattern '{}': {}", pattern, e))
        })?;
        let matching: Vec<String> = self
            .lock_tags()
            .keys()
            .filter(|name| pattern.matches(name))
            .cloned()
            .collect();

        Ok(last_by_name(matching))
    }

    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<()> {
        if let Some(error) = &self.fail_create {
            return Err(SemverTagError::tag(error.clone()));
        }

        let mut tags = self.lock_tags();
        if tags.contains_key(name) {
            return Err(SemverTagError::tag(format!("Tag '{}' already exists", name)));
        }
        tags.insert(name.to_string(), message.to_string());
        Ok(())
    }

    fn push_tag(&self, remote: &str, name: &str) -> Result<()> {
        if let Some(error) = &self.fail_push {
            return Err(SemverTagError::remote(error.clone()));
        }
        if !self.lock_tags().contains_key(name) {
            return Err(SemverTagError::remote(format!("Tag '{}' does not exist", name)));
        }

        self.pushed
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((remote.to_string(), name.to_string()));
        Ok(())
    }
}
