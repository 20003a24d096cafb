use crate::error::{SemverTagError, Result};
use crate::git::{last_by_name, TagRepository};
use git2::{Cred, CredentialType, ErrorClass, PushOptions, RemoteCallbacks, Repository};
use std::path::{Path, PathBuf};

/// Wrapper around git2::Repository implementing [TagRepository]
pub struct Git2Repository {
    repo: Repository,
}

impl Git2Repository {
    /// Discover the repository containing `path`.
    ///
    /// Not being inside a git repository is an environment error: nothing else
    /// in the run can work without one.
    pub fn discover<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path.as_ref()).map_err(|e| {
            SemverTagError::environment(format!("Not in a git repository: {}", e.message()))
        })?;
        tracing::debug!(path = %repo.path().display(), "opened git repository");

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Repository) -> Self {
        Git2Repository { repo }
    }
}

impl TagRepository for Git2Repository {
    fn latest_tag(&self, pattern: &str) -> Result<Option<String>> {
        let tags = self.repo.tag_names(Some(pattern)).map_err(|e| {
            SemverTagError::discovery(format!("Cannot list tags: {}", e.message()))
        })?;

        let latest = last_by_name(tags.iter().flatten().map(|s| s.to_string()));
        tracing::debug!(pattern, latest = ?latest, count = tags.len(), "listed tags");

        Ok(latest)
    }

    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<()> {
        let head = self
            .repo
            .head()
            .and_then(|head| head.peel_to_commit())
            .map_err(|e| SemverTagError::tag(format!("Cannot resolve HEAD: {}", e.message())))?;

        let tagger = self.repo.signature().map_err(|e| {
            SemverTagError::tag(format!(
                "Cannot determine tagger (set user.name and user.email): {}",
                e.message()
            ))
        })?;

        self.repo
            .tag(name, head.as_object(), &tagger, message, false)
            .map_err(|e| {
                SemverTagError::tag(format!("Cannot create tag '{}': {}", name, e.message()))
            })?;

        tracing::info!(tag = name, commit = %head.id(), "created annotated tag");
        Ok(())
    }

    fn push_tag(&self, remote_name: &str, name: &str) -> Result<()> {
        let mut remote = self.repo.find_remote(remote_name).map_err(|_| {
            SemverTagError::remote(format!("No remote named '{}' found", remote_name))
        })?;

        let mut callbacks = RemoteCallbacks::new();
        callbacks.credentials(|_url, username_from_url, allowed_types| {
            let username = username_from_url.unwrap_or("git");

            if allowed_types.contains(CredentialType::SSH_KEY) {
                for key_path in ssh_key_candidates() {
                    if key_path.exists() {
                        if let Ok(cred) = Cred::ssh_key(username, None, &key_path, None) {
                            return Ok(cred);
                        }
                    }
                }

                if let Ok(cred) = Cred::ssh_key_from_agent(username) {
                    return Ok(cred);
                }
            }

            Cred::default()
        });

        // A rejected reference is reported here, not as a push() error
        callbacks.push_update_reference(|refname, status| match status {
            Some(status) => Err(git2::Error::from_str(&format!(
                "remote rejected {}: {}",
                refname, status
            ))),
            None => Ok(()),
        });

        let mut push_options = PushOptions::new();
        push_options.remote_callbacks(callbacks);

        let refspec = format!("refs/tags/{name}:refs/tags/{name}");
        remote
            .push(&[refspec.as_str()], Some(&mut push_options))
            .map_err(|e| {
                let message = match e.class() {
                    ErrorClass::Net => format!("Network error pushing '{}': {}", name, e.message()),
                    ErrorClass::Reference => {
                        format!("Reference error pushing '{}': {}", name, e.message())
                    }
                    _ => format!("Failed to push tag '{}': {}", name, e.message()),
                };
                SemverTagError::remote(message)
            })?;

        tracing::info!(tag = name, remote = remote_name, "pushed tag");
        Ok(())
    }
}

/// SSH keys to try, in order of preference
fn ssh_key_candidates() -> Vec<PathBuf> {
    let Some(home) = dirs::home_dir() else {
        return Vec::new();
    };

    ["id_ed25519", "id_rsa", "id_ecdsa"]
        .iter()
        .map(|key| home.join(".ssh").join(key))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discover_outside_repository_is_environment_error() {
        let dir = tempfile::tempdir().unwrap();
        // Only meaningful when the temp dir is not itself inside a repository
        if let Err(err) = Git2Repository::discover(dir.path()) {
            assert!(matches!(err, SemverTagError::Environment(_)));
            assert!(err.to_string().contains("Not in a git repository"));
        }
    }

    #[test]
    fn test_ssh_key_candidates_are_under_ssh_dir() {
        for path in ssh_key_candidates() {
            assert!(path.to_string_lossy().contains(".ssh"));
        }
    }
}
