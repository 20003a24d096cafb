use crate::error::{SemverTagError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the project-local configuration file
pub const LOCAL_CONFIG_FILE: &str = "semver.toml";

/// Name of the user-level configuration file inside the config directory
pub const USER_CONFIG_FILE: &str = ".semver.toml";

/// Represents the complete configuration for semver-tag.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub remote: RemoteConfig,

    #[serde(default)]
    pub tags: TagsConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

fn default_remote_name() -> String {
    "origin".to_string()
}

/// Remote the new tag is pushed to.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RemoteConfig {
    #[serde(default = "default_remote_name")]
    pub name: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        RemoteConfig {
            name: default_remote_name(),
        }
    }
}

fn default_tag_pattern() -> String {
    "v[0-9]*.[0-9]*.[0-9]*".to_string()
}

/// Which existing tags count when looking for the current version.
///
/// `pattern` is a glob in the syntax of `git tag -l <pattern>`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TagsConfig {
    #[serde(default = "default_tag_pattern")]
    pub pattern: String,
}

impl Default for TagsConfig {
    fn default() -> Self {
        TagsConfig {
            pattern: default_tag_pattern(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Controls runtime behavior without affecting version computation.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BehaviorConfig {
    /// Print the usage block before the interactive option prompt
    #[serde(default = "default_true")]
    pub show_usage: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        BehaviorConfig { show_usage: true }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `semver.toml` in current directory
/// 3. `.semver.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = match config_path {
        Some(path) => PathBuf::from(path),
        None => match find_config_file() {
            Some(path) => path,
            None => {
                tracing::debug!("no configuration file found, using defaults");
                return Ok(Config::default());
            }
        },
    };

    tracing::debug!(path = %path.display(), "loading configuration");
    let config_str = fs::read_to_string(&path).map_err(|e| {
        SemverTagError::config(format!("Cannot read {}: {}", path.display(), e))
    })?;

    parse_config(&config_str)
        .map_err(|e| SemverTagError::config(format!("{}: {}", path.display(), e)))
}

/// Parse configuration from TOML text
pub fn parse_config(config_str: &str) -> std::result::Result<Config, toml::de::Error> {
    toml::from_str(config_str)
}

fn find_config_file() -> Option<PathBuf> {
    let local = Path::new(".").join(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_FILE))
        .filter(|path| path.exists())
}
