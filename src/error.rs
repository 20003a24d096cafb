use thiserror::Error;

/// Unified error type for semver-tag operations
#[derive(Error, Debug)]
pub enum SemverTagError {
    #[error("Environment error: {0}")]
    Environment(String),

    #[error("Tag discovery failed: {0}")]
    Discovery(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Invalid option '{0}'")]
    InvalidOption(String),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("Remote operation failed: {0}")]
    Remote(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in semver-tag
pub type Result<T> = std::result::Result<T, SemverTagError>;

impl SemverTagError {
    /// Create an environment error with context
    pub fn environment(msg: impl Into<String>) -> Self {
        SemverTagError::Environment(msg.into())
    }

    /// Create a discovery error with context
    pub fn discovery(msg: impl Into<String>) -> Self {
        SemverTagError::Discovery(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        SemverTagError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        SemverTagError::Version(msg.into())
    }

    pub fn invalid_option(token: impl Into<String>) -> Self {
        SemverTagError::InvalidOption(token.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        SemverTagError::Tag(msg.into())
    }

    /// Create a remote error with context
    pub fn remote(msg: impl Into<String>) -> Self {
        SemverTagError::Remote(msg.into())
    }
}
