//! Error types for context resolution

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("default-branch input must not be empty")]
    MissingBaseBranch,

    #[error("remote name must not be empty")]
    MissingRemote,

    #[error("pull request trigger without a head branch reference (GITHUB_HEAD_REF unset or empty)")]
    MissingHeadRef,
}

/// Result type for configuration and context resolution
pub type Result<T> = std::result::Result<T, ConfigError>;
