//! Error types for release-pr

use thiserror::Error;

/// Result type alias using our [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by a release run
#[derive(Error, Debug)]
pub enum Error {
    /// Required configuration is missing or unusable
    #[error("Configuration error: {0}")]
    Config(String),

    /// Repository slug could not be parsed
    #[error("Invalid repository '{0}' (expected owner/repo)")]
    InvalidRepoSlug(String),

    /// GitHub API returned an unexpected status or an undecodable response
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// Platform operation failed
    #[error("Platform error: {0}")]
    Platform(String),

    /// HTTP transport failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Error from the octocrab GitHub client
    #[error(transparent)]
    Octocrab(#[from] Box<octocrab::Error>),
}

impl From<octocrab::Error> for Error {
    fn from(err: octocrab::Error) -> Self {
        Self::Octocrab(Box::new(err))
    }
}
