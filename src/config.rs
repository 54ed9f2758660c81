//! Run configuration

use crate::error::{Error, Result};

/// Configuration for one release run
#[derive(Debug, Clone)]
pub struct ReleaseConfig {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Branch the release pull request merges into
    pub base: String,
    /// Branch carrying the commits to be released
    pub head: String,
    /// Label added to newly created release pull requests
    pub label: Option<String>,
    /// Refresh the section even when the commit range looks current
    pub force_updating: bool,
}

impl ReleaseConfig {
    /// The `owner/repo` fullname of the target repository
    pub fn repo_fullname(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

/// Parse an `owner/repo` slug into its two components.
pub fn parse_repo_slug(slug: &str) -> Result<(String, String)> {
    match slug.split_once('/') {
        Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
            Ok((owner.to_string(), repo.to_string()))
        }
        _ => Err(Error::InvalidRepoSlug(slug.to_string())),
    }
}
