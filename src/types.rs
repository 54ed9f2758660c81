//! Core types for release-pr

use serde::{Deserialize, Serialize};
use url::Url;

/// A resolved issue or pull request contributing to the related-stories section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Story {
    /// Issue/PR number
    pub number: u64,
    /// Issue/PR title
    pub title: String,
    /// Canonical web URL
    pub html_url: String,
    /// Whether the entity is a pull request rather than a plain issue
    pub is_pull_request: bool,
}

impl Story {
    /// Derive the `owner/repo` fullname from the story's web URL.
    ///
    /// Handles both `…/issues/<n>` and `…/pull/<n>` URLs. URLs that do not
    /// match that shape fall back to the whole URL string, so every story is
    /// groupable even when the platform hands back something unexpected.
    pub fn repo_fullname(&self) -> String {
        fullname_from_url(&self.html_url).unwrap_or_else(|| self.html_url.clone())
    }
}

fn fullname_from_url(html_url: &str) -> Option<String> {
    let url = Url::parse(html_url).ok()?;
    let segments: Vec<&str> = url.path_segments()?.collect();
    let n = segments.len();
    if n < 4 {
        return None;
    }
    let kind = segments[n - 2];
    let number = segments[n - 1];
    if (kind == "issues" || kind == "pull")
        && !number.is_empty()
        && number.bytes().all(|b| b.is_ascii_digit())
    {
        return Some(segments[..n - 2].join("/"));
    }
    None
}

/// An open pull request, as returned by the hosting platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequest {
    /// PR number
    pub number: u64,
    /// PR title
    pub title: String,
    /// PR body (None when the platform reports no body at all)
    pub body: Option<String>,
    /// Web URL for the PR
    pub html_url: String,
    /// Base branch name
    pub base_ref: String,
    /// Head branch name
    pub head_ref: String,
}

/// A single event from an issue's timeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// Event kind (e.g. "cross-referenced", "labeled", "closed")
    pub kind: String,
    /// For cross-reference events, the issue or pull request whose text
    /// mentioned the subject issue
    pub source: Option<Story>,
}

impl TimelineEvent {
    /// Event kind recorded when another issue or PR mentions this one
    pub const CROSS_REFERENCED: &'static str = "cross-referenced";

    /// Whether this event is a cross-reference from elsewhere
    pub fn is_cross_reference(&self) -> bool {
        self.kind == Self::CROSS_REFERENCED
    }
}

/// Abbreviated commit-range tag embedded in the rendered section header
///
/// Format: `<base>...<head>` using 7-character SHA abbreviations. Derived
/// once per run and compared by exact string equality for idempotence
/// checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionMarker(String);

impl VersionMarker {
    /// Build a marker from two commit SHAs, abbreviating each to 7 characters.
    ///
    /// SHAs shorter than 7 characters are used whole.
    pub fn from_shas(base_sha: &str, head_sha: &str) -> Self {
        Self(format!("{}...{}", abbreviate(base_sha), abbreviate(head_sha)))
    }

    /// Wrap an already-formatted `<base>...<head>` range.
    pub fn from_range(range: impl Into<String>) -> Self {
        Self(range.into())
    }

    /// The marker as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VersionMarker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn abbreviate(sha: &str) -> &str {
    sha.get(..7).unwrap_or(sha)
}
