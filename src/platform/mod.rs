//! Platform services for the hosting API
//!
//! Provides the collaborator interface a release run drives. Everything the
//! run knows about the outside world goes through [`PlatformService`], so
//! the orchestrator can be exercised against an in-memory mock.

mod github;

pub use github::GitHubService;

use crate::error::Result;
use crate::types::{PullRequest, Story, TimelineEvent};
use async_trait::async_trait;

/// Platform service trait for the operations a release run performs
///
/// A service is constructed for a single `owner`/`repo` pair; methods take
/// only the arguments that vary per call. All calls are sequential and
/// fatal on failure: retry and rate-limit handling belong to the
/// implementation, not to callers.
#[async_trait]
pub trait PlatformService: Send + Sync {
    /// Resolve the tip commit SHA of a branch
    async fn branch_tip(&self, branch: &str) -> Result<String>;

    /// List commit messages reachable from `head_sha` but not `base_sha`
    async fn list_commit_messages(&self, base_sha: &str, head_sha: &str) -> Result<Vec<String>>;

    /// Find the first open pull request from `head` into `base`
    async fn find_open_pull(&self, base: &str, head: &str) -> Result<Option<PullRequest>>;

    /// Fetch an issue or pull request by number
    ///
    /// Pull requests surface through the issues API too; the returned
    /// story's `is_pull_request` flag tells them apart.
    async fn get_issue_or_pull(&self, number: u64) -> Result<Story>;

    /// List all timeline events recorded for an issue or pull request
    async fn list_timeline_events(&self, number: u64) -> Result<Vec<TimelineEvent>>;

    /// Replace the body of an existing pull request
    async fn update_pull_body(&self, number: u64, body: &str) -> Result<PullRequest>;

    /// Open a new pull request from `head` into `base`
    async fn create_pull(
        &self,
        base: &str,
        head: &str,
        title: &str,
        body: &str,
    ) -> Result<PullRequest>;

    /// Add labels to an issue or pull request
    async fn add_labels(&self, number: u64, labels: &[String]) -> Result<()>;
}
