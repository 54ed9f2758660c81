//! Mock platform service for testing
//!
//! Shared by the unit and integration suites; not every setter or
//! accessor is exercised by both.

#![allow(dead_code)]

use async_trait::async_trait;
use release_pr::error::{Error, Result};
use release_pr::platform::PlatformService;
use release_pr::types::{PullRequest, Story, TimelineEvent};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Call record for `create_pull`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePullCall {
    pub base: String,
    pub head: String,
    pub title: String,
    pub body: String,
}

/// Call record for `update_pull_body`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateBodyCall {
    pub number: u64,
    pub body: String,
}

/// Call record for `add_labels`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddLabelsCall {
    pub number: u64,
    pub labels: Vec<String>,
}

/// Simple mock platform service for testing
///
/// Implemented by hand rather than with a mocking framework: the release
/// flow tests care about call order and exact recorded arguments, which
/// plain `Mutex<Vec<_>>` records express directly.
///
/// Features:
/// - Auto-incrementing PR numbers for created pulls
/// - Call tracking for verification
/// - Configurable responses per branch and per issue number
/// - Error injection for failure path testing
pub struct MockPlatformService {
    next_pr_number: AtomicU64,
    branch_tips: Mutex<HashMap<String, String>>,
    commit_messages: Mutex<Vec<String>>,
    open_pull: Mutex<Option<PullRequest>>,
    issues: Mutex<HashMap<u64, Story>>,
    timelines: Mutex<HashMap<u64, Vec<TimelineEvent>>>,
    // Call tracking
    branch_tip_calls: Mutex<Vec<String>>,
    list_commits_calls: Mutex<Vec<(String, String)>>,
    find_pull_calls: Mutex<Vec<(String, String)>>,
    get_issue_calls: Mutex<Vec<u64>>,
    timeline_calls: Mutex<Vec<u64>>,
    update_body_calls: Mutex<Vec<UpdateBodyCall>>,
    create_pull_calls: Mutex<Vec<CreatePullCall>>,
    add_labels_calls: Mutex<Vec<AddLabelsCall>>,
    // Error injection
    error_on_branch_tip: Mutex<Option<String>>,
    error_on_list_commits: Mutex<Option<String>>,
    error_on_find_pull: Mutex<Option<String>>,
    error_on_get_issue: Mutex<Option<String>>,
    error_on_timeline: Mutex<Option<String>>,
    error_on_update_body: Mutex<Option<String>>,
    error_on_create_pull: Mutex<Option<String>>,
    error_on_add_labels: Mutex<Option<String>>,
}

impl MockPlatformService {
    /// Create a new mock with no responses configured
    pub fn new() -> Self {
        Self {
            next_pr_number: AtomicU64::new(1),
            branch_tips: Mutex::new(HashMap::new()),
            commit_messages: Mutex::new(Vec::new()),
            open_pull: Mutex::new(None),
            issues: Mutex::new(HashMap::new()),
            timelines: Mutex::new(HashMap::new()),
            branch_tip_calls: Mutex::new(Vec::new()),
            list_commits_calls: Mutex::new(Vec::new()),
            find_pull_calls: Mutex::new(Vec::new()),
            get_issue_calls: Mutex::new(Vec::new()),
            timeline_calls: Mutex::new(Vec::new()),
            update_body_calls: Mutex::new(Vec::new()),
            create_pull_calls: Mutex::new(Vec::new()),
            add_labels_calls: Mutex::new(Vec::new()),
            error_on_branch_tip: Mutex::new(None),
            error_on_list_commits: Mutex::new(None),
            error_on_find_pull: Mutex::new(None),
            error_on_get_issue: Mutex::new(None),
            error_on_timeline: Mutex::new(None),
            error_on_update_body: Mutex::new(None),
            error_on_create_pull: Mutex::new(None),
            error_on_add_labels: Mutex::new(None),
        }
    }

    // === Error injection methods ===

    /// Make `branch_tip` return an error
    pub fn fail_branch_tip(&self, msg: &str) {
        *self.error_on_branch_tip.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `list_commit_messages` return an error
    pub fn fail_list_commits(&self, msg: &str) {
        *self.error_on_list_commits.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `find_open_pull` return an error
    pub fn fail_find_pull(&self, msg: &str) {
        *self.error_on_find_pull.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `get_issue_or_pull` return an error
    pub fn fail_get_issue(&self, msg: &str) {
        *self.error_on_get_issue.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `list_timeline_events` return an error
    pub fn fail_timeline(&self, msg: &str) {
        *self.error_on_timeline.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `update_pull_body` return an error
    pub fn fail_update_body(&self, msg: &str) {
        *self.error_on_update_body.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `create_pull` return an error
    pub fn fail_create_pull(&self, msg: &str) {
        *self.error_on_create_pull.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `add_labels` return an error
    pub fn fail_add_labels(&self, msg: &str) {
        *self.error_on_add_labels.lock().unwrap() = Some(msg.to_string());
    }

    // === Response configuration methods ===

    /// Set the tip SHA returned for a branch
    pub fn set_branch_tip(&self, branch: &str, sha: &str) {
        self.branch_tips
            .lock()
            .unwrap()
            .insert(branch.to_string(), sha.to_string());
    }

    /// Set the commit messages returned for any base...head comparison
    pub fn set_commit_messages(&self, messages: &[&str]) {
        *self.commit_messages.lock().unwrap() =
            messages.iter().map(ToString::to_string).collect();
    }

    /// Set the open pull request returned by `find_open_pull`
    pub fn set_open_pull(&self, pull: PullRequest) {
        *self.open_pull.lock().unwrap() = Some(pull);
    }

    /// Register a story, keyed by its number
    pub fn insert_issue(&self, story: Story) {
        self.issues.lock().unwrap().insert(story.number, story);
    }

    /// Set the timeline events returned for an issue or pull number
    pub fn set_timeline(&self, number: u64, events: Vec<TimelineEvent>) {
        self.timelines.lock().unwrap().insert(number, events);
    }

    /// Helper to configure tips for the usual main/develop branch pair
    pub fn setup_branches(&self, base_sha: &str, head_sha: &str) {
        self.set_branch_tip("main", base_sha);
        self.set_branch_tip("develop", head_sha);
    }

    // === Call verification methods ===

    /// Get all branches that `branch_tip` was called with
    pub fn get_branch_tip_calls(&self) -> Vec<String> {
        self.branch_tip_calls.lock().unwrap().clone()
    }

    /// Get all `(base_sha, head_sha)` pairs `list_commit_messages` was called with
    pub fn get_list_commits_calls(&self) -> Vec<(String, String)> {
        self.list_commits_calls.lock().unwrap().clone()
    }

    /// Get all `(base, head)` pairs `find_open_pull` was called with
    pub fn get_find_pull_calls(&self) -> Vec<(String, String)> {
        self.find_pull_calls.lock().unwrap().clone()
    }

    /// Get all numbers `get_issue_or_pull` was called with
    pub fn get_issue_calls(&self) -> Vec<u64> {
        self.get_issue_calls.lock().unwrap().clone()
    }

    /// Get all numbers `list_timeline_events` was called with
    pub fn get_timeline_calls(&self) -> Vec<u64> {
        self.timeline_calls.lock().unwrap().clone()
    }

    /// Get all `update_pull_body` calls
    pub fn get_update_body_calls(&self) -> Vec<UpdateBodyCall> {
        self.update_body_calls.lock().unwrap().clone()
    }

    /// Get all `create_pull` calls
    pub fn get_create_pull_calls(&self) -> Vec<CreatePullCall> {
        self.create_pull_calls.lock().unwrap().clone()
    }

    /// Get all `add_labels` calls
    pub fn get_add_labels_calls(&self) -> Vec<AddLabelsCall> {
        self.add_labels_calls.lock().unwrap().clone()
    }

    /// Assert that `create_pull` was called with specific base and head
    pub fn assert_create_pull_called(&self, base: &str, head: &str) {
        let calls = self.get_create_pull_calls();
        assert!(
            calls.iter().any(|c| c.base == base && c.head == head),
            "Expected create_pull({base}, {head}) but got: {calls:?}"
        );
    }

    /// Assert that `update_pull_body` was called for a specific pull
    pub fn assert_update_body_called(&self, number: u64) {
        let calls = self.get_update_body_calls();
        assert!(
            calls.iter().any(|c| c.number == number),
            "Expected update_pull_body({number}) but got: {calls:?}"
        );
    }

    /// Assert that nothing was created, updated, or labeled
    pub fn assert_no_mutations(&self) {
        let creates = self.get_create_pull_calls();
        assert!(
            creates.is_empty(),
            "Expected no create_pull calls but got: {creates:?}"
        );
        let updates = self.get_update_body_calls();
        assert!(
            updates.is_empty(),
            "Expected no update_pull_body calls but got: {updates:?}"
        );
        let labels = self.get_add_labels_calls();
        assert!(
            labels.is_empty(),
            "Expected no add_labels calls but got: {labels:?}"
        );
    }
}

impl Default for MockPlatformService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlatformService for MockPlatformService {
    async fn branch_tip(&self, branch: &str) -> Result<String> {
        self.branch_tip_calls
            .lock()
            .unwrap()
            .push(branch.to_string());

        // Check for injected error
        if let Some(msg) = self.error_on_branch_tip.lock().unwrap().as_ref() {
            return Err(Error::Platform(msg.clone()));
        }

        let tips = self.branch_tips.lock().unwrap();
        tips.get(branch).cloned().ok_or_else(|| {
            Error::Platform(format!(
                "branch_tip: no tip configured for branch '{branch}'"
            ))
        })
    }

    async fn list_commit_messages(&self, base_sha: &str, head_sha: &str) -> Result<Vec<String>> {
        self.list_commits_calls
            .lock()
            .unwrap()
            .push((base_sha.to_string(), head_sha.to_string()));

        // Check for injected error
        if let Some(msg) = self.error_on_list_commits.lock().unwrap().as_ref() {
            return Err(Error::Platform(msg.clone()));
        }

        Ok(self.commit_messages.lock().unwrap().clone())
    }

    async fn find_open_pull(&self, base: &str, head: &str) -> Result<Option<PullRequest>> {
        self.find_pull_calls
            .lock()
            .unwrap()
            .push((base.to_string(), head.to_string()));

        // Check for injected error
        if let Some(msg) = self.error_on_find_pull.lock().unwrap().as_ref() {
            return Err(Error::Platform(msg.clone()));
        }

        Ok(self.open_pull.lock().unwrap().clone())
    }

    async fn get_issue_or_pull(&self, number: u64) -> Result<Story> {
        self.get_issue_calls.lock().unwrap().push(number);

        // Check for injected error
        if let Some(msg) = self.error_on_get_issue.lock().unwrap().as_ref() {
            return Err(Error::Platform(msg.clone()));
        }

        let issues = self.issues.lock().unwrap();
        issues.get(&number).cloned().ok_or_else(|| {
            Error::Platform(format!(
                "get_issue_or_pull: no story configured for #{number}"
            ))
        })
    }

    async fn list_timeline_events(&self, number: u64) -> Result<Vec<TimelineEvent>> {
        self.timeline_calls.lock().unwrap().push(number);

        // Check for injected error
        if let Some(msg) = self.error_on_timeline.lock().unwrap().as_ref() {
            return Err(Error::Platform(msg.clone()));
        }

        let timelines = self.timelines.lock().unwrap();
        Ok(timelines.get(&number).cloned().unwrap_or_default())
    }

    async fn update_pull_body(&self, number: u64, body: &str) -> Result<PullRequest> {
        self.update_body_calls.lock().unwrap().push(UpdateBodyCall {
            number,
            body: body.to_string(),
        });

        // Check for injected error
        if let Some(msg) = self.error_on_update_body.lock().unwrap().as_ref() {
            return Err(Error::Platform(msg.clone()));
        }

        let stored = self.open_pull.lock().unwrap().clone();
        match stored {
            Some(mut pull) if pull.number == number => {
                pull.body = Some(body.to_string());
                Ok(pull)
            }
            _ => Err(Error::Platform(format!(
                "update_pull_body: no open pull configured for #{number}"
            ))),
        }
    }

    async fn create_pull(
        &self,
        base: &str,
        head: &str,
        title: &str,
        body: &str,
    ) -> Result<PullRequest> {
        self.create_pull_calls.lock().unwrap().push(CreatePullCall {
            base: base.to_string(),
            head: head.to_string(),
            title: title.to_string(),
            body: body.to_string(),
        });

        // Check for injected error
        if let Some(msg) = self.error_on_create_pull.lock().unwrap().as_ref() {
            return Err(Error::Platform(msg.clone()));
        }

        let number = self.next_pr_number.fetch_add(1, Ordering::SeqCst);
        Ok(PullRequest {
            number,
            title: title.to_string(),
            body: Some(body.to_string()),
            html_url: format!("https://github.com/acme/widgets/pull/{number}"),
            base_ref: base.to_string(),
            head_ref: head.to_string(),
        })
    }

    async fn add_labels(&self, number: u64, labels: &[String]) -> Result<()> {
        self.add_labels_calls.lock().unwrap().push(AddLabelsCall {
            number,
            labels: labels.to_vec(),
        });

        // Check for injected error
        if let Some(msg) = self.error_on_add_labels.lock().unwrap().as_ref() {
            return Err(Error::Platform(msg.clone()));
        }

        Ok(())
    }
}
