//! GitHub platform service implementation

use crate::error::{Error, Result};
use crate::platform::PlatformService;
use crate::types::{PullRequest, Story, TimelineEvent};
use async_trait::async_trait;
use octocrab::Octocrab;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Page size for paginated raw API requests
const PER_PAGE: usize = 100;

/// GitHub service using octocrab
pub struct GitHubService {
    client: Octocrab,
    owner: String,
    repo: String,
    /// Token for raw HTTP requests (endpoints octocrab models poorly)
    token: String,
    /// HTTP client for raw requests
    http_client: Client,
    /// API base URL for raw requests
    api_base: String,
}

impl GitHubService {
    /// Create a new GitHub service for one repository
    ///
    /// `api_base` overrides the default `https://api.github.com`, which
    /// serves GitHub Enterprise instances and tests against a local server.
    pub fn new(
        token: &str,
        owner: String,
        repo: String,
        api_base: Option<String>,
    ) -> Result<Self> {
        let api_base = api_base.map_or_else(
            || "https://api.github.com".to_string(),
            |u| u.trim_end_matches('/').to_string(),
        );

        let client = Octocrab::builder()
            .personal_token(token.to_string())
            .base_uri(&api_base)
            .map_err(|e| Error::GitHubApi(e.to_string()))?
            .build()
            .map_err(|e| Error::GitHubApi(e.to_string()))?;

        let http_client = Client::builder()
            .user_agent("release-pr")
            .build()
            .map_err(|e| Error::GitHubApi(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            owner,
            repo,
            token: token.to_string(),
            http_client,
            api_base,
        })
    }

    /// Issue an authenticated GET against the REST API and decode the JSON body
    ///
    /// Non-success statuses and undecodable bodies are fatal; nothing above
    /// this layer retries.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self
            .http_client
            .get(url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::GitHubApi(format!(
                "GET {url} returned {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| Error::GitHubApi(format!("Failed to parse response from {url}: {e}")))
    }
}

/// Helper to convert an octocrab PR to our `PullRequest` type
fn pr_from_octocrab(pr: &octocrab::models::pulls::PullRequest) -> PullRequest {
    PullRequest {
        number: pr.number,
        title: pr.title.as_deref().unwrap_or_default().to_string(),
        body: pr.body.clone(),
        html_url: pr
            .html_url
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default(),
        base_ref: pr.base.ref_field.clone(),
        head_ref: pr.head.ref_field.clone(),
    }
}

#[async_trait]
impl PlatformService for GitHubService {
    async fn branch_tip(&self, branch: &str) -> Result<String> {
        #[derive(Deserialize)]
        struct BranchResponse {
            commit: BranchCommit,
        }

        #[derive(Deserialize)]
        struct BranchCommit {
            sha: String,
        }

        debug!(branch, "fetching branch tip");
        let url = format!(
            "{}/repos/{}/{}/branches/{branch}",
            self.api_base, self.owner, self.repo
        );
        let response: BranchResponse = self.get_json(&url).await?;
        debug!(branch, sha = %response.commit.sha, "fetched branch tip");
        Ok(response.commit.sha)
    }

    async fn list_commit_messages(&self, base_sha: &str, head_sha: &str) -> Result<Vec<String>> {
        #[derive(Deserialize)]
        struct CompareResponse {
            commits: Vec<CompareCommit>,
        }

        #[derive(Deserialize)]
        struct CompareCommit {
            commit: CommitDetail,
        }

        #[derive(Deserialize)]
        struct CommitDetail {
            message: String,
        }

        debug!(base_sha, head_sha, "comparing commits");
        let mut messages = Vec::new();
        let mut page = 1u32;
        loop {
            let url = format!(
                "{}/repos/{}/{}/compare/{base_sha}...{head_sha}?per_page={PER_PAGE}&page={page}",
                self.api_base, self.owner, self.repo
            );
            let response: CompareResponse = self.get_json(&url).await?;
            let count = response.commits.len();
            messages.extend(response.commits.into_iter().map(|c| c.commit.message));
            if count < PER_PAGE {
                break;
            }
            page += 1;
        }
        debug!(count = messages.len(), "compared commits");
        Ok(messages)
    }

    async fn find_open_pull(&self, base: &str, head: &str) -> Result<Option<PullRequest>> {
        debug!(base, head, "finding open release PR");
        let head_filter = format!("{}:{head}", self.owner);

        let prs = self
            .client
            .pulls(&self.owner, &self.repo)
            .list()
            .base(base)
            .head(head_filter)
            .state(octocrab::params::State::Open)
            .send()
            .await?;

        let result = prs.items.first().map(pr_from_octocrab);
        if let Some(ref pr) = result {
            debug!(number = pr.number, "found open release PR");
        } else {
            debug!("no open release PR found");
        }
        Ok(result)
    }

    async fn get_issue_or_pull(&self, number: u64) -> Result<Story> {
        debug!(number, "fetching issue");
        let issue = self
            .client
            .issues(&self.owner, &self.repo)
            .get(number)
            .await?;

        let story = Story {
            number,
            title: issue.title,
            html_url: issue.html_url.to_string(),
            is_pull_request: issue.pull_request.is_some(),
        };
        debug!(number, is_pull_request = story.is_pull_request, "fetched issue");
        Ok(story)
    }

    async fn list_timeline_events(&self, number: u64) -> Result<Vec<TimelineEvent>> {
        #[derive(Deserialize)]
        struct TimelineEntry {
            #[serde(default)]
            event: Option<String>,
            #[serde(default)]
            source: Option<TimelineSource>,
        }

        #[derive(Deserialize)]
        struct TimelineSource {
            #[serde(default)]
            issue: Option<TimelineIssue>,
        }

        #[derive(Deserialize)]
        struct TimelineIssue {
            number: u64,
            title: String,
            html_url: String,
            #[serde(default)]
            pull_request: Option<serde_json::Value>,
        }

        debug!(number, "listing timeline events");
        let mut events = Vec::new();
        let mut page = 1u32;
        loop {
            let url = format!(
                "{}/repos/{}/{}/issues/{number}/timeline?per_page={PER_PAGE}&page={page}",
                self.api_base, self.owner, self.repo
            );
            let entries: Vec<TimelineEntry> = self.get_json(&url).await?;
            let count = entries.len();
            events.extend(entries.into_iter().map(|entry| TimelineEvent {
                kind: entry.event.unwrap_or_default(),
                source: entry.source.and_then(|s| s.issue).map(|issue| Story {
                    number: issue.number,
                    title: issue.title,
                    html_url: issue.html_url,
                    is_pull_request: issue.pull_request.is_some(),
                }),
            }));
            if count < PER_PAGE {
                break;
            }
            page += 1;
        }
        debug!(number, count = events.len(), "listed timeline events");
        Ok(events)
    }

    async fn update_pull_body(&self, number: u64, body: &str) -> Result<PullRequest> {
        debug!(number, "updating release PR body");
        let pr = self
            .client
            .pulls(&self.owner, &self.repo)
            .update(number)
            .body(body)
            .send()
            .await?;

        debug!(number, "updated release PR body");
        Ok(pr_from_octocrab(&pr))
    }

    async fn create_pull(
        &self,
        base: &str,
        head: &str,
        title: &str,
        body: &str,
    ) -> Result<PullRequest> {
        debug!(base, head, "creating release PR");
        let pr = self
            .client
            .pulls(&self.owner, &self.repo)
            .create(title, head, base)
            .body(body)
            .send()
            .await?;

        let result = pr_from_octocrab(&pr);
        debug!(number = result.number, "created release PR");
        Ok(result)
    }

    async fn add_labels(&self, number: u64, labels: &[String]) -> Result<()> {
        debug!(number, ?labels, "adding labels");
        self.client
            .issues(&self.owner, &self.repo)
            .add_labels(number, labels)
            .await?;
        debug!(number, "added labels");
        Ok(())
    }
}
