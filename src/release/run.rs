//! The orchestrated release run

use super::resolve::resolve_all;
use crate::config::ReleaseConfig;
use crate::error::Result;
use crate::platform::PlatformService;
use crate::stories::{
    collapse_issues, dedupe_pulls, existing_marker, extract_issue_number, merge_section,
    render_section,
};
use crate::types::VersionMarker;
use tracing::{debug, info};

/// Title given to newly created release pull requests
const RELEASE_PR_TITLE: &str = "Release";

/// Outcome of a release run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The commit range is empty; nothing was done
    NoNewCommits,
    /// An open release pull request already describes this commit range
    AlreadyCurrent {
        /// Number of the current release pull request
        number: u64,
    },
    /// An existing release pull request body was refreshed
    Updated {
        /// Number of the updated release pull request
        number: u64,
    },
    /// A new release pull request was opened
    Created {
        /// Number of the new release pull request
        number: u64,
        /// Whether the configured label was applied
        labeled: bool,
    },
}

/// Run one release pass against the platform.
///
/// Resolves branch tips, diffs commits, aggregates related stories, and
/// creates or refreshes the release pull request. Two conditions
/// short-circuit successfully without mutating anything: an empty commit
/// range, and an open release pull request whose section already carries
/// the computed version marker. `force_updating` bypasses both.
pub async fn run_release(
    platform: &dyn PlatformService,
    config: &ReleaseConfig,
) -> Result<RunOutcome> {
    let base_sha = platform.branch_tip(&config.base).await?;
    let head_sha = platform.branch_tip(&config.head).await?;
    let marker = VersionMarker::from_shas(&base_sha, &head_sha);
    debug!(%marker, "resolved branch tips");

    let messages = platform.list_commit_messages(&base_sha, &head_sha).await?;
    if messages.is_empty() && !config.force_updating {
        info!(base = %config.base, head = %config.head, "no new commits");
        return Ok(RunOutcome::NoNewCommits);
    }

    let release_pull = platform.find_open_pull(&config.base, &config.head).await?;
    if !config.force_updating
        && let Some(pull) = &release_pull
        && pull
            .body
            .as_deref()
            .and_then(existing_marker)
            .is_some_and(|found| found == marker)
    {
        info!(number = pull.number, "release pull request already current");
        return Ok(RunOutcome::AlreadyCurrent {
            number: pull.number,
        });
    }

    let numbers: Vec<u64> = messages
        .iter()
        .filter_map(|message| extract_issue_number(message))
        .filter(|&number| number > 0)
        .collect();
    debug!(count = numbers.len(), "extracted issue references");

    let resolved = resolve_all(platform, &numbers).await?;
    let target_fullname = config.repo_fullname();
    let pulls = dedupe_pulls(resolved.pulls);
    let issues = collapse_issues(resolved.issues, &target_fullname);
    let section = render_section(&marker, &pulls, &issues, &target_fullname, &config.owner);

    match release_pull {
        Some(pull) => {
            let body = merge_section(pull.body.as_deref().unwrap_or_default(), &section);
            platform.update_pull_body(pull.number, &body).await?;
            info!(number = pull.number, "updated release pull request");
            Ok(RunOutcome::Updated {
                number: pull.number,
            })
        }
        None => {
            let created = platform
                .create_pull(
                    &config.base,
                    &config.head,
                    RELEASE_PR_TITLE,
                    &section.join("\n"),
                )
                .await?;
            let labeled = if let Some(label) = &config.label {
                platform
                    .add_labels(created.number, std::slice::from_ref(label))
                    .await?;
                true
            } else {
                false
            };
            info!(
                number = created.number,
                labeled, "created release pull request"
            );
            Ok(RunOutcome::Created {
                number: created.number,
                labeled,
            })
        }
    }
}
