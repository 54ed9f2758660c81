//! One-hop cross-reference resolution

use crate::error::Result;
use crate::platform::PlatformService;
use crate::types::Story;
use tracing::debug;

/// A resolved issue number: the entity itself plus the plain issues that
/// cross-referenced it from elsewhere
#[derive(Debug, Clone)]
pub struct Resolution {
    /// The entity the commit message named
    pub story: Story,
    /// Plain issues whose text mentioned the entity
    pub related_issues: Vec<Story>,
}

/// Accumulated stories across all resolved issue numbers
#[derive(Debug, Clone, Default)]
pub struct ResolvedStories {
    /// Pull requests, in resolution order
    pub pulls: Vec<Story>,
    /// Plain issues (primary and cross-referenced), in resolution order
    pub issues: Vec<Story>,
}

/// Resolve one issue number through the platform.
///
/// Fetches the entity and its timeline. Timeline events of kind
/// `cross-referenced` whose source is a plain issue contribute related
/// stories; pull requests referencing the entity are excluded from the
/// expansion. The timeline is the discovery mechanism here because
/// re-scanning text would also pick up self-references and mentions inside
/// arbitrary comment bodies.
pub async fn resolve_number(platform: &dyn PlatformService, number: u64) -> Result<Resolution> {
    let story = platform.get_issue_or_pull(number).await?;
    let events = platform.list_timeline_events(number).await?;

    let related_issues: Vec<Story> = events
        .into_iter()
        .filter(|event| event.is_cross_reference())
        .filter_map(|event| event.source)
        .filter(|source| !source.is_pull_request)
        .collect();

    debug!(
        number,
        related = related_issues.len(),
        "resolved issue number"
    );
    Ok(Resolution {
        story,
        related_issues,
    })
}

/// Resolve every extracted issue number, sequentially and in encounter
/// order.
///
/// Numbers are not deduplicated first: a number extracted twice is
/// resolved twice and collation collapses the duplicates later. Sequential
/// order matters because first-seen wins in the issue collapse.
pub async fn resolve_all(
    platform: &dyn PlatformService,
    numbers: &[u64],
) -> Result<ResolvedStories> {
    let mut resolved = ResolvedStories::default();
    for &number in numbers {
        let resolution = resolve_number(platform, number).await?;
        if resolution.story.is_pull_request {
            resolved.pulls.push(resolution.story);
        } else {
            resolved.issues.push(resolution.story);
        }
        resolved.issues.extend(resolution.related_issues);
    }
    Ok(resolved)
}
