//! Deduplication and ordering of resolved stories

use crate::types::Story;
use std::cmp::Ordering;

/// Sort pull request stories ascending by number and drop duplicates.
///
/// All pulls resolved in one run belong to the target repository, so
/// number equality is identity here.
pub fn dedupe_pulls(mut pulls: Vec<Story>) -> Vec<Story> {
    pulls.sort_by_key(|pull| pull.number);
    pulls.dedup_by_key(|pull| pull.number);
    pulls
}

/// Order issue stories and keep at most one per repository.
///
/// Issues from `target_fullname` sort first, the rest by repository
/// fullname, then by number within a repository. After sorting, only the
/// first issue of each repository survives: the section names which
/// repositories have related activity rather than enumerating every issue,
/// so the target-repo-first, lowest-numbered issue stands in for its
/// repository.
pub fn collapse_issues(issues: Vec<Story>, target_fullname: &str) -> Vec<Story> {
    let mut keyed: Vec<(String, Story)> = issues
        .into_iter()
        .map(|story| (story.repo_fullname(), story))
        .collect();

    keyed.sort_by(|(repo_a, a), (repo_b, b)| {
        if repo_a == repo_b {
            return a.number.cmp(&b.number);
        }
        if repo_a == target_fullname {
            return Ordering::Less;
        }
        if repo_b == target_fullname {
            return Ordering::Greater;
        }
        repo_a.cmp(repo_b)
    });
    keyed.dedup_by(|(repo_a, _), (repo_b, _)| repo_a == repo_b);

    keyed.into_iter().map(|(_, story)| story).collect()
}
