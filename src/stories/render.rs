//! Markdown rendering of the related-stories section

use crate::types::{Story, VersionMarker};

/// Heading line prefix of the generated section
pub const SECTION_HEADING: &str = "### Related Stories";

/// Render the related-stories section as markdown lines.
///
/// `pulls` and `issues` must already be collated; ordering is preserved as
/// given. Returns an empty sequence when there is nothing to report, so no
/// heading is ever emitted without at least one story. Layout: the marker
/// heading, a `*PullRequests*` subsection when pulls exist, an `*Issues*`
/// subsection when issues exist, with single blank lines separating the
/// parts.
pub fn render_section(
    marker: &VersionMarker,
    pulls: &[Story],
    issues: &[Story],
    target_fullname: &str,
    target_owner: &str,
) -> Vec<String> {
    if pulls.is_empty() && issues.is_empty() {
        return Vec::new();
    }

    let mut lines = vec![format!("{SECTION_HEADING} <!-- {marker} -->"), String::new()];

    if !pulls.is_empty() {
        lines.push("*PullRequests*".to_string());
        lines.push(String::new());
        for pull in pulls {
            lines.push(format!(
                "- {} [#{}]({})",
                pull.title, pull.number, pull.html_url
            ));
        }
        lines.push(String::new());
    }

    if !issues.is_empty() {
        lines.push("*Issues*".to_string());
        lines.push(String::new());
        for issue in issues {
            let label = reference_label(issue, target_fullname, target_owner);
            lines.push(format!("- {} [{}]({})", issue.title, label, issue.html_url));
        }
        lines.push(String::new());
    }

    lines
}

/// Reference label for an issue relative to the target repository
///
/// Same repository: `#9`. Same owner, different repository: `gadgets#4`.
/// Different owner: `other/thing#2`. Owner comparison is an exact match on
/// the owner path component.
fn reference_label(issue: &Story, target_fullname: &str, target_owner: &str) -> String {
    let fullname = issue.repo_fullname();
    if fullname == target_fullname {
        return format!("#{}", issue.number);
    }
    match fullname.split_once('/') {
        Some((owner, repo)) if owner == target_owner => format!("{repo}#{}", issue.number),
        _ => format!("{fullname}#{}", issue.number),
    }
}
