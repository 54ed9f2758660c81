//! Splicing the rendered section into a pull request body

use super::render::SECTION_HEADING;
use crate::types::VersionMarker;
use regex::Regex;
use std::sync::OnceLock;

fn marker_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"### Related Stories <!-- ([0-9a-f]+)\.\.\.([0-9a-f]+)")
            .expect("marker pattern is valid")
    })
}

/// Extract the version marker from an existing pull request body.
///
/// Recognizes the `### Related Stories <!-- <hex>...<hex>` header anywhere
/// in the body; the closing `-->` is not required.
pub fn existing_marker(body: &str) -> Option<VersionMarker> {
    let caps = marker_pattern().captures(body)?;
    Some(VersionMarker::from_range(format!(
        "{}...{}",
        &caps[1], &caps[2]
    )))
}

/// Merge the rendered section into an existing body.
///
/// A body that already carries a related-stories heading has that heading
/// and every line up to (but excluding) the next `#` heading replaced by
/// `section`; everything outside the run is preserved in order. A body
/// without the heading gets `section` appended after one blank line. Line
/// endings are normalized to `\n`.
///
/// With an empty `section`, a prior related-stories run is dropped
/// entirely rather than leaving a dangling heading behind.
pub fn merge_section(existing: &str, section: &[String]) -> String {
    let mut lines: Vec<String> = Vec::new();

    if existing
        .lines()
        .any(|line| line.starts_with(SECTION_HEADING))
    {
        let mut in_section = false;
        for line in existing.lines() {
            if in_section {
                if line.starts_with('#') {
                    lines.push(line.to_string());
                    in_section = false;
                }
            } else if line.starts_with(SECTION_HEADING) {
                in_section = true;
                lines.extend(section.iter().cloned());
            } else {
                lines.push(line.to_string());
            }
        }
    } else {
        lines.extend(existing.lines().map(ToString::to_string));
        if !lines.is_empty() && !section.is_empty() {
            lines.push(String::new());
        }
        lines.extend(section.iter().cloned());
    }

    lines.join("\n")
}
