//! Issue reference extraction from commit messages

use regex::Regex;
use std::sync::OnceLock;

fn issue_ref_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"#(\d+)").expect("issue reference pattern is valid"))
}

/// Extract the first `#<digits>` issue reference from a commit message.
///
/// Only the first match counts; later references in the same message are
/// ignored. Returns None when the message carries no reference or the
/// digits do not fit in a `u64`. `#0` comes back as `Some(0)` and is left
/// to the caller's `n > 0` filter.
pub fn extract_issue_number(message: &str) -> Option<u64> {
    issue_ref_pattern()
        .captures(message)
        .and_then(|caps| caps[1].parse().ok())
}
