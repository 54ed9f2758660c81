//! The related-stories core
//!
//! Pure transformations from commit messages and resolved stories to the
//! markdown section embedded in the release pull request body: reference
//! extraction, collation, rendering, and body splicing. Nothing here
//! touches the network; the effectful flow lives in [`crate::release`].

mod body;
mod collate;
mod extract;
mod render;

pub use body::{existing_marker, merge_section};
pub use collate::{collapse_issues, dedupe_pulls};
pub use extract::extract_issue_number;
pub use render::{SECTION_HEADING, render_section};
