//! The release flow
//!
//! Effectful side of the crate: one-hop cross-reference resolution and the
//! orchestrated run against the platform service. Resolution is kept
//! separate from the run so the expansion rules can be exercised on their
//! own.

mod resolve;
mod run;

pub use resolve::{Resolution, ResolvedStories, resolve_all, resolve_number};
pub use run::{RunOutcome, run_release};
