//! Maintains a release pull request with a generated "Related Stories"
//! section.
//!
//! Given a base and head branch, a run detects the commits between them,
//! extracts `#<number>` issue references from their messages, expands each
//! reference one hop through cross-reference timeline events, collates the
//! resulting stories, and renders a deterministic markdown section that is
//! spliced into the body of an open release pull request (or into a newly
//! created one).
//!
//! The crate splits into a pure core ([`stories`]), the effectful flow
//! ([`release`]), and the hosting binding ([`platform`]). All API access
//! goes through [`platform::PlatformService`], so the flow can be driven
//! against an in-memory implementation in tests.

pub mod config;
pub mod error;
pub mod platform;
pub mod release;
pub mod stories;
pub mod types;
