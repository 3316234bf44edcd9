//! Raw entities as returned by the Coddie API.
//!
//! # Hierarchy
//!
//! - [`Project`]: top-level unit owned by a user. Carries its phase progress
//!   and an AI-maintained context summary.
//! - [`Feature`]: a product capability planned for a project, ordered by priority.
//! - [`Phase`]: an ordered development phase of a project.
//! - [`Step`]: an implementation step inside a phase.
//! - [`Rule`]: a coding-rule file generated for a project, scoped by globs.
//!
//! Identifiers and timestamps are kept as opaque strings. These types are
//! read-only views of upstream state; see [`crate::lean`] for the reduced
//! shapes handed to tool callers.

mod feature;
mod phase;
mod project;
mod rule;
mod status;

pub use feature::*;
pub use phase::*;
pub use project::*;
pub use rule::*;
pub use status::*;
