//! YAML schema types with serde deserialization.
//!
//! Every document carries the same three-field header (`apiVersion`, `kind`,
//! `name`) plus an entity-specific `spec` mapping:
//! - `RuleSet`: a named branch-protection policy
//! - `Repository`: access and settings for one repository, optionally
//!   embedding per-repository ruleset overrides
//!
//! Placement metadata (owner team, archived flag) is resolved from file
//! location by the loader, never authored in the documents themselves.

mod context;
mod header;
mod kind;
mod repository;
mod ruleset;

pub use context::*;
pub use header::*;
pub use kind::*;
pub use repository::*;
pub use ruleset::*;
