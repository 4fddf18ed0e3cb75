//! Common entity header shared by all configuration documents.

use serde::{Deserialize, Serialize};

/// The only supported `apiVersion` value.
pub const API_VERSION: &str = "v1";

/// `kind` declared by ruleset documents.
pub const RULESET_KIND: &str = "Ruleset";

/// `kind` declared by repository documents.
pub const REPOSITORY_KIND: &str = "Repository";

/// Header carried by every configuration document.
///
/// Concrete entities embed exactly one `Entity` via `#[serde(flatten)]`.
/// Validation always checks these three fields first, before any
/// entity-specific rule.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entity {
    #[serde(rename = "apiVersion", default)]
    pub api_version: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub name: String,
}
