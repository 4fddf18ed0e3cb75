//! Read-only validation context supplied by collaborators.
//!
//! Teams and external users are loaded and validated elsewhere; the
//! repository validator only checks membership in these tables and never
//! mutates them.

use std::collections::HashMap;

/// A team known to the organization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Team {
    pub name: String,
}

/// A collaborator from outside the organization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExternalUser {
    pub name: String,
}

/// Lookup table of teams by name.
pub type Teams = HashMap<String, Team>;

/// Lookup table of external users by name.
pub type ExternalUsers = HashMap<String, ExternalUser>;
