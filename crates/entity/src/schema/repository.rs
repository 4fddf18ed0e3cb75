//! Repository documents and their resolved placement metadata.

use serde::{Deserialize, Serialize};

use super::{Entity, RepositoryRuleSet};

/// User-authored repository settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RepositorySpec {
    #[serde(default)]
    pub writers: Vec<String>,
    #[serde(default)]
    pub readers: Vec<String>,
    #[serde(rename = "externalUserReaders", default)]
    pub external_user_readers: Vec<String>,
    #[serde(rename = "externalUserWriters", default)]
    pub external_user_writers: Vec<String>,
    #[serde(rename = "public", default)]
    pub is_public: bool,
    #[serde(default)]
    pub allow_auto_merge: bool,
    #[serde(default)]
    pub delete_branch_on_merge: bool,
    #[serde(default)]
    pub allow_update_branch: bool,
    #[serde(default)]
    pub rulesets: Vec<RepositoryRuleSet>,
}

/// Placement metadata derived from where a repository file was found.
///
/// Not part of the serialized document: the parser leaves it at its default
/// and the directory reader attaches it after traversal, keeping the parse
/// step pure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoLocation {
    /// Set when the file was found under the archive directory.
    pub archived: bool,
    /// Top-level team directory the file was found under. Unset for
    /// archived repositories.
    pub owner: Option<String>,
    /// Directory the file lives in, used to relocate the file on rename.
    pub directory_path: String,
}

/// A repository definition, one per file under the team tree or the archive
/// directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Repository {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(default)]
    pub spec: RepositorySpec,
    /// User-authored intent to rename the repository. Performing the rename
    /// is a collaborator's responsibility.
    #[serde(rename = "renameTo", default, skip_serializing_if = "Option::is_none")]
    pub rename_to: Option<String>,
    #[serde(skip)]
    pub location: RepoLocation,
}
