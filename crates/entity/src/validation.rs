//! Per-entity validation rules.
//!
//! Validators are fail-fast: the first violated rule produces the error and
//! later rules are not evaluated. Every message embeds the offending file
//! path so the user can locate the source document. The directory readers
//! call these after parsing; a failed file never enters the result map.

use std::collections::HashSet;
use std::str::FromStr;

use crate::error::{EntityError, Result};
use crate::fs;
use crate::schema::{
    BypassMode, Enforcement, Entity, ExternalUsers, Repository, RuleSet, RuleType, Teams,
    API_VERSION, INCLUDE_ALL, INCLUDE_DEFAULT_BRANCH, REPOSITORY_KIND, RULESET_KIND,
};

fn invalid(message: String) -> EntityError {
    EntityError::Validation(message)
}

/// Header checks shared by every entity kind: apiVersion, kind, non-empty
/// name, and the name-matches-filename convention (`X.yaml` declares
/// `name: X`).
fn validate_header(entity: &Entity, expected_kind: &str, what: &str, path: &str) -> Result<()> {
    if entity.api_version != API_VERSION {
        return Err(invalid(format!(
            "invalid apiVersion: {} (check {} filename {})",
            entity.api_version, what, path
        )));
    }
    if entity.kind != expected_kind {
        return Err(invalid(format!(
            "invalid kind: {} (check {} filename {})",
            entity.kind, what, path
        )));
    }
    if entity.name.is_empty() {
        return Err(invalid(format!(
            "name is empty (check {} filename {})",
            what, path
        )));
    }
    if entity.name != fs::file_stem(path) {
        return Err(invalid(format!(
            "invalid name: {} for {} filename {}",
            entity.name, what, path
        )));
    }
    Ok(())
}

/// Validate a parsed ruleset document against the file it came from.
pub fn validate_ruleset(ruleset: &RuleSet, path: &str) -> Result<()> {
    validate_header(&ruleset.entity, RULESET_KIND, "ruleset", path)?;

    for rule in &ruleset.spec.rules {
        if RuleType::from_str(&rule.ruletype).is_err() {
            return Err(invalid(format!(
                "invalid ruletype: {} (check ruleset filename {})",
                rule.ruletype, path
            )));
        }
    }

    if Enforcement::from_str(&ruleset.spec.enforcement).is_err() {
        return Err(invalid(format!(
            "invalid enforcement: {} (check ruleset filename {})",
            ruleset.spec.enforcement, path
        )));
    }

    for bypass in &ruleset.spec.bypassapps {
        if BypassMode::from_str(&bypass.mode).is_err() {
            return Err(invalid(format!(
                "invalid mode: {} for bypassapp {} (check ruleset filename {})",
                bypass.mode, bypass.appname, path
            )));
        }
    }

    for include in &ruleset.spec.on.include {
        if include.starts_with('~') && include != INCLUDE_DEFAULT_BRANCH && include != INCLUDE_ALL
        {
            return Err(invalid(format!(
                "invalid include: {} (check ruleset filename {})",
                include, path
            )));
        }
    }

    Ok(())
}

/// Validate a parsed repository document against the file it came from and
/// the collaborator-supplied team / external-user tables.
pub fn validate_repository(
    repo: &Repository,
    path: &str,
    teams: &Teams,
    external_users: &ExternalUsers,
) -> Result<()> {
    validate_header(&repo.entity, REPOSITORY_KIND, "repository", path)?;

    for writer in &repo.spec.writers {
        if !teams.contains_key(writer) {
            return Err(invalid(format!(
                "invalid writer: team {} doesn't exist (check repository filename {})",
                writer, path
            )));
        }
    }
    for reader in &repo.spec.readers {
        if !teams.contains_key(reader) {
            return Err(invalid(format!(
                "invalid reader: team {} doesn't exist (check repository filename {})",
                reader, path
            )));
        }
    }

    for reader in &repo.spec.external_user_readers {
        if !external_users.contains_key(reader) {
            return Err(invalid(format!(
                "invalid externalUserReader: {} doesn't exist (check repository filename {})",
                reader, path
            )));
        }
    }
    for writer in &repo.spec.external_user_writers {
        if !external_users.contains_key(writer) {
            return Err(invalid(format!(
                "invalid externalUserWriter: {} doesn't exist (check repository filename {})",
                writer, path
            )));
        }
    }

    let mut seen = HashSet::new();
    for ruleset in &repo.spec.rulesets {
        if ruleset.name.is_empty() {
            return Err(invalid(format!(
                "invalid ruleset: each ruleset must have a name (check repository filename {})",
                path
            )));
        }
        if Enforcement::from_str(&ruleset.definition.enforcement).is_err() {
            return Err(invalid(format!(
                "invalid enforcement: {} for ruleset {} (check repository filename {})",
                ruleset.definition.enforcement, ruleset.name, path
            )));
        }
        if !seen.insert(ruleset.name.as_str()) {
            return Err(invalid(format!(
                "invalid ruleset: name {} used twice (check repository filename {})",
                ruleset.name, path
            )));
        }
    }

    let safe = github_safe_name(&repo.entity.name);
    if safe != repo.entity.name {
        return Err(invalid(format!(
            "invalid name: {} will be changed to {} (check repository filename {})",
            repo.entity.name, safe, path
        )));
    }

    Ok(())
}

/// GitHub's repository-name rewrite: every character outside
/// `[A-Za-z0-9._-]` becomes `-`. A name that the transform would change gets
/// silently renamed by the remote system, so validation rejects it upfront.
pub fn github_safe_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.' {
                c
            } else {
                '-'
            }
        })
        .collect()
}
