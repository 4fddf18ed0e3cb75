//! Two-phase repository reader: archive directory first, then the
//! team-ownership tree.

use std::collections::HashMap;

use tracing::{info, warn};

use crate::error::{EntityError, LoadOutcome};
use crate::fs::{extension, join, ConfigFs};
use crate::parser::parse_entity;
use crate::schema::{ExternalUsers, RepoLocation, Repository, Teams};
use crate::validation::validate_repository;

/// Per-team metadata file, never treated as a repository definition.
pub const TEAM_METADATA_FILE: &str = "team.yaml";

/// Read every repository definition under the archive directory and the
/// team tree into a name-keyed map.
///
/// Archived repositories are loaded first so that they participate in
/// global uniqueness checking against active ones: a name defined in both
/// places is a hard error naming both locations, and the name ends up
/// absent from the result map. Ownership is inferred from placement — the
/// top-level subdirectory of `team_root` a file sits under is its owning
/// team, carried unchanged through any nesting; files under `archived_dir`
/// have no owner and are marked archived.
pub fn read_repositories(
    fs: &dyn ConfigFs,
    archived_dir: &str,
    team_root: &str,
    teams: &Teams,
    external_users: &ExternalUsers,
) -> LoadOutcome<Repository> {
    let mut out = LoadOutcome::new();
    // First-seen location per name, kept even after a collision evicts the
    // entity, so a third definition still reports against the first.
    let mut locations: HashMap<String, String> = HashMap::new();

    read_archived(fs, archived_dir, teams, external_users, &mut out, &mut locations);

    if !fs.exists(team_root) {
        return out;
    }
    let entries = match fs.read_dir(team_root) {
        Ok(entries) => entries,
        Err(source) => {
            out.error(EntityError::Io {
                path: team_root.to_string(),
                source,
            });
            return out;
        }
    };
    for entry in entries {
        if entry.is_dir && !entry.name.starts_with('.') {
            read_team_dir(
                fs,
                &join(team_root, &entry.name),
                &entry.name,
                teams,
                external_users,
                &mut out,
                &mut locations,
            );
        }
    }

    out
}

/// Phase 1: flat scan of the archive directory.
fn read_archived(
    fs: &dyn ConfigFs,
    archived_dir: &str,
    teams: &Teams,
    external_users: &ExternalUsers,
    out: &mut LoadOutcome<Repository>,
    locations: &mut HashMap<String, String>,
) {
    if !fs.exists(archived_dir) {
        return;
    }
    let entries = match fs.read_dir(archived_dir) {
        Ok(entries) => entries,
        Err(source) => {
            out.error(EntityError::Io {
                path: archived_dir.to_string(),
                source,
            });
            return;
        }
    };

    for entry in entries {
        if entry.is_dir || entry.name.starts_with('.') {
            continue;
        }
        let path = join(archived_dir, &entry.name);
        if extension(&entry.name) != ".yaml" {
            warn!(path = %path, "skipping archived file without .yaml extension");
            out.warn(path, "file doesn't have a .yaml extension");
            continue;
        }

        let mut repo: Repository = match parse_entity(fs, &path) {
            Ok(repo) => repo,
            Err(err) => {
                warn!(path = %path, error = %err, "failed to parse repository file");
                out.error(err);
                continue;
            }
        };
        if let Err(err) = validate_repository(&repo, &path, teams, external_users) {
            warn!(path = %path, error = %err, "repository failed validation");
            out.error(err);
            continue;
        }

        repo.location = RepoLocation {
            archived: true,
            owner: None,
            directory_path: archived_dir.to_string(),
        };
        let name = repo.entity.name.clone();
        info!(name = %name, path = %path, "loaded archived repository");
        locations.insert(name.clone(), join(archived_dir, &name));
        out.entities.insert(name, repo);
    }
}

/// Phase 2: depth-first walk below one top-level team directory.
///
/// `team` stays the top-level directory name through every nesting level.
fn read_team_dir(
    fs: &dyn ConfigFs,
    dir: &str,
    team: &str,
    teams: &Teams,
    external_users: &ExternalUsers,
    out: &mut LoadOutcome<Repository>,
    locations: &mut HashMap<String, String>,
) {
    let entries = match fs.read_dir(dir) {
        Ok(entries) => entries,
        Err(source) => {
            out.error(EntityError::Io {
                path: dir.to_string(),
                source,
            });
            return;
        }
    };

    for entry in entries {
        if entry.name.starts_with('.') {
            continue;
        }
        if entry.is_dir {
            read_team_dir(
                fs,
                &join(dir, &entry.name),
                team,
                teams,
                external_users,
                out,
                locations,
            );
            continue;
        }
        if entry.name == TEAM_METADATA_FILE || extension(&entry.name) != ".yaml" {
            continue;
        }
        let path = join(dir, &entry.name);

        let mut repo: Repository = match parse_entity(fs, &path) {
            Ok(repo) => repo,
            Err(err) => {
                warn!(path = %path, error = %err, "failed to parse repository file");
                out.error(err);
                continue;
            }
        };
        if let Err(err) = validate_repository(&repo, &path, teams, external_users) {
            warn!(path = %path, error = %err, "repository failed validation");
            out.error(err);
            continue;
        }

        let name = repo.entity.name.clone();
        if let Some(prior) = locations.get(&name) {
            warn!(name = %name, path = %path, prior = %prior, "repository defined twice");
            out.error(EntityError::Validation(format!(
                "repository {} defined in 2 places (check {} and {})",
                name, path, prior
            )));
            // A name defined twice is poisoned: neither definition survives.
            out.entities.remove(&name);
            continue;
        }

        repo.location = RepoLocation {
            archived: false,
            owner: Some(team.to_string()),
            directory_path: dir.to_string(),
        };
        info!(name = %name, team = %team, path = %path, "loaded repository");
        locations.insert(name.clone(), join(team, &name));
        out.entities.insert(name, repo);
    }
}
