//! Flat directory reader for named rulesets.

use tracing::{info, warn};

use crate::error::{EntityError, LoadOutcome};
use crate::fs::{join, ConfigFs};
use crate::parser::parse_entity;
use crate::schema::RuleSet;
use crate::validation::validate_ruleset;

/// Read every ruleset file in `dir` into a name-keyed map.
///
/// A missing directory is valid (an org with no custom rulesets) and yields
/// an empty outcome. Subdirectories and dot-entries are skipped; a file that
/// fails to parse or validate contributes an error and is skipped. Later
/// entries with the same declared name overwrite earlier ones.
pub fn read_ruleset_directory(fs: &dyn ConfigFs, dir: &str) -> LoadOutcome<RuleSet> {
    let mut out = LoadOutcome::new();

    if !fs.exists(dir) {
        return out;
    }

    let entries = match fs.read_dir(dir) {
        Ok(entries) => entries,
        Err(source) => {
            out.error(EntityError::Io {
                path: dir.to_string(),
                source,
            });
            return out;
        }
    };

    for entry in entries {
        if entry.is_dir || entry.name.starts_with('.') {
            continue;
        }
        let path = join(dir, &entry.name);

        let ruleset: RuleSet = match parse_entity(fs, &path) {
            Ok(ruleset) => ruleset,
            Err(err) => {
                warn!(path = %path, error = %err, "failed to parse ruleset file");
                out.error(err);
                continue;
            }
        };

        if let Err(err) = validate_ruleset(&ruleset, &path) {
            warn!(path = %path, error = %err, "ruleset failed validation");
            out.error(err);
            continue;
        }

        info!(name = %ruleset.entity.name, path = %path, "loaded ruleset");
        out.entities.insert(ruleset.entity.name.clone(), ruleset);
    }

    out
}
