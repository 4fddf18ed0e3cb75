//! Error types and the accumulation result shared by all directory readers.

use std::collections::HashMap;
use std::fmt;

/// Errors produced while loading and validating configuration entities.
#[derive(Debug, thiserror::Error)]
pub enum EntityError {
    /// Filesystem I/O error (missing file, permission, ...).
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// YAML deserialization error, including duplicate mapping keys.
    #[error("YAML parse error in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// Semantic validation error. The message always embeds the file path.
    #[error("{0}")]
    Validation(String),
}

/// Result alias for entity operations.
pub type Result<T> = std::result::Result<T, EntityError>;

/// A non-blocking advisory produced while scanning a directory tree.
///
/// Warnings must be surfaced to the user but never abort loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub path: String,
    pub message: String,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Outcome of reading one directory (or tree) of entities.
///
/// Hard errors keep their file out of `entities` and must abort downstream
/// reconciliation; warnings never block. The scan continues past a bad file
/// so one pass reports as many problems as possible.
#[derive(Debug, Default)]
pub struct LoadOutcome<T> {
    /// Successfully parsed and validated entities, keyed by name.
    pub entities: HashMap<String, T>,
    pub errors: Vec<EntityError>,
    pub warnings: Vec<Warning>,
}

impl<T> LoadOutcome<T> {
    pub fn new() -> Self {
        Self {
            entities: HashMap::new(),
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn error(&mut self, err: EntityError) {
        self.errors.push(err);
    }

    pub fn warn(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(Warning {
            path: path.into(),
            message: message.into(),
        });
    }

    /// Whether the scan produced no hard errors.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}
