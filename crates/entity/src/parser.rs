//! Generic entity parser: raw bytes in, typed document out.

use serde::de::DeserializeOwned;

use crate::error::{EntityError, Result};
use crate::fs::ConfigFs;

/// Read the file at `path` through `fs` and deserialize it into `T`.
///
/// IO failures and YAML failures are surfaced as distinct error kinds.
/// Deserialization is two-pass: the document first goes through
/// [`serde_yaml::Value`], which rejects a duplicate key in any mapping —
/// including keys the target schema would ignore — so a duplicate is always
/// a parse failure, never a silent last-value-wins. No business validation
/// happens here; the next step is the entity-specific validator.
pub fn parse_entity<T: DeserializeOwned>(fs: &dyn ConfigFs, path: &str) -> Result<T> {
    let bytes = fs.read_file(path).map_err(|source| EntityError::Io {
        path: path.to_string(),
        source,
    })?;
    let value: serde_yaml::Value =
        serde_yaml::from_slice(&bytes).map_err(|source| EntityError::Parse {
            path: path.to_string(),
            source,
        })?;
    serde_yaml::from_value(value).map_err(|source| EntityError::Parse {
        path: path.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::OsFs;
    use crate::schema::Entity;

    fn write_tree(files: &[(&str, &str)]) -> (tempfile::TempDir, OsFs) {
        let dir = tempfile::TempDir::new().expect("create tempdir");
        for (name, content) in files {
            std::fs::write(dir.path().join(name), content).unwrap();
        }
        let fs = OsFs::new(dir.path());
        (dir, fs)
    }

    #[test]
    fn parses_header_fields() {
        let (_dir, fs) = write_tree(&[(
            "foobar.yaml",
            "apiVersion: v1\nkind: FooBar\nname: name\n",
        )]);
        let e: Entity = parse_entity(&fs, "foobar.yaml").unwrap();
        assert_eq!(e.api_version, "v1");
        assert_eq!(e.kind, "FooBar");
        assert_eq!(e.name, "name");
    }

    #[test]
    fn missing_file_is_io_error() {
        let (_dir, fs) = write_tree(&[]);
        let err = parse_entity::<Entity>(&fs, "foobar.yaml").unwrap_err();
        assert!(matches!(err, EntityError::Io { .. }));
        assert!(err.to_string().contains("foobar.yaml"));
    }

    #[test]
    fn duplicate_mapping_key_is_parse_error() {
        let (_dir, fs) = write_tree(&[(
            "foobar.yaml",
            "apiVersion: v1\nkind: FooBar\nname:\nname:\n",
        )]);
        let err = parse_entity::<Entity>(&fs, "foobar.yaml").unwrap_err();
        assert!(matches!(err, EntityError::Parse { .. }));
    }

    #[test]
    fn duplicate_unknown_key_is_parse_error() {
        // A duplicated key the schema ignores must still fail, not silently
        // take the last value.
        let (_dir, fs) = write_tree(&[(
            "foobar.yaml",
            "apiVersion: v1\nkind: FooBar\nname: name\nbogus: 1\nbogus: 2\n",
        )]);
        let err = parse_entity::<Entity>(&fs, "foobar.yaml").unwrap_err();
        assert!(matches!(err, EntityError::Parse { .. }));
    }

    #[test]
    fn duplicate_nested_key_is_parse_error() {
        let (_dir, fs) = write_tree(&[(
            "api.yaml",
            "apiVersion: v1\nkind: Repository\nname: api\nspec:\n  writers: []\n  writers: []\n",
        )]);
        let err = parse_entity::<crate::schema::Repository>(&fs, "api.yaml").unwrap_err();
        assert!(matches!(err, EntityError::Parse { .. }));
    }

    #[test]
    fn malformed_yaml_is_parse_error() {
        let (_dir, fs) = write_tree(&[("bad.yaml", "this: is: not: valid: [[[")]);
        let err = parse_entity::<Entity>(&fs, "bad.yaml").unwrap_err();
        assert!(matches!(err, EntityError::Parse { .. }));
    }
}
