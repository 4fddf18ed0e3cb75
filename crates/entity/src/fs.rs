//! File-system abstraction consumed by the directory readers.
//!
//! All paths in this crate are forward-slash-joined relative paths rooted at
//! a single configuration tree. Callers inject a [`ConfigFs`] implementation;
//! [`OsFs`] backs the tree with a directory on the local filesystem.

use std::fs;
use std::io;
use std::path::PathBuf;

/// A single directory entry as reported by [`ConfigFs::read_dir`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
}

/// Read-only view of a configuration tree.
///
/// The loader never writes; `read_file` returns the raw bytes of one
/// document and `read_dir` lists the direct children of one directory.
pub trait ConfigFs {
    /// Whether `path` exists (file or directory).
    fn exists(&self, path: &str) -> bool;

    /// Direct entries of the directory at `path`, sorted by name.
    fn read_dir(&self, path: &str) -> io::Result<Vec<DirEntry>>;

    /// Full contents of the file at `path`.
    fn read_file(&self, path: &str) -> io::Result<Vec<u8>>;
}

/// [`ConfigFs`] backed by `std::fs`, rooted at a local directory.
pub struct OsFs {
    root: PathBuf,
}

impl OsFs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        let mut full = self.root.clone();
        for part in path.split('/').filter(|p| !p.is_empty()) {
            full.push(part);
        }
        full
    }
}

impl ConfigFs for OsFs {
    fn exists(&self, path: &str) -> bool {
        self.resolve(path).exists()
    }

    fn read_dir(&self, path: &str) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(self.resolve(path))? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            let is_dir = entry.file_type()?.is_dir();
            entries.push(DirEntry { name, is_dir });
        }
        // Deterministic scan order, so error ordering is reproducible.
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn read_file(&self, path: &str) -> io::Result<Vec<u8>> {
        fs::read(self.resolve(path))
    }
}

/// Join two forward-slash path segments.
pub fn join(base: &str, name: &str) -> String {
    if base.is_empty() {
        name.to_string()
    } else if base.ends_with('/') {
        format!("{}{}", base, name)
    } else {
        format!("{}/{}", base, name)
    }
}

/// Final path segment.
pub fn base_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Final path segment with its extension stripped.
pub fn file_stem(path: &str) -> &str {
    let base = base_name(path);
    match base.rfind('.') {
        Some(0) | None => base,
        Some(idx) => &base[..idx],
    }
}

/// Extension of the final path segment, including the leading dot.
pub fn extension(path: &str) -> &str {
    let base = base_name(path);
    match base.rfind('.') {
        Some(0) | None => "",
        Some(idx) => &base[idx..],
    }
}
