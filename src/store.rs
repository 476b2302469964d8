//! # Unit Stores
//!
//! A store locates unit documents by kind and name. Stores only parse; they
//! do not check that a document's declared kind and name agree with the
//! request, which is [`crate::unit::validate`]'s job.
//!
//! - [`DirectoryStore`] reads a unit library laid out on disk:
//!
//!   ```text
//!   <root>/
//!     profiles/default.yml
//!     targets/node.yml
//!     packs/bun.yml
//!     templates/claude.md.tmpl
//!   ```
//!
//! - [`MemoryStore`] holds documents in memory, for tests and for embedding
//!   the library without a filesystem.

use glob::Pattern;
use log::{debug, trace};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::unit::{UnitDocument, UnitKind};

/// File extensions tried, in order, when resolving a unit file.
pub const UNIT_EXTENSIONS: [&str; 2] = ["yml", "yaml"];

/// Source of unit documents.
///
/// `Sync` so that the loader can resolve units from several threads.
pub trait UnitStore: Sync {
    /// Load and parse the unit `name` of `kind`.
    fn load(&self, kind: UnitKind, name: &str) -> Result<UnitDocument>;

    /// Names of all units of `kind`, sorted.
    fn list(&self, kind: UnitKind) -> Result<Vec<String>>;
}

/// A unit library rooted at a directory.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The directory holding units of `kind`.
    pub fn kind_dir(&self, kind: UnitKind) -> PathBuf {
        self.root.join(kind.dir_name())
    }

    /// The file backing a unit, if one exists.
    pub fn unit_path(&self, kind: UnitKind, name: &str) -> Option<PathBuf> {
        let dir = self.kind_dir(kind);
        UNIT_EXTENSIONS
            .iter()
            .map(|ext| dir.join(format!("{}.{}", name, ext)))
            .find(|path| path.is_file())
    }
}

impl UnitStore for DirectoryStore {
    fn load(&self, kind: UnitKind, name: &str) -> Result<UnitDocument> {
        // Names are single path components; anything else cannot name a unit.
        if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(Error::NotFound {
                kind,
                name: name.to_string(),
            });
        }

        let path = self.unit_path(kind, name).ok_or_else(|| Error::NotFound {
            kind,
            name: name.to_string(),
        })?;

        debug!("Loading {} '{}' from {}", kind, name, path.display());
        let content = std::fs::read_to_string(&path)?;
        UnitDocument::parse(&content, &path.display().to_string())
    }

    fn list(&self, kind: UnitKind) -> Result<Vec<String>> {
        let dir = self.kind_dir(kind);
        if !dir.is_dir() {
            trace!("No {} directory at {}", kind, dir.display());
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for ext in UNIT_EXTENSIONS {
            let pattern = format!("{}/*.{}", Pattern::escape(&dir.to_string_lossy()), ext);
            for entry in glob::glob(&pattern)? {
                let path = match entry {
                    Ok(path) => path,
                    Err(e) => return Err(Error::Io(e.into_error())),
                };
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }
        names.sort();
        names.dedup();
        trace!("Found {} {} unit(s) in {}", names.len(), kind, dir.display());
        Ok(names)
    }
}

/// An in-memory unit store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    documents: HashMap<(UnitKind, String), String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the YAML source of a unit.
    pub fn insert(&mut self, kind: UnitKind, name: &str, yaml: &str) {
        self.documents
            .insert((kind, name.to_string()), yaml.to_string());
    }

    /// Builder form of [`MemoryStore::insert`].
    pub fn with(mut self, kind: UnitKind, name: &str, yaml: &str) -> Self {
        self.insert(kind, name, yaml);
        self
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl UnitStore for MemoryStore {
    fn load(&self, kind: UnitKind, name: &str) -> Result<UnitDocument> {
        let yaml = self
            .documents
            .get(&(kind, name.to_string()))
            .ok_or_else(|| Error::NotFound {
                kind,
                name: name.to_string(),
            })?;
        UnitDocument::parse(yaml, &format!("{} '{}'", kind, name))
    }

    fn list(&self, kind: UnitKind) -> Result<Vec<String>> {
        let mut names: Vec<String> = self
            .documents
            .keys()
            .filter(|(k, _)| *k == kind)
            .map(|(_, name)| name.clone())
            .collect();
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn library() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join("profiles")).unwrap();
        std::fs::create_dir_all(root.join("targets")).unwrap();
        std::fs::write(
            root.join("profiles/default.yml"),
            "kind: profile\nname: default\nsections:\n  Rules: [always]\n",
        )
        .unwrap();
        std::fs::write(root.join("profiles/strict.yaml"), "kind: profile\n").unwrap();
        std::fs::write(root.join("targets/node.yml"), "kind: target\nname: node\n").unwrap();
        std::fs::write(root.join("targets/notes.txt"), "not a unit").unwrap();
        dir
    }

    #[test]
    fn test_directory_store_loads_yml() {
        let dir = library();
        let store = DirectoryStore::new(dir.path());
        let doc = store.load(UnitKind::Profile, "default").unwrap();
        assert_eq!(doc.name.as_deref(), Some("default"));
        assert_eq!(doc.sections[0].heading, "Rules");
    }

    #[test]
    fn test_directory_store_falls_back_to_yaml() {
        let dir = library();
        let store = DirectoryStore::new(dir.path());
        let doc = store.load(UnitKind::Profile, "strict").unwrap();
        assert_eq!(doc.kind.as_deref(), Some("profile"));
    }

    #[test]
    fn test_directory_store_not_found() {
        let dir = library();
        let store = DirectoryStore::new(dir.path());
        let err = store.load(UnitKind::Pack, "bun").unwrap_err();
        assert!(matches!(err, Error::NotFound { kind: UnitKind::Pack, ref name } if name == "bun"));
    }

    #[test]
    fn test_directory_store_rejects_path_names() {
        let dir = library();
        let store = DirectoryStore::new(dir.path().join("targets"));
        assert!(matches!(
            store.load(UnitKind::Profile, "../profiles/default"),
            Err(Error::NotFound { .. })
        ));
    }

    #[test]
    fn test_directory_store_lists_sorted_names() {
        let dir = library();
        let store = DirectoryStore::new(dir.path());
        assert_eq!(
            store.list(UnitKind::Profile).unwrap(),
            vec!["default", "strict"]
        );
        assert_eq!(store.list(UnitKind::Target).unwrap(), vec!["node"]);
        assert!(store.list(UnitKind::Pack).unwrap().is_empty());
    }

    #[test]
    fn test_directory_store_logs_loaded_path() {
        testing_logger::setup();
        let dir = library();
        let store = DirectoryStore::new(dir.path());
        store.load(UnitKind::Target, "node").unwrap();

        testing_logger::validate(|captured_logs| {
            let loads: Vec<_> = captured_logs
                .iter()
                .filter(|log| log.body.contains("Loading target 'node'"))
                .collect();
            assert_eq!(loads.len(), 1);
            assert_eq!(loads[0].level, log::Level::Debug);
        });
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new()
            .with(UnitKind::Pack, "bun", "kind: pack\nname: bun\n")
            .with(UnitKind::Pack, "biome", "kind: pack\n")
            .with(UnitKind::Target, "node", "kind: target\n");
        assert_eq!(store.len(), 3);
        assert_eq!(store.list(UnitKind::Pack).unwrap(), vec!["biome", "bun"]);
        assert_eq!(
            store.load(UnitKind::Pack, "bun").unwrap().name.as_deref(),
            Some("bun")
        );
        assert!(matches!(
            store.load(UnitKind::Profile, "bun"),
            Err(Error::NotFound { .. })
        ));
    }
}
