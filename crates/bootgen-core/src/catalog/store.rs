//! In-memory template store loaded from a catalog directory

use crate::catalog::manifest::CatalogManifest;
use crate::error::ScaffoldError;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;
use walkdir::WalkDir;

/// Template contents keyed by identity: the path relative to the catalog
/// root, `/`-separated regardless of platform.
#[derive(Debug, Default)]
pub struct TemplateStore {
    files: HashMap<String, Vec<u8>>,
}

impl TemplateStore {
    /// Load every file under `dir`, except the manifest itself.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let mut files = HashMap::new();

        for entry in WalkDir::new(dir) {
            let entry = entry.with_context(|| format!("Failed to scan {}", dir.display()))?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry.path().strip_prefix(dir).unwrap_or(entry.path());
            let id = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            if id == CatalogManifest::FILE_NAME {
                continue;
            }

            let contents = std::fs::read(entry.path())
                .with_context(|| format!("Failed to read {}", entry.path().display()))?;
            files.insert(id, contents);
        }

        Ok(Self { files })
    }

    /// Build a store from literal entries (tests, embedded catalogs).
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<u8>)>,
        S: Into<String>,
    {
        Self {
            files: entries
                .into_iter()
                .map(|(id, contents)| (id.into(), contents))
                .collect(),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.files.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Contents of a template identity.
    pub fn contents(&self, id: &str) -> Result<&[u8], ScaffoldError> {
        self.files
            .get(id)
            .map(Vec::as_slice)
            .ok_or_else(|| ScaffoldError::MissingTemplate { id: id.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_from_dir_loads_nested_files_and_skips_the_manifest() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("catalog.yaml"), "version: \"0.1.0\"\nfiles: []\n").unwrap();
        fs::write(dir.path().join("build.gradle"), "apply plugin: 'groovy'\n").unwrap();
        fs::create_dir_all(dir.path().join("gradle/wrapper")).unwrap();
        fs::write(
            dir.path().join("gradle/wrapper/gradle-wrapper.properties"),
            "distributionUrl=...\n",
        )
        .unwrap();

        let store = TemplateStore::from_dir(dir.path()).unwrap();

        assert_eq!(store.len(), 2);
        assert!(store.contains("build.gradle"));
        assert!(store.contains("gradle/wrapper/gradle-wrapper.properties"));
        assert!(!store.contains(CatalogManifest::FILE_NAME));
    }

    #[test]
    fn test_contents_of_unregistered_identity_fails() {
        let store = TemplateStore::from_entries([("build.gradle", b"x".to_vec())]);

        assert_eq!(store.contents("build.gradle").unwrap(), b"x");
        let err = store.contents("gradlew").unwrap_err();
        assert!(matches!(err, ScaffoldError::MissingTemplate { id } if id == "gradlew"));
    }
}
