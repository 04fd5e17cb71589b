//! Catalog manifest types and parsing

use crate::catalog::store::TemplateStore;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Catalog manifest (`templates/catalog.yaml`): the declared contents of
/// the distributed template catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogManifest {
    /// Semver version for CLI compatibility checking.
    pub version: String,

    /// Template identities the render plan may refer to.
    pub files: Vec<String>,
}

impl CatalogManifest {
    /// Name of the manifest file inside a catalog directory.
    pub const FILE_NAME: &'static str = "catalog.yaml";

    /// Load the manifest from a catalog directory.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(Self::FILE_NAME);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_yaml::from_str(&content).context("Failed to parse catalog manifest")
    }

    /// Identities listed in the manifest but absent from the store.
    pub fn missing_from<'a>(&'a self, store: &TemplateStore) -> Vec<&'a str> {
        self.files
            .iter()
            .map(String::as_str)
            .filter(|id| !store.contains(id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_manifest() {
        let manifest: CatalogManifest = serde_yaml::from_str(
            "version: \"0.1.0\"\nfiles:\n  - build.gradle\n  - gitignore\n",
        )
        .unwrap();

        assert_eq!(manifest.version, "0.1.0");
        assert_eq!(manifest.files, ["build.gradle", "gitignore"]);
    }

    #[test]
    fn test_missing_from_reports_unbacked_identities() {
        let manifest = CatalogManifest {
            version: "0.1.0".into(),
            files: vec!["build.gradle".into(), "gradlew".into()],
        };
        let store = TemplateStore::from_entries([("build.gradle", b"apply plugin".to_vec())]);

        assert_eq!(manifest.missing_from(&store), ["gradlew"]);
    }
}
