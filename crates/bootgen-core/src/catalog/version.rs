//! CLI and catalog version compatibility

use semver::Version;

/// Warning text when the catalog manifest declares a newer version than the
/// running CLI, `None` when the versions are compatible.
///
/// Versions that fail to parse compare as compatible, so a hand-edited
/// manifest never blocks a run.
pub fn compatibility_warning(cli_version: &str, catalog_version: &str) -> Option<String> {
    let cli = Version::parse(cli_version).ok()?;
    let catalog = Version::parse(catalog_version).ok()?;

    (cli < catalog).then(|| format!("template catalog {catalog} expects a CLI newer than {cli}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warns_when_the_catalog_is_newer() {
        let warning = compatibility_warning("0.1.0", "0.2.0").unwrap();
        assert!(warning.contains("0.2.0"));
        assert!(warning.contains("0.1.0"));
    }

    #[test]
    fn test_silent_when_versions_match_or_the_cli_is_newer() {
        assert!(compatibility_warning("0.1.0", "0.1.0").is_none());
        assert!(compatibility_warning("0.2.0", "0.1.0").is_none());
    }

    #[test]
    fn test_unparseable_versions_compare_as_compatible() {
        assert!(compatibility_warning("not-a-version", "0.1.0").is_none());
        assert!(compatibility_warning("0.1.0", "v0.2.0").is_none());
    }
}
