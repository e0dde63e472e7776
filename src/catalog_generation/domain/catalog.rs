use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The version slot of a library entry: either a literal version string or
/// a reference to a shared alias in the `[versions]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VersionSpec {
    Literal(String),
    Ref {
        #[serde(rename = "ref")]
        alias: String,
    },
}

impl VersionSpec {
    pub fn literal(value: impl Into<String>) -> Self {
        VersionSpec::Literal(value.into())
    }

    pub fn reference(alias: impl Into<String>) -> Self {
        VersionSpec::Ref {
            alias: alias.into(),
        }
    }

    pub fn is_ref(&self) -> bool {
        matches!(self, VersionSpec::Ref { .. })
    }
}

/// A single library registration: group + name plus a version or
/// version reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryEntry {
    #[serde(rename = "group")]
    pub group_id: String,
    #[serde(rename = "name")]
    pub artifact_id: String,
    pub version: VersionSpec,
}

/// The catalog accumulator: versions, libraries, and bundles collected by a
/// traversal.
///
/// The traversal builds this value up and only on success is it handed to a
/// formatter/presenter, which makes the commit atomic - a failed fetch can
/// never leave a half-written catalog behind. Maps are ordered so that
/// serialization is deterministic regardless of traversal internals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionCatalog {
    #[serde(default)]
    versions: BTreeMap<String, String>,
    #[serde(default)]
    libraries: BTreeMap<String, LibraryEntry>,
    #[serde(default)]
    bundles: BTreeMap<String, Vec<String>>,
}

impl VersionCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a named version. Re-adding the same alias with the same
    /// value is a no-op; a conflicting value is a caller bug surfaced as an
    /// error rather than silently clobbered.
    pub fn add_version_alias(&mut self, alias: &str, value: &str) -> crate::shared::Result<()> {
        if let Some(existing) = self.versions.get(alias) {
            if existing != value {
                anyhow::bail!(
                    "version alias '{}' already holds '{}', refusing to overwrite with '{}'",
                    alias,
                    existing,
                    value
                );
            }
            return Ok(());
        }
        self.versions.insert(alias.to_string(), value.to_string());
        Ok(())
    }

    pub fn add_library(
        &mut self,
        alias: &str,
        group_id: &str,
        artifact_id: &str,
        version: VersionSpec,
    ) -> crate::shared::Result<()> {
        let entry = LibraryEntry {
            group_id: group_id.to_string(),
            artifact_id: artifact_id.to_string(),
            version,
        };
        if let Some(existing) = self.libraries.get(alias) {
            if existing != &entry {
                anyhow::bail!(
                    "library alias '{}' already registered for {}:{}",
                    alias,
                    existing.group_id,
                    existing.artifact_id
                );
            }
            return Ok(());
        }
        self.libraries.insert(alias.to_string(), entry);
        Ok(())
    }

    /// Adds member aliases to a bundle, creating it on first use. Two BOMs
    /// contributing libraries under the same version token extend one bundle.
    pub fn add_bundle(&mut self, alias: &str, members: &[String]) -> crate::shared::Result<()> {
        let bundle = self.bundles.entry(alias.to_string()).or_default();
        for member in members {
            if !bundle.contains(member) {
                bundle.push(member.clone());
            }
        }
        Ok(())
    }

    pub fn versions(&self) -> &BTreeMap<String, String> {
        &self.versions
    }

    pub fn libraries(&self) -> &BTreeMap<String, LibraryEntry> {
        &self.libraries
    }

    pub fn bundles(&self) -> &BTreeMap<String, Vec<String>> {
        &self.bundles
    }

    pub fn get_version(&self, alias: &str) -> Option<&str> {
        self.versions.get(alias).map(String::as_str)
    }

    pub fn get_library(&self, alias: &str) -> Option<&LibraryEntry> {
        self.libraries.get(alias)
    }

    /// Resolves a library's version to a concrete string, following a
    /// version reference through the versions table. Returns `None` for a
    /// dangling reference.
    pub fn resolved_library_version<'a>(&'a self, entry: &'a LibraryEntry) -> Option<&'a str> {
        match &entry.version {
            VersionSpec::Literal(v) => Some(v.as_str()),
            VersionSpec::Ref { alias } => self.get_version(alias),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty() && self.libraries.is_empty() && self.bundles.is_empty()
    }

    pub fn library_count(&self) -> usize {
        self.libraries.len()
    }

    pub fn version_count(&self) -> usize {
        self.versions.len()
    }

    pub fn bundle_count(&self) -> usize {
        self.bundles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_version_alias() {
        let mut catalog = VersionCatalog::new();
        catalog.add_version_alias("assertj", "3.24.2").unwrap();
        assert_eq!(catalog.get_version("assertj"), Some("3.24.2"));
    }

    #[test]
    fn test_add_version_alias_idempotent_same_value() {
        let mut catalog = VersionCatalog::new();
        catalog.add_version_alias("assertj", "3.24.2").unwrap();
        catalog.add_version_alias("assertj", "3.24.2").unwrap();
        assert_eq!(catalog.version_count(), 1);
    }

    #[test]
    fn test_add_version_alias_conflicting_value_fails() {
        let mut catalog = VersionCatalog::new();
        catalog.add_version_alias("assertj", "3.24.2").unwrap();
        let result = catalog.add_version_alias("assertj", "3.25.0");
        assert!(result.is_err());
        assert_eq!(catalog.get_version("assertj"), Some("3.24.2"));
    }

    #[test]
    fn test_add_library_with_version_ref() {
        let mut catalog = VersionCatalog::new();
        catalog.add_version_alias("assertj", "3.24.2").unwrap();
        catalog
            .add_library(
                "assertj.assertj-core",
                "org.assertj",
                "assertj-core",
                VersionSpec::reference("assertj"),
            )
            .unwrap();

        let entry = catalog.get_library("assertj.assertj-core").unwrap();
        assert!(entry.version.is_ref());
        assert_eq!(catalog.resolved_library_version(entry), Some("3.24.2"));
    }

    #[test]
    fn test_resolved_library_version_dangling_ref() {
        let catalog = VersionCatalog::new();
        let entry = LibraryEntry {
            group_id: "org.example".to_string(),
            artifact_id: "lib".to_string(),
            version: VersionSpec::reference("missing"),
        };
        assert_eq!(catalog.resolved_library_version(&entry), None);
    }

    #[test]
    fn test_add_library_conflicting_registration_fails() {
        let mut catalog = VersionCatalog::new();
        catalog
            .add_library(
                "example.lib",
                "org.example",
                "lib",
                VersionSpec::literal("1.0"),
            )
            .unwrap();
        let result = catalog.add_library(
            "example.lib",
            "org.other",
            "lib",
            VersionSpec::literal("1.0"),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_add_bundle_merges_members() {
        let mut catalog = VersionCatalog::new();
        catalog
            .add_bundle("jackson", &["jackson.core".to_string()])
            .unwrap();
        catalog
            .add_bundle(
                "jackson",
                &["jackson.databind".to_string(), "jackson.core".to_string()],
            )
            .unwrap();

        assert_eq!(
            catalog.bundles().get("jackson").unwrap(),
            &vec!["jackson.core".to_string(), "jackson.databind".to_string()]
        );
    }

    #[test]
    fn test_serialization_is_alphabetical() {
        let mut catalog = VersionCatalog::new();
        catalog.add_version_alias("zulu", "1.0").unwrap();
        catalog.add_version_alias("alpha", "2.0").unwrap();
        let keys: Vec<&String> = catalog.versions().keys().collect();
        assert_eq!(keys, vec!["alpha", "zulu"]);
    }

    #[test]
    fn test_is_empty() {
        let mut catalog = VersionCatalog::new();
        assert!(catalog.is_empty());
        catalog.add_version_alias("a", "1").unwrap();
        assert!(!catalog.is_empty());
    }
}
