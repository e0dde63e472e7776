use crate::catalog_generation::domain::VersionCatalog;
use crate::ports::outbound::CatalogFormatter;
use crate::shared::Result;

/// TomlCatalogFormatter - renders the catalog as a gradle-style
/// `libs.versions.toml` document with `[versions]`, `[libraries]`, and
/// `[bundles]` tables.
///
/// Output is deterministic: aliases appear in alphabetical order and the
/// same catalog always serializes to the same bytes.
pub struct TomlCatalogFormatter;

impl TomlCatalogFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TomlCatalogFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogFormatter for TomlCatalogFormatter {
    fn format(&self, catalog: &VersionCatalog) -> Result<String> {
        toml::to_string_pretty(catalog)
            .map_err(|e| anyhow::anyhow!("Failed to serialize catalog to TOML: {}", e))
    }
}

/// JsonCatalogFormatter - renders the catalog as pretty-printed JSON, for
/// consumers that post-process the catalog rather than hand it to a build.
pub struct JsonCatalogFormatter;

impl JsonCatalogFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonCatalogFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogFormatter for JsonCatalogFormatter {
    fn format(&self, catalog: &VersionCatalog) -> Result<String> {
        serde_json::to_string_pretty(catalog)
            .map_err(|e| anyhow::anyhow!("Failed to serialize catalog to JSON: {}", e))
    }
}
