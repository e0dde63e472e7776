use std::path::Path;

use crate::catalog_generation::domain::{BomCoordinates, VersionCatalog, VersionSpec};
use crate::shared::error::CatalogError;
use crate::shared::Result;

/// Parses an existing catalog file (gradle-style TOML) back into a
/// `VersionCatalog`.
///
/// Used both for round-trip checks and to discover a starting BOM from a
/// catalog the user already maintains.
pub fn parse_catalog_file(path: &Path) -> Result<VersionCatalog> {
    let content = std::fs::read_to_string(path).map_err(|e| CatalogError::FileRead {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    toml::from_str(&content).map_err(|e| {
        anyhow::anyhow!(
            "Failed to parse catalog file {}: {}",
            path.display(),
            e
        )
    })
}

/// Looks up a library alias in a parsed catalog and resolves it to concrete
/// BOM coordinates.
///
/// # Errors
/// `CatalogEntryNotFound` when the alias is absent, or when the library
/// points at a version reference the `[versions]` table does not define.
pub fn find_library_coordinates(
    catalog: &VersionCatalog,
    alias: &str,
    path: &Path,
) -> Result<BomCoordinates> {
    let entry = catalog
        .get_library(alias)
        .ok_or_else(|| CatalogError::CatalogEntryNotFound {
            alias: alias.to_string(),
            path: path.to_path_buf(),
        })?;

    let version = match &entry.version {
        VersionSpec::Literal(v) => v.clone(),
        VersionSpec::Ref { alias: ref_alias } => catalog
            .get_version(ref_alias)
            .map(str::to_string)
            .ok_or_else(|| CatalogError::CatalogEntryNotFound {
                alias: ref_alias.clone(),
                path: path.to_path_buf(),
            })?,
    };

    BomCoordinates::new(&entry.group_id, &entry.artifact_id, &version)
}
