use std::collections::{BTreeMap, HashSet};

use crate::catalog_generation::domain::PomModel;
use crate::catalog_generation::policies::{PropertyOverride, VersionNaming};
use crate::catalog_generation::services::version_resolver::strip_reference;
use crate::shared::error::CatalogError;
use crate::shared::Result;

/// Result of harvesting one BOM's property table.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CollectedProperties {
    /// Newly discovered (alias, resolved value) pairs, in deterministic
    /// property-table order. The caller merges these into the traversal's
    /// accumulated table and registers them as catalog versions.
    pub new_props: Vec<(String, String)>,
    /// Aliases that were already known to the traversal (or appeared twice
    /// within this BOM). Their values from this BOM are discarded;
    /// dependencies referencing them must be excluded, not mis-versioned.
    pub duplicates: Vec<String>,
}

/// Harvests a POM's `<properties>` into version aliases.
///
/// Pure function: the caller owns merging results into traversal state and
/// emitting them to the catalog. Property values that reference other
/// properties of the same BOM are chased through the raw table until a
/// non-reference value is reached; a cycle is a fatal configuration error.
pub fn collect_properties(
    model: &PomModel,
    naming: &dyn VersionNaming,
    overrides: &BTreeMap<String, PropertyOverride>,
    existing: &BTreeMap<String, String>,
) -> Result<CollectedProperties> {
    let mut collected = CollectedProperties::default();
    let mut local_seen: HashSet<String> = HashSet::new();

    for (key, value) in &model.properties {
        // Keys pass through the same wrapper-stripping rule as version
        // tokens, then the naming policy.
        let raw_name = strip_reference(key).unwrap_or(key);
        let alias = naming.version_alias(raw_name);
        if alias.is_empty() {
            // A key like "version" maps to nothing usable as an alias.
            continue;
        }

        if existing.contains_key(&alias) || local_seen.contains(&alias) {
            collected.duplicates.push(alias);
            continue;
        }

        let mut resolved = resolve_value_chain(key, value, model)?;

        if let Some(override_value) = overrides.get(&alias) {
            resolved = apply_override(&alias, override_value, existing, &collected.new_props)?;
        }

        local_seen.insert(alias.clone());
        collected.new_props.push((alias, resolved));
    }

    Ok(collected)
}

/// Follows `${...}` indirection through the owning BOM's raw property table
/// until a non-reference value is reached. References to properties the BOM
/// does not declare are kept verbatim - they point outside this model and
/// the traversal decides what to do with the dependents.
fn resolve_value_chain(start_key: &str, start_value: &str, model: &PomModel) -> Result<String> {
    let mut visited: HashSet<&str> = HashSet::new();
    visited.insert(start_key);

    let mut current = start_value.trim();
    loop {
        let Some(inner) = strip_reference(current) else {
            return Ok(current.to_string());
        };

        if inner == "project.version" {
            return Ok(model.effective_version()?.to_string());
        }

        let Some(next) = model.properties.get(inner) else {
            return Ok(current.to_string());
        };

        if !visited.insert(inner) {
            return Err(CatalogError::CyclicPropertyChain {
                property: start_key.to_string(),
                coordinates: model.coordinates_string(),
            }
            .into());
        }

        current = next.trim();
    }
}

fn apply_override(
    alias: &str,
    override_value: &PropertyOverride,
    existing: &BTreeMap<String, String>,
    collected_so_far: &[(String, String)],
) -> Result<String> {
    match override_value {
        PropertyOverride::Literal(value) => Ok(value.clone()),
        PropertyOverride::VersionRef(target) => existing
            .get(target)
            .cloned()
            .or_else(|| {
                collected_so_far
                    .iter()
                    .find(|(a, _)| a == target)
                    .map(|(_, v)| v.clone())
            })
            .ok_or_else(|| {
                CatalogError::InvalidPropertyOverride {
                    key: alias.to_string(),
                    details: format!(
                        "version-ref target '{}' is not a known version alias",
                        target
                    ),
                }
                .into()
            }),
    }
}
