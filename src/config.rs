//! Configuration file support for bom-catalog.
//!
//! Provides YAML-based configuration through `bom-catalog.config.yml` files,
//! including data structures, file loading, and validation. CLI flags take
//! precedence over file values; the file fills in whatever the command line
//! leaves unspecified.

use anyhow::Context;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use crate::catalog_generation::policies::PropertyOverride;
use crate::shared::error::CatalogError;
use crate::shared::Result;

const CONFIG_FILENAME: &str = "bom-catalog.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Starting BOM coordinates (`group:artifact:version`). Multiple
    /// sources feed one traversal and share its dedup state.
    pub sources: Option<Vec<String>>,
    pub format: Option<String>,
    pub output: Option<String>,
    pub repository: Option<String>,
    pub local_repository: Option<String>,
    /// Regex matched in full against dependency group ids.
    pub exclude_groups: Option<String>,
    /// Regex matched in full against dependency artifact ids.
    pub exclude_names: Option<String>,
    pub generate_bom_entry: Option<bool>,
    /// Alias -> replacement value. A value must be a plain string or a
    /// `{version-ref: alias}` mapping; anything else fails validation.
    pub property_overrides: Option<BTreeMap<String, serde_yml::Value>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yml::Value>,
}

impl ConfigFile {
    /// Converts the raw override table into typed overrides, rejecting
    /// unsupported value shapes.
    pub fn parsed_property_overrides(&self) -> Result<BTreeMap<String, PropertyOverride>> {
        let mut parsed = BTreeMap::new();
        if let Some(overrides) = &self.property_overrides {
            for (key, value) in overrides {
                parsed.insert(key.clone(), parse_override(key, value)?);
            }
        }
        Ok(parsed)
    }
}

fn parse_override(key: &str, value: &serde_yml::Value) -> Result<PropertyOverride> {
    match value {
        serde_yml::Value::String(literal) => Ok(PropertyOverride::Literal(literal.clone())),
        serde_yml::Value::Mapping(mapping) => {
            let ref_key = serde_yml::Value::String("version-ref".to_string());
            match (mapping.len(), mapping.get(&ref_key)) {
                (1, Some(serde_yml::Value::String(target))) => {
                    Ok(PropertyOverride::VersionRef(target.clone()))
                }
                _ => Err(CatalogError::InvalidPropertyOverride {
                    key: key.to_string(),
                    details: "mapping overrides must contain exactly one 'version-ref' string"
                        .to_string(),
                }
                .into()),
            }
        }
        other => Err(CatalogError::InvalidPropertyOverride {
            key: key.to_string(),
            details: format!("unsupported value type: {:?}", value_kind(other)),
        }
        .into()),
    }
}

fn value_kind(value: &serde_yml::Value) -> &'static str {
    match value {
        serde_yml::Value::Null => "null",
        serde_yml::Value::Bool(_) => "boolean",
        serde_yml::Value::Number(_) => "number",
        serde_yml::Value::String(_) => "string",
        serde_yml::Value::Sequence(_) => "sequence",
        serde_yml::Value::Mapping(_) => "mapping",
        serde_yml::Value::Tagged(_) => "tagged",
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yml::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(sources) = &config.sources {
        for source in sources {
            crate::catalog_generation::domain::BomCoordinates::parse(source)?;
        }
    }

    // Override shapes fail at load time, never mid-traversal.
    config.parsed_property_overrides()?;

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
