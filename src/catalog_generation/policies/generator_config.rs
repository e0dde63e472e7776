use std::collections::BTreeMap;

use crate::catalog_generation::policies::{
    AliasNaming, DefaultAliasNaming, DefaultVersionNaming, VersionNaming,
};
use crate::catalog_generation::services::DependencyFilter;

/// A configured replacement for a collected property value.
///
/// Only two shapes are recognized: a literal version string, or a reference
/// to another version alias. Configuration loading rejects anything else
/// before a traversal ever sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyOverride {
    Literal(String),
    VersionRef(String),
}

/// The assembled policy object consumed throughout a traversal: naming
/// strategies, exclusion filter, property overrides, and whether the source
/// BOM itself becomes a catalog entry.
///
/// This is the programmatic configuration surface; the YAML file layer in
/// `config` merely produces one of these.
pub struct GeneratorConfig {
    pub alias_naming: Box<dyn AliasNaming>,
    pub version_naming: Box<dyn VersionNaming>,
    pub filter: DependencyFilter,
    pub property_overrides: BTreeMap<String, PropertyOverride>,
    pub generate_bom_entry: bool,
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(mut self, filter: DependencyFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_property_overrides(
        mut self,
        overrides: BTreeMap<String, PropertyOverride>,
    ) -> Self {
        self.property_overrides = overrides;
        self
    }

    pub fn with_bom_entry(mut self, generate_bom_entry: bool) -> Self {
        self.generate_bom_entry = generate_bom_entry;
        self
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            alias_naming: Box::new(DefaultAliasNaming),
            version_naming: Box::new(DefaultVersionNaming::new()),
            filter: DependencyFilter::empty(),
            property_overrides: BTreeMap::new(),
            generate_bom_entry: false,
        }
    }
}

impl std::fmt::Debug for GeneratorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratorConfig")
            .field("filter", &self.filter)
            .field("property_overrides", &self.property_overrides)
            .field("generate_bom_entry", &self.generate_bom_entry)
            .finish_non_exhaustive()
    }
}
