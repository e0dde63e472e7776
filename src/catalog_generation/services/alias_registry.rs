use std::collections::{BTreeMap, HashMap};

use crate::catalog_generation::domain::{Dependency, VersionSpec};
use crate::catalog_generation::policies::AliasNaming;
use crate::shared::error::CatalogError;
use crate::shared::Result;

/// What an alias was first registered with, kept for collision checks.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RegisteredAlias {
    group_id: String,
    artifact_id: String,
    version_token: String,
}

/// Outcome of registering one dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub alias: String,
    pub version: VersionSpec,
    pub is_version_ref: bool,
}

/// AliasRegistry - decides how each managed dependency lands in the catalog.
///
/// Generates the alias via the configured naming policy, chooses between a
/// version reference and a literal version, and rejects alias collisions.
/// State is scoped to one traversal, like the walker's seen-modules set.
#[derive(Debug, Default)]
pub struct AliasRegistry {
    seen_aliases: HashMap<String, RegisteredAlias>,
}

impl AliasRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a dependency under the version token the walker resolved
    /// for it.
    ///
    /// When the token is a known property alias the library becomes a
    /// version reference (and is eligible for bundling); otherwise the
    /// token is used as the literal version.
    ///
    /// # Errors
    /// `AliasCollision` when the alias was already registered for a
    /// different module - a fatal configuration error naming both sides.
    pub fn register(
        &mut self,
        dep: &Dependency,
        version_token: &str,
        props: &BTreeMap<String, String>,
        naming: &dyn AliasNaming,
    ) -> Result<Registration> {
        let alias = naming.alias(&dep.group_id, &dep.artifact_id)?;

        // Re-registering the same module keeps the first-seen token, so a
        // later BOM cannot shift an alias onto a different version.
        let token = if let Some(existing) = self.seen_aliases.get(&alias) {
            if existing.group_id != dep.group_id || existing.artifact_id != dep.artifact_id {
                return Err(CatalogError::AliasCollision {
                    alias,
                    existing_group: existing.group_id.clone(),
                    existing_artifact: existing.artifact_id.clone(),
                    group: dep.group_id.clone(),
                    artifact: dep.artifact_id.clone(),
                }
                .into());
            }
            existing.version_token.clone()
        } else {
            self.seen_aliases.insert(
                alias.clone(),
                RegisteredAlias {
                    group_id: dep.group_id.clone(),
                    artifact_id: dep.artifact_id.clone(),
                    version_token: version_token.to_string(),
                },
            );
            version_token.to_string()
        };

        let is_version_ref = props.contains_key(&token);
        let version = if is_version_ref {
            VersionSpec::reference(&token)
        } else {
            VersionSpec::literal(&token)
        };

        Ok(Registration {
            alias,
            version,
            is_version_ref,
        })
    }

    /// Bundle name for a version token: periods become dashes.
    pub fn bundle_alias(version_token: &str) -> String {
        version_token.replace('.', "-")
    }
}
