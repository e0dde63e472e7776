use crate::catalog_generation::domain::{VersionCatalog, VersionSpec};
use crate::shared::Result;

/// CatalogSink port - the destination for resolved versions, libraries, and
/// bundles.
///
/// The traversal writes through this interface only; whether entries land in
/// an in-memory accumulator, a build-tool catalog builder, or a test double
/// is invisible to it. The default production sink is `VersionCatalog`
/// itself, which buffers everything so the final output can be committed
/// atomically after a successful traversal.
pub trait CatalogSink {
    /// Registers a named version.
    fn add_version_alias(&mut self, alias: &str, value: &str) -> Result<()>;

    /// Registers a library under an alias, with either a literal version or
    /// a version reference.
    fn add_library(
        &mut self,
        alias: &str,
        group_id: &str,
        artifact_id: &str,
        version: VersionSpec,
    ) -> Result<()>;

    /// Registers (or extends) a bundle of library aliases.
    fn add_bundle(&mut self, alias: &str, members: &[String]) -> Result<()>;
}

impl CatalogSink for VersionCatalog {
    fn add_version_alias(&mut self, alias: &str, value: &str) -> Result<()> {
        VersionCatalog::add_version_alias(self, alias, value)
    }

    fn add_library(
        &mut self,
        alias: &str,
        group_id: &str,
        artifact_id: &str,
        version: VersionSpec,
    ) -> Result<()> {
        VersionCatalog::add_library(self, alias, group_id, artifact_id, version)
    }

    fn add_bundle(&mut self, alias: &str, members: &[String]) -> Result<()> {
        VersionCatalog::add_bundle(self, alias, members)
    }
}
