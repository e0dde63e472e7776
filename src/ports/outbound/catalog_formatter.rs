use crate::catalog_generation::domain::VersionCatalog;
use crate::shared::Result;

/// CatalogFormatter port for rendering a finished catalog.
///
/// Concrete formats (gradle-style TOML, JSON) live in the adapter layer;
/// the core only promises a deterministic catalog value to render.
pub trait CatalogFormatter {
    /// Renders the catalog to its textual representation.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    fn format(&self, catalog: &VersionCatalog) -> Result<String>;
}
